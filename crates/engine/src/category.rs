//! Expense categories.

use std::fmt;

use crate::EngineError;

/// The closed set of expense classifications.
///
/// Declaration order is report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Health,
    Housing,
    Sport,
    Education,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Food,
        Self::Health,
        Self::Housing,
        Self::Sport,
        Self::Education,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Health => "health",
            Self::Housing => "housing",
            Self::Sport => "sport",
            Self::Education => "education",
        }
    }

    /// Position of the category inside [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Food => 0,
            Self::Health => 1,
            Self::Housing => 2,
            Self::Sport => 3,
            Self::Education => 4,
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "food" => Ok(Self::Food),
            "health" => Ok(Self::Health),
            "housing" => Ok(Self::Housing),
            "sport" => Ok(Self::Sport),
            "education" => Ok(Self::Education),
            other => Err(EngineError::InvalidCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_category() {
        for category in Category::ALL {
            assert_eq!(Category::try_from(category.as_str()), Ok(category));
        }
    }

    #[test]
    fn rejects_unknown_category() {
        assert_eq!(
            Category::try_from("transport"),
            Err(EngineError::InvalidCategory("transport".to_string()))
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(Category::try_from("Food").is_err());
    }

    #[test]
    fn index_matches_position_in_all() {
        for (position, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), position);
        }
    }
}
