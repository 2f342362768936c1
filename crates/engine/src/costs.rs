//! Cost records.
//!
//! A `Cost` is one expense entry. It is written once and never updated.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use uuid::Uuid;

use crate::{Category, EngineError, ResultEngine};

#[derive(Clone, Debug, PartialEq)]
pub struct Cost {
    pub id: Uuid,
    pub description: String,
    pub category: Category,
    pub userid: i64,
    pub sum: f64,
    pub date: DateTime<Utc>,
}

/// Unvalidated input for a new cost.
///
/// Fields are optional so that the engine, not the transport, decides what
/// a missing field means.
#[derive(Clone, Debug, Default)]
pub struct NewCost {
    pub description: Option<String>,
    pub category: Option<String>,
    pub userid: Option<i64>,
    pub sum: Option<f64>,
    /// Defaults to the insertion time.
    pub date: Option<DateTime<Utc>>,
}

impl NewCost {
    /// Check required fields and the category, then build the row to insert.
    pub(crate) fn into_active_model(self, now: DateTime<Utc>) -> ResultEngine<ActiveModel> {
        let description = self
            .description
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| EngineError::InvalidCost("description is required".to_string()))?;
        let category = self
            .category
            .ok_or_else(|| EngineError::InvalidCost("category is required".to_string()))?;
        let category = Category::try_from(category.as_str())?;
        let userid = self
            .userid
            .ok_or_else(|| EngineError::InvalidCost("userid is required".to_string()))?;
        let sum = self
            .sum
            .ok_or_else(|| EngineError::InvalidCost("sum is required".to_string()))?;
        if !sum.is_finite() {
            return Err(EngineError::InvalidCost(
                "sum must be a finite number".to_string(),
            ));
        }

        Ok(ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            description: ActiveValue::Set(description),
            category: ActiveValue::Set(category.as_str().to_string()),
            userid: ActiveValue::Set(userid),
            sum: ActiveValue::Set(sum),
            date: ActiveValue::Set(self.date.unwrap_or(now)),
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "costs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub description: String,
    pub category: String,
    pub userid: i64,
    pub sum: f64,
    pub date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Cost {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            category: Category::try_from(model.category.as_str())?,
            description: model.description,
            userid: model.userid,
            sum: model.sum,
            date: model.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn milk() -> NewCost {
        NewCost {
            description: Some("milk".to_string()),
            category: Some("food".to_string()),
            userid: Some(123123),
            sum: Some(10.0),
            date: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn valid_cost_defaults_date_to_now() {
        let active = milk().into_active_model(now()).unwrap();
        assert_eq!(active.date.unwrap(), now());
        assert_eq!(active.category.unwrap(), "food");
        assert_eq!(active.userid.unwrap(), 123123);
    }

    #[test]
    fn explicit_date_is_kept() {
        let date = Utc.with_ymd_and_hms(2024, 1, 31, 23, 0, 0).unwrap();
        let active = NewCost {
            date: Some(date),
            ..milk()
        }
        .into_active_model(now())
        .unwrap();
        assert_eq!(active.date.unwrap(), date);
    }

    #[test]
    fn padded_description_is_stored_untouched() {
        let active = NewCost {
            description: Some(" milk ".to_string()),
            ..milk()
        }
        .into_active_model(now())
        .unwrap();
        assert_eq!(active.description.unwrap(), " milk ");
    }

    #[test]
    fn blank_description_is_rejected() {
        let err = NewCost {
            description: Some("   ".to_string()),
            ..milk()
        }
        .into_active_model(now())
        .unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidCost("description is required".to_string())
        );
    }

    #[test]
    fn each_required_field_is_checked() {
        let missing = [
            NewCost {
                category: None,
                ..milk()
            },
            NewCost {
                userid: None,
                ..milk()
            },
            NewCost {
                sum: None,
                ..milk()
            },
        ];
        for cost in missing {
            assert!(matches!(
                cost.into_active_model(now()),
                Err(EngineError::InvalidCost(_))
            ));
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = NewCost {
            category: Some("transport".to_string()),
            ..milk()
        }
        .into_active_model(now())
        .unwrap_err();
        assert_eq!(err, EngineError::InvalidCategory("transport".to_string()));
    }

    #[test]
    fn non_finite_sum_is_rejected() {
        let result = NewCost {
            sum: Some(f64::NAN),
            ..milk()
        }
        .into_active_model(now());
        assert!(matches!(result, Err(EngineError::InvalidCost(_))));
    }
}
