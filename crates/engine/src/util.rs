//! Internal helpers for identifier normalization.

/// A user identifier in its canonical storage form.
///
/// Ids arrive as text (path segments) or numbers (cost payloads). Numeric
/// text is canonicalized to the integer's decimal rendering so that `"0042"`,
/// `" 42"` and `42` all address the same user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct UserKey {
    pub(crate) canonical: String,
    /// Integer form, used to match `costs.userid`.
    pub(crate) number: Option<i64>,
}

impl UserKey {
    pub(crate) fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(number) => Self {
                canonical: number.to_string(),
                number: Some(number),
            },
            Err(_) => Self {
                canonical: trimmed.to_string(),
                number: None,
            },
        }
    }
}
