use serde::{Deserialize, Serialize};

mod de;

/// Expense classification, lowercase on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Health,
    Housing,
    Sport,
    Education,
}

pub mod cost {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    use super::*;

    /// Request body for `POST /api/add`.
    ///
    /// Every field is optional at the wire level so that a missing field is
    /// reported by the validator with a readable message instead of a
    /// deserialization failure.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CostNew {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        /// Raw category text; checked against [`Category`] by the engine.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub category: Option<String>,
        /// Accepts a JSON integer or a numeric string.
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "crate::de::user_id"
        )]
        pub userid: Option<i64>,
        /// Accepts a JSON number or a numeric string.
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "crate::de::amount"
        )]
        pub sum: Option<f64>,
        /// RFC3339 timestamp or a plain `YYYY-MM-DD` date (midnight UTC).
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "crate::de::timestamp"
        )]
        pub date: Option<DateTime<Utc>>,
    }

    /// A stored cost record.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct CostView {
        pub id: Uuid,
        pub description: String,
        pub category: Category,
        pub userid: i64,
        pub sum: f64,
        pub date: DateTime<Utc>,
    }
}

pub mod report {
    use std::collections::BTreeMap;

    use super::*;

    /// Query string of `GET /api/report`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ReportQuery {
        pub id: i64,
        pub year: i32,
        pub month: u32,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ReportEntry {
        pub sum: f64,
        pub description: String,
        /// Day of the month the cost was recorded on.
        pub day: u32,
    }

    /// One category's entries.
    ///
    /// Serialized as a single-key object, e.g. `{"food": [...]}`.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(
        try_from = "BTreeMap<Category, Vec<ReportEntry>>",
        into = "BTreeMap<Category, Vec<ReportEntry>>"
    )]
    pub struct CategoryBucket {
        pub category: Category,
        pub entries: Vec<ReportEntry>,
    }

    impl From<CategoryBucket> for BTreeMap<Category, Vec<ReportEntry>> {
        fn from(bucket: CategoryBucket) -> Self {
            BTreeMap::from([(bucket.category, bucket.entries)])
        }
    }

    impl TryFrom<BTreeMap<Category, Vec<ReportEntry>>> for CategoryBucket {
        type Error = String;

        fn try_from(value: BTreeMap<Category, Vec<ReportEntry>>) -> Result<Self, Self::Error> {
            if value.len() != 1 {
                return Err(format!(
                    "category bucket must have exactly one key, got {}",
                    value.len()
                ));
            }
            let mut iter = value.into_iter();
            match iter.next() {
                Some((category, entries)) => Ok(Self { category, entries }),
                None => Err("empty category bucket".to_string()),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Report {
        pub userid: i64,
        pub year: i32,
        pub month: u32,
        pub costs: Vec<CategoryBucket>,
    }
}

pub mod user {
    use super::*;

    /// Response body for `GET /api/users/{id}`.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct UserSummary {
        pub id: String,
        pub first_name: String,
        pub last_name: String,
        /// Sum of every cost recorded for the user.
        pub total: f64,
    }
}

pub mod about {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TeamMember {
        pub first_name: String,
        pub last_name: String,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Category,
        cost::CostNew,
        report::{CategoryBucket, ReportEntry},
    };
    use serde_json::json;

    #[test]
    fn category_uses_lowercase_names() {
        let value = serde_json::to_value(Category::Education).unwrap();
        assert_eq!(value, json!("education"));
        let parsed: Category = serde_json::from_value(json!("housing")).unwrap();
        assert_eq!(parsed, Category::Housing);
    }

    #[test]
    fn bucket_serializes_as_single_key_object() {
        let bucket = CategoryBucket {
            category: Category::Food,
            entries: vec![ReportEntry {
                sum: 10.0,
                description: "milk".to_string(),
                day: 3,
            }],
        };
        let value = serde_json::to_value(&bucket).unwrap();
        assert_eq!(
            value,
            json!({"food": [{"sum": 10.0, "description": "milk", "day": 3}]})
        );

        let back: CategoryBucket = serde_json::from_value(value).unwrap();
        assert_eq!(back, bucket);
    }

    #[test]
    fn bucket_with_two_keys_is_rejected() {
        let result: Result<CategoryBucket, _> =
            serde_json::from_value(json!({"food": [], "sport": []}));
        assert!(result.is_err());
    }

    #[test]
    fn cost_new_accepts_numeric_string_userid() {
        let body: CostNew = serde_json::from_value(json!({
            "description": "bus",
            "category": "sport",
            "userid": " 42 ",
            "sum": 3.5
        }))
        .unwrap();
        assert_eq!(body.userid, Some(42));
        assert_eq!(body.date, None);
    }

    #[test]
    fn cost_new_accepts_numeric_string_sum() {
        let body: CostNew = serde_json::from_value(json!({"sum": " 10.5 "})).unwrap();
        assert_eq!(body.sum, Some(10.5));
        let body: CostNew = serde_json::from_value(json!({"sum": 10})).unwrap();
        assert_eq!(body.sum, Some(10.0));
    }

    #[test]
    fn cost_new_rejects_non_numeric_sum() {
        for sum in [json!("ten"), json!("NaN"), json!("inf"), json!(true)] {
            let result: Result<CostNew, _> = serde_json::from_value(json!({ "sum": sum }));
            assert!(result.is_err(), "{sum}");
        }
    }

    #[test]
    fn cost_new_rejects_out_of_range_userid() {
        let result: Result<CostNew, _> =
            serde_json::from_value(json!({"userid": 9.223372036854776e18}));
        assert!(result.is_err());
    }

    #[test]
    fn cost_new_rejects_fractional_userid() {
        let result: Result<CostNew, _> = serde_json::from_value(json!({"userid": 4.2}));
        assert!(result.is_err());
    }

    #[test]
    fn cost_new_accepts_plain_date() {
        let body: CostNew = serde_json::from_value(json!({"date": "2025-05-31"})).unwrap();
        let date = body.date.unwrap();
        assert_eq!(date.to_rfc3339(), "2025-05-31T00:00:00+00:00");
    }

    #[test]
    fn cost_new_missing_fields_are_none() {
        let body: CostNew = serde_json::from_value(json!({})).unwrap();
        assert!(body.description.is_none());
        assert!(body.category.is_none());
        assert!(body.userid.is_none());
        assert!(body.sum.is_none());
    }
}
