//! Monthly report shaping.
//!
//! A report covers one user and one calendar month (UTC). Costs are split
//! into one bucket per [`Category`], always in [`Category::ALL`] order, so a
//! report has exactly five buckets even when some or all are empty.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::{Category, EngineError, ResultEngine, costs};

#[derive(Clone, Debug, PartialEq)]
pub struct ReportEntry {
    pub sum: f64,
    pub description: String,
    /// Day of the month, 1-based.
    pub day: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryBucket {
    pub category: Category,
    pub entries: Vec<ReportEntry>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyReport {
    pub userid: i64,
    pub year: i32,
    pub month: u32,
    pub buckets: Vec<CategoryBucket>,
}

/// Inclusive time window covering a calendar month.
///
/// `end` is 23:59:59 on the last day of the month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MonthWindow {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

pub fn month_window(year: i32, month: u32) -> ResultEngine<MonthWindow> {
    if !(1000..=9999).contains(&year) {
        return Err(EngineError::InvalidPeriod(format!(
            "year must have four digits, got {year}"
        )));
    }
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidPeriod(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }

    let invalid = || EngineError::InvalidPeriod(format!("invalid month {year}-{month:02}"));

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|next| next.pred_opt())
        .ok_or_else(invalid)?;

    let start = first.and_hms_opt(0, 0, 0).ok_or_else(invalid)?.and_utc();
    let end = last.and_hms_opt(23, 59, 59).ok_or_else(invalid)?.and_utc();

    Ok(MonthWindow { start, end })
}

/// Split cost rows into the five category buckets, keeping row order inside
/// each bucket.
///
/// Rows whose stored category is not a known one are skipped.
pub fn group_by_category<I>(rows: I) -> Vec<CategoryBucket>
where
    I: IntoIterator<Item = costs::Model>,
{
    let mut grouped: [Vec<ReportEntry>; 5] = Default::default();

    for row in rows {
        let Ok(category) = Category::try_from(row.category.as_str()) else {
            tracing::debug!(
                "skipping cost {} with unknown category {:?}",
                row.id,
                row.category
            );
            continue;
        };
        grouped[category.index()].push(ReportEntry {
            sum: row.sum,
            description: row.description,
            day: row.date.day(),
        });
    }

    Category::ALL
        .into_iter()
        .zip(grouped)
        .map(|(category, entries)| CategoryBucket { category, entries })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use uuid::Uuid;

    use super::*;

    fn row(category: &str, description: &str, sum: f64, date: DateTime<Utc>) -> costs::Model {
        costs::Model {
            id: Uuid::new_v4(),
            description: description.to_string(),
            category: category.to_string(),
            userid: 1,
            sum,
            date,
        }
    }

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn window_spans_whole_month() {
        let window = month_window(2025, 5).unwrap();
        assert_eq!(window.start, Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2025, 5, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn window_handles_leap_february_and_december() {
        let feb = month_window(2024, 2).unwrap();
        assert_eq!(feb.end.day(), 29);
        let feb = month_window(2025, 2).unwrap();
        assert_eq!(feb.end.day(), 28);
        let dec = month_window(2025, 12).unwrap();
        assert_eq!(dec.end, Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn window_is_inclusive_at_both_edges() {
        let window = month_window(2025, 5).unwrap();
        assert!(window.contains(Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap()));
        assert!(window.contains(Utc.with_ymd_and_hms(2025, 5, 31, 23, 59, 59).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()));
        assert!(!window.contains(Utc.with_ymd_and_hms(2025, 4, 30, 23, 59, 59).unwrap()));
    }

    #[test]
    fn invalid_periods_are_rejected() {
        for (year, month) in [(2025, 0), (2025, 13), (999, 5), (10000, 5)] {
            assert!(matches!(
                month_window(year, month),
                Err(EngineError::InvalidPeriod(_))
            ));
        }
    }

    #[test]
    fn empty_input_still_yields_five_buckets_in_order() {
        let buckets = group_by_category(Vec::new());
        let order: Vec<_> = buckets.iter().map(|b| b.category).collect();
        assert_eq!(order, Category::ALL);
        assert!(buckets.iter().all(|b| b.entries.is_empty()));
    }

    #[test]
    fn rows_land_in_their_bucket() {
        let buckets = group_by_category(vec![
            row("sport", "gym", 120.0, at(2025, 5, 2)),
            row("food", "milk", 10.0, at(2025, 5, 3)),
            row("food", "bread", 7.5, at(2025, 5, 9)),
            row("education", "course", 300.0, at(2025, 5, 30)),
        ]);

        assert_eq!(
            buckets[0].entries,
            vec![
                ReportEntry {
                    sum: 10.0,
                    description: "milk".to_string(),
                    day: 3,
                },
                ReportEntry {
                    sum: 7.5,
                    description: "bread".to_string(),
                    day: 9,
                },
            ]
        );
        assert!(buckets[1].entries.is_empty());
        assert!(buckets[2].entries.is_empty());
        assert_eq!(buckets[3].entries.len(), 1);
        assert_eq!(buckets[4].entries[0].day, 30);
    }

    #[test]
    fn unknown_categories_are_dropped() {
        let buckets = group_by_category(vec![
            row("transport", "bus", 5.0, at(2025, 5, 4)),
            row("health", "dentist", 200.0, at(2025, 5, 4)),
        ]);
        let total: usize = buckets.iter().map(|b| b.entries.len()).sum();
        assert_eq!(total, 1);
        assert_eq!(buckets[1].entries[0].description, "dentist");
    }
}
