use sea_orm::{QueryFilter, QueryOrder, prelude::*};

use crate::{
    MonthlyReport, ResultEngine, costs,
    report::{group_by_category, month_window},
};

use super::Engine;

impl Engine {
    /// Builds the category report of `userid` for one calendar month.
    ///
    /// Inside each bucket, entries are ordered by date.
    pub async fn monthly_report(
        &self,
        userid: i64,
        year: i32,
        month: u32,
    ) -> ResultEngine<MonthlyReport> {
        let window = month_window(year, month)?;

        let rows = costs::Entity::find()
            .filter(costs::Column::Userid.eq(userid))
            .filter(costs::Column::Date.gte(window.start))
            .filter(costs::Column::Date.lte(window.end))
            .order_by_asc(costs::Column::Date)
            .all(&self.database)
            .await?;

        Ok(MonthlyReport {
            userid,
            year,
            month,
            buckets: group_by_category(rows),
        })
    }
}
