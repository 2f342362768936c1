use chrono::Utc;
use sea_orm::ActiveModelTrait;

use crate::{Cost, NewCost, ResultEngine};

use super::Engine;

impl Engine {
    /// Validates and stores a new cost, returning the stored record.
    ///
    /// `date` defaults to the current time when absent.
    pub async fn add_cost(&self, cost: NewCost) -> ResultEngine<Cost> {
        let active = cost.into_active_model(Utc::now())?;
        let model = active.insert(&self.database).await?;
        tracing::debug!(
            "stored cost {} for user {} ({})",
            model.id,
            model.userid,
            model.category
        );
        Cost::try_from(model)
    }
}
