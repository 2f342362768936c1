//! Users table.
//!
//! Users are keyed by their canonical id: numeric ids are stored in their
//! plain decimal form.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub marital_status: String,
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birthday: NaiveDate,
    pub marital_status: String,
}

/// A user together with the sum of all of their costs.
#[derive(Clone, Debug, PartialEq)]
pub struct UserSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birthday: Date,
    pub marital_status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            birthday: model.birthday,
            marital_status: model.marital_status,
        }
    }
}
