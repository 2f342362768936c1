//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidCost`] thrown when a cost misses a required field.
//! - [`InvalidCategory`] thrown when a category is not one of the known ones.
//! - [`KeyNotFound`] thrown when an item is not found.
//!
//!  [`InvalidCost`]: EngineError::InvalidCost
//!  [`InvalidCategory`]: EngineError::InvalidCategory
//!  [`KeyNotFound`]: EngineError::KeyNotFound
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid cost: {0}")]
    InvalidCost(String),
    #[error("Invalid category: \"{0}\" is not one of food, health, housing, sport, education")]
    InvalidCategory(String),
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
    #[error("Invalid user: {0}")]
    InvalidUser(String),
    #[error("{0} not found")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidCost(a), Self::InvalidCost(b)) => a == b,
            (Self::InvalidCategory(a), Self::InvalidCategory(b)) => a == b,
            (Self::InvalidPeriod(a), Self::InvalidPeriod(b)) => a == b,
            (Self::InvalidUser(a), Self::InvalidUser(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
