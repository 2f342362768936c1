use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use engine::EngineError;

use serde::Serialize;
pub use server::{router, run_with_listener};

mod about;
mod costs;
mod reports;
mod server;
mod users;

pub mod types {
    pub use api_types::Category;

    pub mod cost {
        pub use api_types::cost::{CostNew, CostView};
    }

    pub mod report {
        pub use api_types::report::{CategoryBucket, Report, ReportEntry, ReportQuery};
    }

    pub mod user {
        pub use api_types::user::UserSummary;
    }

    pub mod about {
        pub use api_types::about::TeamMember;
    }
}

pub enum ServerError {
    Engine(EngineError),
    BadRequest(String),
}

impl ServerError {
    /// Report any engine failure as a client error, keeping its message.
    ///
    /// Used on the write and report paths, where every failure is answered
    /// with 400.
    fn bad_request(err: EngineError) -> Self {
        Self::BadRequest(message_for_engine_error(err))
    }
}

fn map_category(category: engine::Category) -> api_types::Category {
    match category {
        engine::Category::Food => api_types::Category::Food,
        engine::Category::Health => api_types::Category::Health,
        engine::Category::Housing => api_types::Category::Housing,
        engine::Category::Sport => api_types::Category::Sport,
        engine::Category::Education => api_types::Category::Education,
    }
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::CONFLICT,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::InvalidCost(_)
        | EngineError::InvalidCategory(_)
        | EngineError::InvalidPeriod(_)
        | EngineError::InvalidUser(_) => StatusCode::BAD_REQUEST,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    if let EngineError::Database(db_err) = &err {
        tracing::error!("database error: {db_err}");
    }
    err.to_string()
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::BadRequest(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(value: QueryRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}
