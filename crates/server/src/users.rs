use api_types::user::UserSummary;
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, server::ServerState};

/// Handle `GET /api/users/{id}`: the user with the total of their costs.
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<UserSummary>, ServerError> {
    let summary = state.engine.user_summary(&id).await?;

    Ok(Json(UserSummary {
        id: summary.id,
        first_name: summary.first_name,
        last_name: summary.last_name,
        total: summary.total,
    }))
}
