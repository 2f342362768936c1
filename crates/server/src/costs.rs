//! Cost write endpoint.

use api_types::cost::{CostNew, CostView};
use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;
use engine::NewCost;

use crate::{ServerError, map_category, server::ServerState};

fn map_cost(cost: engine::Cost) -> CostView {
    CostView {
        id: cost.id,
        description: cost.description,
        category: map_category(cost.category),
        userid: cost.userid,
        sum: cost.sum,
        date: cost.date,
    }
}

/// Handle `POST /api/add`.
pub async fn add(
    State(state): State<ServerState>,
    WithRejection(Json(payload), _): WithRejection<Json<CostNew>, ServerError>,
) -> Result<Json<CostView>, ServerError> {
    let cost = state
        .engine
        .add_cost(NewCost {
            description: payload.description,
            category: payload.category,
            userid: payload.userid,
            sum: payload.sum,
            date: payload.date,
        })
        .await
        .map_err(ServerError::bad_request)?;

    Ok(Json(map_cost(cost)))
}
