//! Monthly report endpoint.

use api_types::report::{CategoryBucket, Report, ReportEntry, ReportQuery};
use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::extract::WithRejection;

use crate::{ServerError, map_category, server::ServerState};

fn map_bucket(bucket: engine::CategoryBucket) -> CategoryBucket {
    CategoryBucket {
        category: map_category(bucket.category),
        entries: bucket
            .entries
            .into_iter()
            .map(|entry| ReportEntry {
                sum: entry.sum,
                description: entry.description,
                day: entry.day,
            })
            .collect(),
    }
}

/// Handle `GET /api/report?id=&year=&month=`.
pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Query(query), _): WithRejection<Query<ReportQuery>, ServerError>,
) -> Result<Json<Report>, ServerError> {
    let report = state
        .engine
        .monthly_report(query.id, query.year, query.month)
        .await
        .map_err(ServerError::bad_request)?;

    Ok(Json(Report {
        userid: report.userid,
        year: report.year,
        month: report.month,
        costs: report.buckets.into_iter().map(map_bucket).collect(),
    }))
}
