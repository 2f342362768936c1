use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use std::sync::Arc;

use crate::{about, costs, reports, users};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Build the `/api` router around an engine.
pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    let api = Router::new()
        .route("/add", post(costs::add))
        .route("/report", get(reports::get))
        .route("/users/{id}", get(users::get))
        .route("/about", get(about::get));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, router(engine)).await
}
