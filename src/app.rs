use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/records", get(handlers::get_records))
        .route("/api/increment", post(handlers::increment))
        .route("/api/chart", post(handlers::render_chart))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
