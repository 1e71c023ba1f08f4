use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/index.html", get(handlers::index))
        .route("/medication.html", get(handlers::medication_page))
        .route("/walking.html", get(handlers::walking_page))
        .route("/press/medication", post(handlers::press_medication))
        .route("/press/walking/:status", post(handlers::press_walking))
        .route(
            "/api/log",
            post(handlers::log_health).options(handlers::log_preflight),
        )
        .with_state(state)
}
