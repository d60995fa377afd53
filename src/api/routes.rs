use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    dashboard::{
        get_conceded, get_dashboard, get_discipline, get_fixtures, get_results, get_scorers,
        get_standings,
    },
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/fixtures", get(get_fixtures))
        .route("/api/results", get(get_results))
        .route("/api/standings", get(get_standings))
        .route("/api/scorers", get(get_scorers))
        .route("/api/conceded", get(get_conceded))
        .route("/api/discipline", get(get_discipline))
        .with_state(state)
}
