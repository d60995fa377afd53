use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;

use super::AppState;
use crate::api::models::{DashboardResponse, ErrorResponse, SectionResponse};
use crate::services::dashboard::{Dashboard, Section};

// Every request is one render: the feed is reloaded and all statistics rebuilt
async fn render(state: &AppState) -> Result<Dashboard, Response> {
    state.service.run(&state.source).await.map_err(|e| {
        log::error!("Failed to load tournament feed: {}", e);
        let body = ErrorResponse {
            error: e.to_string(),
        };
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    })
}

fn section_response<T: Serialize>(section: Section<T>) -> Response {
    let status = if section.is_failed() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::OK
    };
    (status, Json(SectionResponse::new(section))).into_response()
}

pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match render(&state).await {
        Ok(dashboard) => {
            Json(DashboardResponse::new(state.source.to_string(), dashboard)).into_response()
        }
        Err(response) => response,
    }
}

pub async fn get_fixtures(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match render(&state).await {
        Ok(dashboard) => section_response(dashboard.upcoming),
        Err(response) => response,
    }
}

pub async fn get_results(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match render(&state).await {
        Ok(dashboard) => section_response(dashboard.results),
        Err(response) => response,
    }
}

pub async fn get_standings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match render(&state).await {
        Ok(dashboard) => section_response(dashboard.standings),
        Err(response) => response,
    }
}

pub async fn get_scorers(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match render(&state).await {
        Ok(dashboard) => section_response(dashboard.top_scorers),
        Err(response) => response,
    }
}

pub async fn get_conceded(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match render(&state).await {
        Ok(dashboard) => section_response(dashboard.fewest_conceded),
        Err(response) => response,
    }
}

pub async fn get_discipline(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match render(&state).await {
        Ok(dashboard) => section_response(dashboard.discipline),
        Err(response) => response,
    }
}
