use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{DropdownOptions, HealthResponse};
use super::AppState;

pub async fn get_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.page.render(&state.dataset, &state.figure) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            log::error!("Page rendering failed: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Page Rendering Error").into_response()
        }
    }
}

pub async fn get_figure(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.figure.clone())
}

pub async fn get_options(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(DropdownOptions {
        countries: state.dataset.wins().winners(),
        years: state.dataset.years(),
    })
}

pub async fn get_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        records: state.dataset.results().len(),
        winners: state.dataset.wins().len(),
    })
}
