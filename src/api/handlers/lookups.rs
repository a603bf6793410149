use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{LookupResponse, WinnersResponse};
use crate::dashboard::{country_wins, show_winners, year_info};
use super::{AppState, CountryParams, WinnersParams, YearParams};

/// Output of `show-winners-btn`; the page sends its own click count.
pub async fn get_winners(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WinnersParams>,
) -> impl IntoResponse {
    let n_clicks = params.n_clicks.unwrap_or(0);
    Json(WinnersResponse {
        n_clicks,
        winners: show_winners(n_clicks, state.dataset.wins()),
    })
}

pub async fn get_country_wins(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CountryParams>,
) -> impl IntoResponse {
    Json(LookupResponse {
        text: country_wins(params.country.as_deref(), state.dataset.wins()),
    })
}

pub async fn get_year_info(
    State(state): State<Arc<AppState>>,
    Query(params): Query<YearParams>,
) -> impl IntoResponse {
    Json(LookupResponse {
        text: year_info(params.year, &state.dataset),
    })
}
