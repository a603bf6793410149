use serde::Serialize;

use crate::domain::{CountryName, Year};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnersResponse {
    pub n_clicks: u32,
    pub winners: Vec<CountryName>,
}

/// Sentence shown under a dropdown; empty when nothing is selected.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownOptions {
    pub countries: Vec<CountryName>,
    pub years: Vec<Year>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub records: usize,
    pub winners: usize,
}
