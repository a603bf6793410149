use anyhow::Result;
use serde::Deserialize;

use crate::config::settings::AppConfig;
use crate::dashboard::{Figure, PageRenderer, build_figure};
use crate::domain::{Dataset, Year};

pub mod lookups;
pub mod page;

pub struct AppState {
    pub dataset: Dataset,
    pub config: AppConfig,
    pub figure: Figure,
    pub page: PageRenderer,
}

impl AppState {
    pub fn new(dataset: Dataset, config: AppConfig) -> Result<Self> {
        let figure = build_figure(dataset.wins(), &config.map);
        let page = PageRenderer::new()?;
        Ok(Self {
            dataset,
            config,
            figure,
            page,
        })
    }
}

#[derive(Deserialize)]
pub struct WinnersParams {
    pub n_clicks: Option<u32>,
}

#[derive(Deserialize)]
pub struct CountryParams {
    pub country: Option<String>,
}

#[derive(Deserialize)]
pub struct YearParams {
    pub year: Option<Year>,
}
