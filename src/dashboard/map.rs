use serde::Serialize;

use crate::config::settings::MapSettings;
use crate::domain::{CountryName, WinTable};

/// Plotly figure: a single choropleth trace plus layout.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<ChoroplethTrace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethTrace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub locationmode: String,
    pub locations: Vec<CountryName>,
    pub z: Vec<usize>,
    pub text: Vec<CountryName>,
    pub hovertemplate: String,
    pub colorscale: String,
    pub zmin: usize,
    pub zmax: usize,
    pub colorbar: ColorBar,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    pub margin: Margin,
    pub geo: Geo,
}

#[derive(Debug, Clone, Serialize)]
pub struct Margin {
    pub r: u32,
    pub t: u32,
    pub l: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Geo {
    pub showframe: bool,
    pub showcoastlines: bool,
}

/// Builds the choropleth of titles per country.
///
/// Only winners appear as locations; every other country is left unfilled.
pub fn build_figure(wins: &WinTable, settings: &MapSettings) -> Figure {
    let (locations, z): (Vec<CountryName>, Vec<usize>) = wins.iter().unzip();
    let zmax = z.iter().copied().max().unwrap_or(0);

    let trace = ChoroplethTrace {
        trace_type: "choropleth",
        locationmode: settings.location_mode.clone(),
        text: locations.clone(),
        locations,
        z,
        hovertemplate: format!(
            "<b>%{{text}}</b><br>{}=%{{z}}<extra></extra>",
            settings.value_label
        ),
        colorscale: settings.color_scale.clone(),
        zmin: 0,
        zmax,
        colorbar: ColorBar {
            title: Title {
                text: settings.value_label.clone(),
            },
        },
    };

    Figure {
        data: vec![trace],
        layout: Layout {
            title: Title {
                text: settings.title.clone(),
            },
            margin: Margin {
                r: 0,
                t: settings.top_margin,
                l: 0,
                b: 0,
            },
            geo: Geo {
                showframe: false,
                showcoastlines: true,
            },
        },
    }
}
