//! Event handlers for the three dashboard controls.
//!
//! Each one is a pure function of the current selection and the shared
//! dataset; an empty selection yields an empty output.

use log::debug;

use crate::domain::{CountryName, Dataset, WinTable, Year};

/// Click counter of the "Show All Winners" button for one page session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowWinnersButton {
    n_clicks: u32,
}

impl ShowWinnersButton {
    pub const ID: &'static str = "show-winners-btn";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clicks(n_clicks: u32) -> Self {
        Self { n_clicks }
    }

    pub fn n_clicks(&self) -> u32 {
        self.n_clicks
    }

    /// Registers one click and returns what the winners list should show.
    pub fn activate(&mut self, wins: &WinTable) -> Vec<CountryName> {
        self.n_clicks = self.n_clicks.saturating_add(1);
        show_winners(self.n_clicks, wins)
    }
}

pub fn show_winners(n_clicks: u32, wins: &WinTable) -> Vec<CountryName> {
    if n_clicks > 0 {
        debug!("Show winners activated ({} clicks)", n_clicks);
        wins.winners()
    } else {
        Vec::new()
    }
}

pub fn country_wins(selected: Option<&str>, wins: &WinTable) -> String {
    let Some(country) = selected.map(str::trim).filter(|c| !c.is_empty()) else {
        return String::new();
    };
    debug!("Country lookup: {}", country);

    match wins.get(country) {
        Some(times) => format!("{} has won the World Cup {} time(s).", country, times),
        None => format!("{} has not won the World Cup.", country),
    }
}

pub fn year_info(selected: Option<Year>, dataset: &Dataset) -> String {
    let Some(year) = selected else {
        return String::new();
    };
    debug!("Year lookup: {}", year);

    match dataset.find_by_year(year) {
        Some(result) => format!(
            "In {}, the winner was {}, and the runner-up was {}.",
            year, result.winner, result.runner_up
        ),
        None => "No data found for that year.".to_string(),
    }
}
