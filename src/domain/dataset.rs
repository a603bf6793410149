use anyhow::{Result, bail};
use log::info;
use std::collections::HashSet;

use super::aggregation::WinTable;
use super::models::{MatchResult, Year};

pub const FIRST_YEAR: Year = 1930;
pub const LAST_YEAR: Year = 2022;

pub const RESULTS: [MatchResult; 22] = [
    MatchResult::new(1930, "Uruguay", "Argentina"),
    MatchResult::new(1934, "Italy", "Czechoslovakia"),
    MatchResult::new(1938, "Italy", "Hungary"),
    MatchResult::new(1950, "Uruguay", "Brazil"),
    MatchResult::new(1954, "Germany", "Hungary"),
    MatchResult::new(1958, "Brazil", "Sweden"),
    MatchResult::new(1962, "Brazil", "Czechoslovakia"),
    MatchResult::new(1966, "England", "Germany"),
    MatchResult::new(1970, "Brazil", "Italy"),
    MatchResult::new(1974, "Germany", "Netherlands"),
    MatchResult::new(1978, "Argentina", "Netherlands"),
    MatchResult::new(1982, "Italy", "Germany"),
    MatchResult::new(1986, "Argentina", "Germany"),
    MatchResult::new(1990, "Germany", "Argentina"),
    MatchResult::new(1994, "Brazil", "Italy"),
    MatchResult::new(1998, "France", "Brazil"),
    MatchResult::new(2002, "Brazil", "Germany"),
    MatchResult::new(2006, "Italy", "France"),
    MatchResult::new(2010, "Spain", "Netherlands"),
    MatchResult::new(2014, "Germany", "Argentina"),
    MatchResult::new(2018, "France", "Croatia"),
    MatchResult::new(2022, "Argentina", "France"),
];

/// The fixed results together with the tables derived from them.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    results: Vec<MatchResult>,
    wins: WinTable,
}

impl Dataset {
    pub fn load() -> Result<Self> {
        let dataset = Self::from_results(RESULTS.to_vec())?;
        info!(
            "Loaded {} results, {} distinct winners",
            dataset.results.len(),
            dataset.wins.len()
        );
        Ok(dataset)
    }

    pub fn from_results(results: Vec<MatchResult>) -> Result<Self> {
        validate(&results)?;
        let wins = WinTable::from_results(&results);
        Ok(Self { results, wins })
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn wins(&self) -> &WinTable {
        &self.wins
    }

    pub fn find_by_year(&self, year: Year) -> Option<&MatchResult> {
        self.results.iter().find(|r| r.year == year)
    }

    /// Tournament years in ascending order.
    pub fn years(&self) -> Vec<Year> {
        let mut years: Vec<Year> = self.results.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years
    }
}

fn validate(results: &[MatchResult]) -> Result<()> {
    let mut seen = HashSet::new();
    for result in results {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&result.year) {
            bail!("Year {} is outside {}-{}", result.year, FIRST_YEAR, LAST_YEAR);
        }
        if !seen.insert(result.year) {
            bail!("Duplicate result for year {}", result.year);
        }
        if result.winner.trim().is_empty() || result.runner_up.trim().is_empty() {
            bail!("Missing country name in result for year {}", result.year);
        }
    }
    Ok(())
}
