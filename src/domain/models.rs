use serde::Serialize;

pub type Year = u16;
pub type CountryName = &'static str;

/// One tournament final: who won and who finished second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub year: Year,
    pub winner: CountryName,
    pub runner_up: CountryName,
}

impl MatchResult {
    pub const fn new(year: Year, winner: CountryName, runner_up: CountryName) -> Self {
        Self {
            year,
            winner,
            runner_up,
        }
    }
}
