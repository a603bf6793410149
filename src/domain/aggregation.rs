use std::collections::BTreeMap;

use super::models::{CountryName, MatchResult};

/// Number of titles per winning country, ordered by country name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinTable {
    counts: BTreeMap<CountryName, usize>,
}

impl WinTable {
    pub fn from_results(results: &[MatchResult]) -> Self {
        let mut counts = BTreeMap::new();
        for result in results {
            *counts.entry(result.winner).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn get(&self, country: &str) -> Option<usize> {
        self.counts.get(country).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Distinct winners in alphabetical order.
    pub fn winners(&self) -> Vec<CountryName> {
        self.counts.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CountryName, usize)> + '_ {
        self.counts.iter().map(|(country, wins)| (*country, *wins))
    }

    /// Most titles first; ties keep alphabetical order.
    pub fn ranked(&self) -> Vec<(CountryName, usize)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}
