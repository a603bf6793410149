pub mod aggregation;
pub mod dataset;
pub mod models;

pub use aggregation::WinTable;
pub use dataset::Dataset;
pub use models::{CountryName, MatchResult, Year};
