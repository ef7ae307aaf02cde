pub mod city;
pub mod filter;
pub mod source;
pub mod stats;

// Re-export key types for convenience
pub use city::City;
pub use filter::{FilterMode, Selection};
pub use source::TripTable;

/// Shared test data: small city files under `tests/fixtures/`
#[cfg(test)]
pub(crate) mod fixtures {
    use super::{City, TripTable};
    use crate::config::AppConfig;
    use crate::constants::columns;
    use polars::prelude::*;
    use std::path::PathBuf;

    pub fn fixture_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
    }

    pub fn config() -> AppConfig {
        AppConfig {
            data_dir: fixture_dir(),
            ..AppConfig::default()
        }
    }

    pub fn load(city: City) -> TripTable {
        TripTable::load(city, &config()).unwrap()
    }

    /// Minimal raw trips with the given start times
    pub fn trips_starting_at(starts: &[&str]) -> DataFrame {
        let n = starts.len();
        df!(
            columns::START_TIME => starts,
            columns::TRIP_DURATION => vec![60.0; n],
            columns::START_STATION => vec!["A"; n],
            columns::END_STATION => vec!["B"; n],
            columns::USER_TYPE => vec!["Subscriber"; n]
        )
        .unwrap()
    }
}
