//! Most popular stations and trip

use super::or_na;
use crate::constants::columns;
use crate::data::{TripTable, stats};
use crate::error::Result;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationStats {
    pub popular_start: Option<String>,
    pub popular_end: Option<String>,
    /// Most frequent (start, end) pair
    pub popular_trip: Option<(String, String)>,
}

pub fn compute(table: &TripTable) -> Result<StationStats> {
    let starts = table.text_column(columns::START_STATION)?;
    let ends = table.text_column(columns::END_STATION)?;

    // A trip with either station missing has no pair
    let pairs = starts
        .into_iter()
        .zip(&ends)
        .map(|(start, end)| start.zip(end));

    Ok(StationStats {
        popular_start: stats::mode(&starts).map(str::to_string),
        popular_end: stats::mode(&ends).map(str::to_string),
        popular_trip: stats::mode(pairs)
            .map(|(start, end)| (start.to_string(), end.to_string())),
    })
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Most commonly used start station: {}",
            or_na(self.popular_start.as_deref())
        )?;
        writeln!(
            f,
            "Most commonly used end station: {}",
            or_na(self.popular_end.as_deref())
        )?;
        match &self.popular_trip {
            Some((start, end)) => write!(f, "Most frequent trip: {} -> {}", start, end),
            None => write!(f, "Most frequent trip: {}", or_na(None::<&str>)),
        }
    }
}
