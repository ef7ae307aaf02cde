//! Total and average trip duration

use super::or_na;
use crate::constants::columns;
use crate::data::{TripTable, stats};
use crate::error::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DurationStats {
    /// Trips with a recorded duration
    pub trips: usize,
    pub total_seconds: f64,
    /// Undefined (None) when there are no trips
    pub mean_seconds: Option<f64>,
    pub shortest_seconds: Option<f64>,
    pub longest_seconds: Option<f64>,
}

pub fn compute(table: &TripTable) -> Result<DurationStats> {
    let summary = stats::summarize(table.series(columns::TRIP_DURATION)?)?;

    Ok(DurationStats {
        trips: summary.count,
        total_seconds: summary.sum,
        mean_seconds: summary.mean,
        shortest_seconds: summary.min,
        longest_seconds: summary.max,
    })
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trips counted: {}", self.trips)?;
        writeln!(f, "Total travel time: {:.2} seconds", self.total_seconds)?;
        match self.mean_seconds {
            Some(mean) => writeln!(f, "Mean travel time: {:.2} seconds", mean)?,
            None => writeln!(f, "Mean travel time: {}", or_na(None::<f64>))?,
        }
        write!(
            f,
            "Shortest / longest trip: {} / {} seconds",
            or_na(self.shortest_seconds),
            or_na(self.longest_seconds)
        )
    }
}
