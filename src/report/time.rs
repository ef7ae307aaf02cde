//! Most frequent times of travel

use super::or_na;
use crate::constants::columns;
use crate::data::filter::{day_name, month_name};
use crate::data::{TripTable, stats};
use crate::error::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeStats {
    /// Month number, 1 = January
    pub popular_month: Option<i32>,
    /// Weekday number, 0 = Monday
    pub popular_day: Option<i32>,
    /// Start hour, 0..=23
    pub popular_hour: Option<i32>,
}

pub fn compute(table: &TripTable) -> Result<TimeStats> {
    let months = table.int_column(columns::MONTH)?;
    let days = table.int_column(columns::DAY_OF_WEEK)?;
    let hours = table.int_column(columns::HOUR)?;

    Ok(TimeStats {
        popular_month: stats::mode(&months),
        popular_day: stats::mode(&days),
        popular_hour: stats::mode(&hours),
    })
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Most common month: {}",
            or_na(self.popular_month.and_then(month_name))
        )?;
        writeln!(
            f,
            "Most common day of week: {}",
            or_na(self.popular_day.and_then(day_name))
        )?;
        write!(f, "Most common start hour: {}", or_na(self.popular_hour))
    }
}
