//! Month / weekday selection and the filter stage

use super::source::TripTable;
use crate::constants::{
    calendar::{DAY_NAMES, FILTER_MONTHS, MONTH_NAMES},
    columns,
};
use crate::error::Result;
use polars::prelude::*;
use std::fmt;

/// How the operator wants to narrow the data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Month,
    Day,
    None,
}

impl FilterMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "month" => Some(FilterMode::Month),
            "day" => Some(FilterMode::Day),
            "not at all" => Some(FilterMode::None),
            _ => None,
        }
    }
}

/// 1-based month number for a selectable month name (January..June only)
pub fn month_index(name: &str) -> Option<i32> {
    let name = name.trim();
    FILTER_MONTHS
        .iter()
        .position(|month| month.eq_ignore_ascii_case(name))
        .map(|idx| idx as i32 + 1)
}

/// 0-based weekday number (Monday = 0) for a day name
pub fn weekday_index(name: &str) -> Option<i32> {
    let name = name.trim();
    DAY_NAMES
        .iter()
        .position(|day| day.eq_ignore_ascii_case(name))
        .map(|idx| idx as i32)
}

/// Display name of a derived month number
pub fn month_name(month: i32) -> Option<&'static str> {
    let idx = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(idx).copied()
}

/// Display name of a derived weekday number
pub fn day_name(day: i32) -> Option<&'static str> {
    DAY_NAMES.get(usize::try_from(day).ok()?).copied()
}

/// Month and/or weekday constraint. `None` means "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    month: Option<i32>,
    day: Option<i32>,
}

impl Selection {
    /// No constraint: every row matches
    pub fn all() -> Self {
        Self::default()
    }

    /// Constrain to a month by name; None if the name is not selectable
    pub fn with_month(mut self, name: &str) -> Option<Self> {
        self.month = Some(month_index(name)?);
        Some(self)
    }

    /// Constrain to a weekday by name; None if the name is unknown
    pub fn with_day(mut self, name: &str) -> Option<Self> {
        self.day = Some(weekday_index(name)?);
        Some(self)
    }

    /// Active constraints joined with AND
    fn predicate(&self) -> Option<Expr> {
        let month = self.month.map(|m| col(columns::MONTH).eq(lit(m)));
        let day = self.day.map(|d| col(columns::DAY_OF_WEEK).eq(lit(d)));

        match (month, day) {
            (Some(month), Some(day)) => Some(month.and(day)),
            (month, day) => month.or(day),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = self.month.and_then(month_name).unwrap_or("all");
        let day = self.day.and_then(day_name).unwrap_or("all");
        write!(f, "month: {}, day: {}", month, day)
    }
}

/// Keep the rows matching `selection`. An empty result is valid.
pub fn apply(table: &TripTable, selection: &Selection) -> Result<TripTable> {
    let Some(predicate) = selection.predicate() else {
        return Ok(table.clone());
    };

    let df = table.dataframe().clone().lazy().filter(predicate).collect()?;
    log::debug!(
        "filter ({}) kept {} of {} rows",
        selection,
        df.height(),
        table.height()
    );
    Ok(table.with_rows(df))
}
