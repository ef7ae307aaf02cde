//! Rider demographics
//!
//! User types are always reported. Gender and birth year only exist in some
//! city files; when a column is absent its section is skipped entirely.

use super::or_na;
use crate::constants::columns;
use crate::data::{TripTable, stats};
use crate::error::Result;
use polars::prelude::*;
use std::fmt;

/// Birth-year aggregates over non-missing values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: Option<i64>,
    pub most_recent: Option<i64>,
    pub most_common: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStats {
    /// Trips per user type, most frequent first (ties in first-seen order)
    pub user_types: Vec<(String, usize)>,
    /// None when the city has no gender column
    pub genders: Option<Vec<(String, usize)>>,
    /// None when the city has no birth-year column
    pub birth_years: Option<BirthYears>,
}

pub fn compute(table: &TripTable) -> Result<UserStats> {
    let user_types = stats::tally_strings(&table.text_column(columns::USER_TYPE)?);

    let genders = if table.has_column(columns::GENDER) {
        Some(stats::tally_strings(&table.text_column(columns::GENDER)?))
    } else {
        None
    };

    let birth_years = if table.has_column(columns::BIRTH_YEAR) {
        Some(summarize_birth_years(table.series(columns::BIRTH_YEAR)?)?)
    } else {
        None
    };

    Ok(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

/// Birth years arrive as floats (`1992.0`) because the column has gaps
fn summarize_birth_years(series: &Series) -> PolarsResult<BirthYears> {
    let years = series.cast(&DataType::Int64)?;
    let years = years.i64()?;

    Ok(BirthYears {
        earliest: years.min(),
        most_recent: years.max(),
        most_common: stats::mode(years),
    })
}

fn write_counts(f: &mut fmt::Formatter<'_>, counts: &[(String, usize)]) -> fmt::Result {
    if counts.is_empty() {
        return write!(f, "\n  {}", or_na(None::<&str>));
    }
    for (label, count) in counts {
        write!(f, "\n  {}: {}", label, count)?;
    }
    Ok(())
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Counts of user types:")?;
        write_counts(f, &self.user_types)?;

        if let Some(genders) = &self.genders {
            write!(f, "\n\nCounts of gender:")?;
            write_counts(f, genders)?;
        }

        if let Some(years) = &self.birth_years {
            write!(f, "\n\nBirth year statistics:")?;
            write!(f, "\n  Earliest birth year: {}", or_na(years.earliest))?;
            write!(f, "\n  Most recent birth year: {}", or_na(years.most_recent))?;
            write!(f, "\n  Most common birth year: {}", or_na(years.most_common))?;
        }
        Ok(())
    }
}
