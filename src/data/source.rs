use super::city::City;
use crate::config::AppConfig;
use crate::constants::{columns, datetime::START_TIME_FORMATS};
use crate::error::{BikeshareError, Result};
use chrono::{Datelike, NaiveDateTime, Timelike};
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// TripTable wraps one city's trips as a Polars DataFrame with the derived
/// `Month`, `Day of Week` and `Hour` columns already attached
#[derive(Debug, Clone)]
pub struct TripTable {
    df: DataFrame,
    /// Original file path
    file_path: Option<PathBuf>,
}

impl TripTable {
    /// Load a city's trips from the configured data directory
    pub fn load(city: City, config: &AppConfig) -> Result<Self> {
        let path = city.source_path(&config.data_dir);
        log::info!("loading {} trips from {}", city, path.display());
        Self::from_csv(&path, config.infer_schema_rows)
    }

    /// Load trips from a CSV file with a header row
    pub fn from_csv(path: &Path, infer_schema_rows: Option<usize>) -> Result<Self> {
        // Surface a missing file as an I/O error rather than a query error
        std::fs::metadata(path)?;

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(infer_schema_rows)
            .finish()?
            .collect()?;

        let mut table = Self::from_dataframe(df)?;
        table.file_path = Some(path.to_path_buf());
        log::debug!("loaded {} rows from {}", table.height(), path.display());
        Ok(table)
    }

    /// Build a table from raw trip rows, parsing the start time and adding
    /// the derived calendar columns
    pub fn from_dataframe(mut df: DataFrame) -> Result<Self> {
        for column in columns::REQUIRED {
            if df.column(column).is_err() {
                return Err(BikeshareError::ColumnNotFound {
                    column: column.to_string(),
                });
            }
        }

        let derived = derive_calendar(&df)?;
        df.with_column(Series::new(columns::MONTH.into(), derived.months))?;
        df.with_column(Series::new(columns::DAY_OF_WEEK.into(), derived.weekdays))?;
        df.with_column(Series::new(columns::HOUR.into(), derived.hours))?;

        Ok(Self {
            df,
            file_path: None,
        })
    }

    /// Same source, different rows. Used by the filter stage.
    pub(super) fn with_rows(&self, df: DataFrame) -> Self {
        Self {
            df,
            file_path: self.file_path.clone(),
        }
    }

    /// Get a reference to the underlying DataFrame
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Get the number of rows
    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Get the file path
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Optional columns (gender, birth year) are only present for some cities
    pub fn has_column(&self, name: &str) -> bool {
        self.df.column(name).is_ok()
    }

    /// Get column values as a Series
    pub fn series(&self, name: &str) -> Result<&Series> {
        self.df
            .column(name)
            .map(|c| c.as_materialized_series())
            .map_err(|_| BikeshareError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    /// Get a column as strings (an all-missing column may not be inferred as text)
    pub fn text_column(&self, name: &str) -> Result<StringChunked> {
        let series = self.series(name)?.cast(&DataType::String)?;
        Ok(series.str()?.clone())
    }

    /// Get a column as 32-bit integers
    pub fn int_column(&self, name: &str) -> Result<Int32Chunked> {
        let series = self.series(name)?.cast(&DataType::Int32)?;
        Ok(series.i32()?.clone())
    }

    /// Rows `offset..offset + len`, clipped to the table
    pub fn page(&self, offset: usize, len: usize) -> DataFrame {
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);
        self.df.slice(offset, len)
    }
}

struct DerivedCalendar {
    months: Vec<i32>,
    weekdays: Vec<i32>,
    hours: Vec<i32>,
}

fn derive_calendar(df: &DataFrame) -> Result<DerivedCalendar> {
    let starts = df
        .column(columns::START_TIME)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    let starts = starts.str()?;

    let n = starts.len();
    let mut derived = DerivedCalendar {
        months: Vec::with_capacity(n),
        weekdays: Vec::with_capacity(n),
        hours: Vec::with_capacity(n),
    };

    // Row numbers in errors are 1-based data rows (header excluded)
    for (idx, value) in starts.into_iter().enumerate() {
        let row = idx + 1;
        let text = value
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(BikeshareError::MissingTimestamp { row })?;

        let timestamp = parse_start_time(text).map_err(|source| BikeshareError::TimestampParse {
            row,
            value: text.to_string(),
            source,
        })?;

        derived.months.push(timestamp.month() as i32);
        derived
            .weekdays
            .push(timestamp.weekday().num_days_from_monday() as i32);
        derived.hours.push(timestamp.hour() as i32);
    }

    Ok(derived)
}

/// Parse a start timestamp such as `2017-01-01 09:07:57`
pub fn parse_start_time(text: &str) -> std::result::Result<NaiveDateTime, chrono::ParseError> {
    let [primary, fallback] = START_TIME_FORMATS;
    NaiveDateTime::parse_from_str(text, primary)
        .or_else(|_| NaiveDateTime::parse_from_str(text, fallback))
}
