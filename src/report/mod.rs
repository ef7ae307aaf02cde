//! Statistics reporters
//!
//! Each reporter is a pure function from a [`TripTable`] to a typed result that
//! renders itself with `Display`. [`write_all`] prints the four sections in
//! their fixed order.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use crate::constants::display::SEPARATOR_WIDTH;
use crate::data::TripTable;
use crate::error::Result;
use std::fmt::Display;
use std::io::Write;
use std::time::Duration;

/// Placeholder printed for a statistic with no data behind it
pub(crate) fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Print every statistics section for `table`
pub fn write_all<W: Write>(table: &TripTable, out: &mut W, show_timing: bool) -> Result<()> {
    let (stats, elapsed) = crate::timed!("time_stats", time::compute(table));
    write_section(
        out,
        "Calculating The Most Frequent Times of Travel...",
        &stats?,
        elapsed,
        show_timing,
    )?;

    let (stats, elapsed) = crate::timed!("station_stats", station::compute(table));
    write_section(
        out,
        "Calculating The Most Popular Stations and Trip...",
        &stats?,
        elapsed,
        show_timing,
    )?;

    let (stats, elapsed) = crate::timed!("trip_duration_stats", duration::compute(table));
    write_section(out, "Calculating Trip Duration...", &stats?, elapsed, show_timing)?;

    let (stats, elapsed) = crate::timed!("user_stats", user::compute(table));
    write_section(out, "Calculating User Stats...", &stats?, elapsed, show_timing)?;

    Ok(())
}

fn write_section<W: Write>(
    out: &mut W,
    heading: &str,
    body: &dyn Display,
    elapsed: Duration,
    show_timing: bool,
) -> Result<()> {
    writeln!(out, "\n{}\n", heading)?;
    writeln!(out, "{}", body)?;
    if show_timing {
        writeln!(out, "\nThis took {} seconds.", elapsed.as_secs_f64())?;
    }
    writeln!(out, "{}", separator())?;
    Ok(())
}
