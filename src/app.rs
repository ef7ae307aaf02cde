//! Interactive session: prompts, paging and the restart loop
//!
//! The controller is generic over its input and output so a whole session can
//! be driven from an in-memory script.

use crate::config::AppConfig;
use crate::data::{City, FilterMode, Selection, TripTable, filter};
use crate::error::{BikeshareError, Result};
use crate::report;
use polars::prelude::{CsvWriter, SerWriter};
use std::io::{BufRead, Write};

const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
const CITY_PROMPT: &str = "Would you like to see data for Chicago, New York City, or Washington?";
const FILTER_PROMPT: &str = "Would you like to filter the data by month, day, or not at all?";
const MONTH_PROMPT: &str = "Which month - January, February, March, April, May, or June?";
const DAY_PROMPT: &str =
    "Which day - Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, or Sunday?";
const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.";

/// Line-oriented question/answer over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print the question and read one trimmed answer
    pub fn ask(&mut self, question: &str) -> Result<String> {
        writeln!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer
    pub fn ask_until<T>(&mut self, question: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
        loop {
            let answer = self.ask(question)?;
            match parse(&answer) {
                Some(value) => return Ok(value),
                None => log::debug!("rejected answer {:?}", answer),
            }
        }
    }

    /// True only for a case-insensitive "yes"
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(self.ask(question)?.eq_ignore_ascii_case("yes"))
    }
}

pub struct App<R, W> {
    config: AppConfig,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(config: AppConfig, input: R, output: W) -> Self {
        Self {
            config,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run sessions until the operator declines to restart or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.session() {
                Ok(true) => continue,
                Ok(false) | Err(BikeshareError::InputClosed) => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }

    /// One pass: filters, load, raw rows, reports. Returns whether to restart.
    fn session(&mut self) -> Result<bool> {
        let (city, selection) = self.get_filters()?;

        let table = TripTable::load(city, &self.config)?;
        let table = filter::apply(&table, &selection)?;
        log::info!(
            "{} trips for {} ({}) from {:?}",
            table.height(),
            city,
            selection,
            table.file_path()
        );
        if table.is_empty() {
            writeln!(self.prompter.output(), "No trips match {} in {}.", selection, city)?;
        }

        self.display_raw_data(&table)?;
        report::write_all(&table, self.prompter.output(), self.config.show_timing)?;

        self.prompter.confirm(RESTART_PROMPT)
    }

    /// Ask for the city and at most one of month / day
    fn get_filters(&mut self) -> Result<(City, Selection)> {
        writeln!(self.prompter.output(), "{}", GREETING)?;

        let city = self.prompter.ask_until(CITY_PROMPT, City::from_name)?;
        let mode = self.prompter.ask_until(FILTER_PROMPT, FilterMode::from_name)?;

        let selection = match mode {
            FilterMode::None => Selection::all(),
            FilterMode::Month => self
                .prompter
                .ask_until(MONTH_PROMPT, |name| Selection::all().with_month(name))?,
            FilterMode::Day => self
                .prompter
                .ask_until(DAY_PROMPT, |name| Selection::all().with_day(name))?,
        };

        writeln!(self.prompter.output(), "{}", report::separator())?;
        Ok((city, selection))
    }

    /// Page through raw rows while the operator keeps answering "yes"
    fn display_raw_data(&mut self, table: &TripTable) -> Result<()> {
        let page_size = self.config.page_size;
        let question = format!(
            "Would you like to see {} lines of raw data? Enter 'yes' or 'no'.",
            page_size
        );

        let mut offset = 0;
        while self.prompter.confirm(&question)? {
            if offset >= table.height() {
                writeln!(self.prompter.output(), "No more rows to display.")?;
                break;
            }
            // CSV keeps every column; the table formatter elides wide frames
            let mut page = table.page(offset, page_size);
            CsvWriter::new(&mut *self.prompter.output()).finish(&mut page)?;
            offset += page_size;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use std::io::Cursor;

    fn run_script(config: AppConfig, script: &str) -> (Result<()>, String) {
        let mut output = Vec::new();
        let result = App::new(config, Cursor::new(script.as_bytes()), &mut output).run();
        (result, String::from_utf8(output).unwrap())
    }

    fn quiet_config() -> AppConfig {
        AppConfig {
            show_timing: false,
            ..fixtures::config()
        }
    }

    #[test]
    fn test_prompter_reprompts_until_valid() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("boston\n\nWashington\n"), &mut output);

        let city = prompter.ask_until(CITY_PROMPT, City::from_name).unwrap();
        assert_eq!(city, City::Washington);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(CITY_PROMPT).count(), 3);
    }

    #[test]
    fn test_prompter_reports_closed_input() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        let err = prompter.ask(CITY_PROMPT).unwrap_err();
        assert!(matches!(err, BikeshareError::InputClosed));
    }

    #[test]
    fn test_confirm_is_case_insensitive() {
        let mut prompter = Prompter::new(Cursor::new("YES\nyep\n"), Vec::new());
        assert!(prompter.confirm("?").unwrap());
        assert!(!prompter.confirm("?").unwrap());
    }

    #[test]
    fn test_month_session_with_invalid_answers() {
        let script = "boston\nwashington\nweekly\nmonth\njuly\njune\nyes\nyes\nno\n";
        let (result, text) = run_script(quiet_config(), script);

        result.unwrap();
        assert_eq!(text.matches(CITY_PROMPT).count(), 2);
        assert_eq!(text.matches(FILTER_PROMPT).count(), 2);
        assert_eq!(text.matches(MONTH_PROMPT).count(), 2);

        // Two June trips fit on the first page; the second "yes" runs out
        assert!(text.contains("No more rows to display."));
        assert!(text.contains("Most common month: June"));
        assert!(text.contains("Trips counted: 2"));
        assert!(!text.contains("Counts of gender"));
        assert_eq!(text.matches(RESTART_PROMPT.trim()).count(), 1);
    }

    #[test]
    fn test_restart_runs_a_second_session() {
        let script = "chicago\nnot at all\nno\nyes\nnew york city\nday\nmonday\nno\nno\n";
        let (result, text) = run_script(quiet_config(), script);

        result.unwrap();
        assert_eq!(text.matches(GREETING).count(), 2);
        assert_eq!(text.matches("Calculating User Stats...").count(), 2);
        assert!(text.contains("Trips counted: 10"));
        assert!(text.contains("Most common day of week: Monday"));
    }

    #[test]
    fn test_raw_page_shows_every_column() {
        let (result, text) = run_script(quiet_config(), "chicago\nnot at all\nyes\nno\nno\n");
        result.unwrap();

        let header = text
            .lines()
            .find(|line| line.contains("Start Time"))
            .unwrap();
        for column in [
            "Start Time",
            "End Time",
            "Trip Duration",
            "Start Station",
            "End Station",
            "User Type",
            "Gender",
            "Birth Year",
            "Month",
            "Day of Week",
            "Hour",
        ] {
            assert!(header.contains(column), "raw page is missing {}", column);
        }
        assert!(!text.contains('…'));
        assert!(text.contains("Wood St & Hubbard St,Damen Ave & Chicago Ave"));
    }

    #[test]
    fn test_empty_selection_is_reported() {
        let script = "washington\nmonth\nmarch\nno\nno\n";
        let (result, text) = run_script(quiet_config(), script);

        result.unwrap();
        assert!(text.contains("No trips match month: March, day: all in Washington."));
        assert!(text.contains("Mean travel time: n/a"));
    }

    #[test]
    fn test_end_of_input_ends_quietly() {
        let (result, text) = run_script(quiet_config(), "chicago\n");
        result.unwrap();
        assert!(text.contains(FILTER_PROMPT));
    }

    #[test]
    fn test_missing_city_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };
        let (result, _) = run_script(config, "chicago\nnot at all\n");
        assert!(matches!(result, Err(BikeshareError::FileIo(_))));
    }
}
