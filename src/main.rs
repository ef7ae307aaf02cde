use std::process::ExitCode;

// Interactive controller
mod app;

// Optional JSON configuration
mod config;

// Application constants
mod constants;

// Polars-based trip loading, filtering and aggregation helpers
mod data;

// Error handling
mod error;

mod logging;

// Timing instrumentation
mod perf;

// Statistics reporters
mod report;

use app::App;
use config::AppConfig;
use error::{BikeshareError, Result};

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("fatal: {:?}", e);
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// The single line printed to stderr when a session ends in error
fn failure_message(e: &BikeshareError) -> String {
    format!("{}: {}", e.title(), e.user_message())
}

fn run() -> Result<()> {
    let config = AppConfig::discover()?;
    log::debug!("configuration: {:?}", config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    App::new(config, stdin.lock(), stdout.lock()).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_is_one_line() {
        let err = BikeshareError::ColumnNotFound {
            column: "Start Time".to_string(),
        };
        let message = failure_message(&err);

        assert_eq!(message, "Column Not Found: Column 'Start Time' not found");
        assert!(!message.contains('\n'));
    }
}
