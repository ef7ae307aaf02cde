//! Optional JSON configuration
//!
//! Every field has a default, so a missing `bikeshare.json` simply means the
//! city files are read from the working directory.

use crate::constants::config::CONFIG_FILE;
use crate::constants::display::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::error::{BikeshareError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding the city CSV files
    pub data_dir: PathBuf,

    /// Raw rows printed per "yes" when paging
    pub page_size: usize,

    /// Print "This took N seconds." after each statistics section
    pub show_timing: bool,

    /// Rows scanned for CSV schema inference (None = whole file)
    pub infer_schema_rows: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            page_size: DEFAULT_PAGE_SIZE,
            show_timing: true,
            infer_schema_rows: None,
        }
    }
}

impl AppConfig {
    /// Load `bikeshare.json` from the working directory, or defaults if absent
    pub fn discover() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            log::debug!("no {} found, using defaults", CONFIG_FILE);
            Ok(Self::default())
        }
    }

    /// Load and validate a configuration file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: AppConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validate and fix any out-of-range values
    pub fn validate(&mut self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(BikeshareError::Config("data_dir must not be empty".to_string()));
        }
        if self.infer_schema_rows == Some(0) {
            return Err(BikeshareError::Config(
                "infer_schema_rows must be at least 1".to_string(),
            ));
        }

        self.page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        Ok(())
    }
}
