//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{defaults, limits};
use crate::core::error::{Result, StreamsUpError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Timeout in seconds for each probe request
    pub timeout: Option<u64>,

    /// Number of stream checks in flight at once
    pub concurrency: Option<usize>,

    /// User-Agent header sent with every probe
    pub user_agent: Option<String>,

    /// Write the pruned list here instead of over the input
    pub output: Option<String>,

    /// Check streams and report, but leave the file untouched
    pub dry_run: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Show a progress bar while checking
    pub show_progress: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(defaults::TIMEOUT_SECONDS),
            concurrency: Some(defaults::CONCURRENCY),
            user_agent: Some(defaults::USER_AGENT.to_string()),
            output: None, // Overwrite the input file
            dry_run: Some(false),
            verbose: Some(false),
            show_progress: Some(true),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            StreamsUpError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            StreamsUpError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Look for `.streamsup.toml` in `dir` and up to three parents
    pub fn search_from(dir: &Path) -> Option<Self> {
        let mut candidate: PathBuf = dir.join(defaults::CONFIG_FILE);
        for level in 0..=defaults::CONFIG_SEARCH_DEPTH {
            match Self::load_from_file(&candidate) {
                Ok(config) => {
                    debug!("Loaded config from {}", candidate.display());
                    return Some(config);
                }
                Err(e) => debug!("No usable config at level {level}: {e}"),
            }
            candidate = dir
                .join("../".repeat(level + 1))
                .join(defaults::CONFIG_FILE);
        }
        None
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        Self::search_from(Path::new(".")).unwrap_or_default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(concurrency) = cli_config.concurrency {
            self.concurrency = Some(concurrency);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref output) = cli_config.output {
            self.output = Some(output.clone());
        }
        if cli_config.dry_run {
            self.dry_run = Some(true);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if cli_config.no_progress {
            self.show_progress = Some(false);
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(defaults::TIMEOUT_SECONDS))
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency.unwrap_or(defaults::CONCURRENCY)
    }

    /// Where the pruned list is written: the configured output or the input
    pub fn output_path(&self, input: &Path) -> PathBuf {
        self.output
            .as_ref()
            .map_or_else(|| input.to_path_buf(), PathBuf::from)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(StreamsUpError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > limits::MAX_TIMEOUT_SECONDS {
                return Err(StreamsUpError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if let Some(concurrency) = self.concurrency {
            if concurrency == 0 {
                return Err(StreamsUpError::Config(
                    "Concurrency cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if concurrency > limits::MAX_CONCURRENCY {
                return Err(StreamsUpError::Config(format!(
                    "Concurrency of {concurrency} is extremely high. Consider using a smaller value."
                )));
            }
        }

        if let Some(ref user_agent) = self.user_agent
            && user_agent.trim().is_empty()
        {
            return Err(StreamsUpError::Config(
                "User-Agent cannot be empty.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub timeout: Option<u64>,         // --timeout
    pub concurrency: Option<usize>,   // --concurrency
    pub user_agent: Option<String>,   // --user-agent
    pub output: Option<String>,       // --output
    pub dry_run: bool,                // --dry-run
    pub quiet: bool,                  // --quiet
    pub verbose: bool,                // --verbose
    pub no_progress: bool,            // --no-progress
    pub config_file: Option<String>,  // --config
    pub no_config: bool,              // --no-config
}
