// Command-line interface definitions and parsing for streamsup

use crate::config::CliConfig;
use crate::core::constants::{defaults, limits};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Stream list to check and rewrite
    #[arg(default_value = defaults::INPUT_FILE)]
    pub file: String,

    // Core Options
    /// Probe timeout in seconds (default: 5)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    /// Concurrent stream checks (default: 10)
    #[arg(long, value_name = "COUNT", help_heading = "Core Options")]
    pub concurrency: Option<usize>,

    /// Custom User-Agent header (default: Mozilla/5.0)
    #[arg(long, value_name = "AGENT", help_heading = "Core Options")]
    pub user_agent: Option<String>,

    /// Write the pruned list to FILE instead of overwriting the input
    #[arg(short = 'o', long, value_name = "FILE", help_heading = "Core Options")]
    pub output: Option<String>,

    /// Check streams and report without writing any file
    #[arg(long, help_heading = "Core Options")]
    pub dry_run: bool,

    // Output & Verbosity
    /// Suppress all output except errors
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Disable the progress bar
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed CLI arguments into a CliConfig, exiting on invalid values
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let mut cli_config = CliConfig::default();

    if let Some(timeout) = cli.timeout {
        if timeout == 0 {
            eprintln!(
                "Error: Timeout cannot be 0. Expected a positive integer representing seconds."
            );
            std::process::exit(1);
        }
        if timeout > limits::MAX_TIMEOUT_SECONDS {
            eprintln!(
                "Warning: Timeout of {timeout} seconds is quite large. Consider using a smaller value for better user experience."
            );
        }
        cli_config.timeout = Some(timeout);
    }

    if let Some(concurrency) = cli.concurrency {
        if concurrency == 0 {
            eprintln!("Error: Concurrency cannot be 0. Expected a positive integer.");
            std::process::exit(1);
        }
        cli_config.concurrency = Some(concurrency);
    }

    cli_config.user_agent = cli.user_agent.clone();
    cli_config.output = cli.output.clone();
    cli_config.dry_run = cli.dry_run;
    cli_config.quiet = cli.quiet;
    cli_config.verbose = cli.verbose;
    cli_config.no_progress = cli.no_progress;
    cli_config.config_file = cli.config.clone();
    cli_config.no_config = cli.no_config;

    cli_config
}
