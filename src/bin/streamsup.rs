use clap::Parser;
use streamsup::config::{CliConfig, Config};
use streamsup::document::{parse_file, write_document};
use streamsup::reporting::logging;
use streamsup::ui::output;
use streamsup::ui::{Cli, ProgressReporter, cli_to_config};
use streamsup::validation::{HttpChecker, run_batch};

use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_streamsup_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Parse, check, report and rewrite. Failed streams never change the exit code.
pub async fn run_streamsup_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    let quiet = cli_config.quiet;
    logging::init_logger(config.verbose.unwrap_or(false), quiet);
    logging::log_config_info(&config);

    let input = Path::new(&cli.file);
    if !quiet {
        output::display_parse_start();
    }
    let document = parse_file(input).inspect_err(|e| {
        logging::log_error(&format!("Could not read '{}'", input.display()), Some(e));
    })?;
    logging::log_document_info(input, document.records.len(), !document.header.is_empty());

    if !quiet {
        output::display_stream_count(document.records.len());
        output::display_check_start();
    }

    let checker = Arc::new(HttpChecker::from_config(&config)?);
    let progress = ProgressReporter::new(config.show_progress.unwrap_or(true), true);
    let report = run_batch(
        document.records,
        checker,
        config.concurrency(),
        (!quiet).then_some(&progress),
    )
    .await;

    if !quiet {
        output::display_summary(&report);
    }

    if config.dry_run.unwrap_or(false) {
        if !quiet {
            output::display_dry_run(report.working.len());
        }
        return Ok(0);
    }

    let destination = config.output_path(input);
    if !quiet {
        output::display_write_start();
    }
    write_document(
        &destination,
        &document.header,
        &report.working,
        &document.footer,
    )
    .inspect_err(|e| {
        logging::log_error(
            &format!("Could not write '{}'", destination.display()),
            Some(e),
        );
    })?;
    if !quiet {
        output::display_write_complete(report.working.len());
    }

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}
