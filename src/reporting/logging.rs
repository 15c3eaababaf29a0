use crate::config::Config;
use crate::core::types::StreamRecord;
use crate::validation::runner::CheckOutcome;
use log::{debug, error, info, warn};
use std::io::Write;
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let timeout = config.timeout_duration().as_secs();
    let concurrency = config.concurrency();
    let user_agent = config.user_agent.as_deref().unwrap_or_default();
    let dry_run = config.dry_run.unwrap_or(false);

    info!("Configuration: timeout={timeout}s, concurrency={concurrency}, dry_run={dry_run}");
    info!("HTTP: user_agent={user_agent}");
}

/// Log what was read from the stream list
pub fn log_document_info(path: &Path, record_count: usize, header_found: bool) {
    info!("Read {record_count} streams from {}", path.display());
    if !header_found {
        warn!("No `stream_data: <count>` line found, writing without a header");
    }
}

pub fn log_batch_start(stream_count: usize, concurrency: usize) {
    info!("Checking {stream_count} streams, {concurrency} at a time");
}

pub fn log_batch_complete(working: usize, failed: usize) {
    if failed == 0 {
        info!("✅ Checks complete: all {working} streams reachable");
    } else {
        warn!("❌ Checks complete: {working} reachable, {failed} unreachable");
    }
}

/// Log individual stream results for debugging
pub fn log_stream_result(record: &StreamRecord, outcome: &CheckOutcome) {
    match outcome {
        CheckOutcome::Working => debug!("✓ [{}] {}", record.index(), record.url()),
        CheckOutcome::Failed => debug!("✗ [{}] {}", record.index(), record.url()),
        CheckOutcome::Errored(err) => {
            error!("✗ [{}] {} -> check aborted: {err}", record.index(), record.url())
        }
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn record() -> StreamRecord {
        StreamRecord::from_payload(3, "http://a.example|A|Pop|EN|128|0").unwrap()
    }

    #[test]
    fn test_logger_initialization_twice_does_not_panic() {
        init_logger(true, false);
        init_logger(false, true);
    }

    #[test]
    fn test_log_config_info_with_defaults() {
        log_config_info(&Config::default());
    }

    #[test]
    fn test_log_config_info_without_values() {
        let config = Config {
            timeout: None,
            concurrency: None,
            user_agent: None,
            output: None,
            dry_run: None,
            verbose: None,
            show_progress: None,
        };
        log_config_info(&config);
    }

    #[test]
    fn test_log_document_info() {
        log_document_info(Path::new("live_streams.sii"), 12, true);
        log_document_info(Path::new("live_streams.sii"), 0, false);
    }

    #[test]
    fn test_log_batch_messages() {
        log_batch_start(0, 10);
        log_batch_complete(5, 0);
        log_batch_complete(3, 2);
    }

    #[test]
    fn test_log_stream_result_all_outcomes() {
        log_stream_result(&record(), &CheckOutcome::Working);
        log_stream_result(&record(), &CheckOutcome::Failed);
        log_stream_result(&record(), &CheckOutcome::Errored("task panicked".to_string()));
    }

    #[test]
    fn test_log_error() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        log_error("Could not write stream list", Some(&io_error));
        log_error("Plain message", None);
    }
}
