use futures::{StreamExt, stream};
use std::sync::Arc;

use crate::core::types::StreamRecord;
use crate::reporting::logging;
use crate::ui::progress::ProgressReporter;
use crate::validation::checker::CheckStream;

/// Result of checking a single stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Working,
    Failed,
    /// The check task itself died; the stream counts as failed
    Errored(String),
}

impl CheckOutcome {
    pub fn is_working(&self) -> bool {
        matches!(self, CheckOutcome::Working)
    }
}

/// Streams partitioned by reachability.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Reachable streams, ascending by declared index
    pub working: Vec<StreamRecord>,
    /// Unreachable streams, in file order
    pub failed: Vec<StreamRecord>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.working.len() + self.failed.len()
    }
}

/// Check every record with at most `concurrency` checks in flight.
///
/// Each check runs in its own task so a panicking check only fails its own
/// record. Outcomes land in one slot per record and are partitioned once
/// every check has completed.
pub async fn run_batch(
    records: Vec<StreamRecord>,
    checker: Arc<dyn CheckStream>,
    concurrency: usize,
    progress: Option<&ProgressReporter>,
) -> BatchReport {
    let total = records.len();
    logging::log_batch_start(total, concurrency);

    if let Some(prog) = progress {
        prog.start_stream_checks(total);
    }

    let mut slots: Vec<Option<CheckOutcome>> = vec![None; total];
    let mut completions = stream::iter(records.iter().enumerate())
        .map(|(slot, record)| {
            let checker = Arc::clone(&checker);
            let url = record.url().to_string();
            async move {
                let outcome = match tokio::spawn(async move { checker.check(&url).await }).await
                {
                    Ok(true) => CheckOutcome::Working,
                    Ok(false) => CheckOutcome::Failed,
                    Err(err) => CheckOutcome::Errored(err.to_string()),
                };
                (slot, outcome)
            }
        })
        .buffer_unordered(concurrency.max(1));

    let mut completed = 0;
    while let Some((slot, outcome)) = completions.next().await {
        completed += 1;
        let record = &records[slot];
        logging::log_stream_result(record, &outcome);
        if let Some(prog) = progress {
            prog.stream_checked(completed, total, record, &outcome);
        }
        slots[slot] = Some(outcome);
    }
    drop(completions);

    let mut report = BatchReport::default();
    for (record, outcome) in records.into_iter().zip(slots) {
        match outcome {
            Some(CheckOutcome::Working) => report.working.push(record),
            _ => report.failed.push(record),
        }
    }
    report.working.sort_by_key(StreamRecord::index);

    if let Some(prog) = progress {
        prog.finish_stream_checks();
    }
    logging::log_batch_complete(report.working.len(), report.failed.len());

    report
}
