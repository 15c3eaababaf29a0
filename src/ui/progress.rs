use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

use crate::core::types::StreamRecord;
use crate::ui::output;
use crate::validation::runner::CheckOutcome;

/// Console progress for a batch of stream checks.
///
/// Per-stream lines go to stdout; the optional bar lives on stderr and is
/// suspended while a line is printed so the two never interleave.
pub struct ProgressReporter {
    check_progress: Mutex<Option<ProgressBar>>,
    show_bar: bool,
    print_lines: bool,
}

impl ProgressReporter {
    pub fn new(show_bar: bool, print_lines: bool) -> Self {
        Self {
            check_progress: Mutex::new(None),
            show_bar,
            print_lines,
        }
    }

    pub fn start_stream_checks(&self, total_streams: usize) {
        if !self.show_bar {
            return;
        }

        let pb = ProgressBar::new(total_streams as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.yellow/red}] {pos}/{len} streams checked ({eta})",
        ) {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.enable_steady_tick(Duration::from_millis(120));

        if let Ok(mut slot) = self.check_progress.lock() {
            *slot = Some(pb);
        }
    }

    pub fn stream_checked(
        &self,
        completed: usize,
        total: usize,
        record: &StreamRecord,
        outcome: &CheckOutcome,
    ) {
        let line = output::format_progress_line(completed, total, record, outcome);
        self.println(&line);

        if let Ok(slot) = self.check_progress.lock()
            && let Some(ref pb) = *slot
        {
            pb.set_position(completed as u64);
        }
    }

    pub fn finish_stream_checks(&self) {
        if let Ok(mut slot) = self.check_progress.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    /// Print a line to stdout without tearing the progress bar
    pub fn println(&self, line: &str) {
        if !self.print_lines {
            return;
        }

        match self.check_progress.lock() {
            Ok(slot) => match *slot {
                Some(ref pb) => pb.suspend(|| println!("{line}")),
                None => println!("{line}"),
            },
            Err(_) => println!("{line}"),
        }
    }

    pub fn is_bar_active(&self) -> bool {
        self.check_progress
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }
}
