//! Progress reporting for long-running bulk operations.
//!
//! The client never owns a console or log file; callers inject a sink and
//! the client reports chunk advancement through it.

use std::time::Instant;

/// Reporting collaborator passed into bulk operations.
pub trait ProgressSink {
    /// A bulk operation of `total` steps is starting.
    fn begin(&mut self, total: usize, label: &str);

    /// One step completed.
    fn advance(&mut self);

    /// The operation finished.
    fn finish(&mut self);
}

/// Silent sink for callers that do not track progress.
#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn begin(&mut self, _total: usize, _label: &str) {}
    fn advance(&mut self) {}
    fn finish(&mut self) {}
}

/// Sink reporting through the tracing layer, with a steps-per-second
/// summary on completion.
#[derive(Debug, Default)]
pub struct LogProgress {
    label: String,
    total: usize,
    done: usize,
    started: Option<Instant>,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressSink for LogProgress {
    fn begin(&mut self, total: usize, label: &str) {
        self.label = label.to_string();
        self.total = total;
        self.done = 0;
        self.started = Some(Instant::now());
        tracing::info!(label = %self.label, total = total, "starting");
    }

    fn advance(&mut self) {
        self.done += 1;
        tracing::info!(
            label = %self.label,
            done = self.done,
            total = self.total,
            "progress"
        );
    }

    fn finish(&mut self) {
        let elapsed = self
            .started
            .take()
            .map(|started| started.elapsed())
            .unwrap_or_default();
        let per_second = if elapsed.as_secs_f64() > 0.0 {
            self.done as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        tracing::info!(
            label = %self.label,
            done = self.done,
            elapsed_ms = elapsed.as_millis() as u64,
            per_second = format!("{per_second:.1}"),
            "finished"
        );
    }
}
