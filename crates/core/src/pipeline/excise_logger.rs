use crate::retention::domain::retention_state_machine::{Classification, RetentionOutcome};
use crate::retention::domain::skipped_range::SkippedRange;
use crate::shared::frame_rate::FrameRate;

use super::excise_use_case::ExciseReport;

/// Cross-cutting logger for events of an excise run.
///
/// Decouples the use case from where events end up (the `log` facade,
/// tests) so callers can observe a run without changing the loop.
pub trait ExciseLogger: Send {
    /// Report the verdict for one input frame.
    fn frame(&mut self, outcome: &RetentionOutcome);

    /// Report a stretch of frames that was dropped from the output.
    fn skipped(&mut self, range: &SkippedRange, fps: &FrameRate);

    /// Report a recoverable problem (failed write, truncated decode).
    fn warning(&mut self, message: &str);

    /// Emit the end-of-run summary. Default: no-op.
    fn summary(&self, _report: &ExciseReport) {}
}

/// Silent logger that discards all events.
pub struct NullExciseLogger;

impl ExciseLogger for NullExciseLogger {
    fn frame(&mut self, _outcome: &RetentionOutcome) {}
    fn skipped(&mut self, _range: &SkippedRange, _fps: &FrameRate) {}
    fn warning(&mut self, _message: &str) {}
}

/// CLI-oriented logger that forwards events to the `log` facade.
///
/// Per-frame verdicts go out at trace, skipped stretches at debug and the
/// summary at info, so `-v` and `-d` progressively reveal more detail.
#[derive(Default)]
pub struct LogExciseLogger {
    distinct_frames: u64,
}

impl LogExciseLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distinct_frames(&self) -> u64 {
        self.distinct_frames
    }
}

/// `Skip frames 4 to 10 (00:00:00 - 00:00:00)`
pub fn skipped_message(range: &SkippedRange, fps: &FrameRate) -> String {
    let (start, end) = range.timecodes(fps);
    format!(
        "Skip frames {} to {} ({start} - {end})",
        range.start, range.end
    )
}

/// `Frames 250 --> 80 (00:00:10 --> 00:00:03)`
pub fn summary_message(report: &ExciseReport) -> String {
    let (input, output) = report.durations();
    format!(
        "Frames {} --> {} ({input} --> {output})",
        report.input_frames, report.output_frames
    )
}

impl ExciseLogger for LogExciseLogger {
    fn frame(&mut self, outcome: &RetentionOutcome) {
        if outcome.classification == Classification::Distinct {
            self.distinct_frames += 1;
        }
    }

    fn skipped(&mut self, range: &SkippedRange, fps: &FrameRate) {
        log::debug!("{}", skipped_message(range, fps));
    }

    fn warning(&mut self, message: &str) {
        log::warn!("{message}");
    }

    fn summary(&self, report: &ExciseReport) {
        log::info!("{}", summary_message(report));
        log::debug!(
            "Distinct frames: {}, suppressed: {}, failed writes: {}",
            self.distinct_frames,
            report.suppressed_frames,
            report.failed_writes
        );
    }
}
