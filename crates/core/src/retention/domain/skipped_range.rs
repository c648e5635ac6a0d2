use crate::shared::frame_rate::FrameRate;
use crate::timing::domain::timecode::{range_to_timecodes, Timecode};

/// Half-open run of input frames `[start, end)` dropped from the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkippedRange {
    pub start: u64,
    pub end: u64,
}

impl SkippedRange {
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end, "skipped range must not be reversed");
        Self { start, end }
    }

    pub fn timecodes(&self, fps: &FrameRate) -> (Timecode, Timecode) {
        range_to_timecodes(self.start, self.end, fps)
    }
}
