use crate::comparison::domain::frame_comparator::FrameComparator;
use crate::comparison::domain::neighbourhood_comparator::NeighbourhoodComparator;
use crate::shared::frame::Frame;
use crate::shared::frame_rate::FrameRate;
use crate::shared::options::ExciseOptions;

use super::frame_slots::FrameSlots;
use super::skipped_range::SkippedRange;

/// How a frame compares to the reference frame before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Distinct,
    Same,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Retain,
    Suppress,
}

/// Result of feeding one frame through the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetentionOutcome {
    /// Input position of the frame, counted from zero.
    pub index: u64,
    pub classification: Classification,
    pub decision: Decision,
    /// Frames suppressed by the still stretch this frame just ended.
    pub skipped: Option<SkippedRange>,
}

/// Decides, frame by frame, which input frames reach the output.
///
/// Keeps the last distinct frame as the reference and counts how many
/// frames in a row matched it. The first `slack_frames` matches are kept;
/// later ones are suppressed until a distinct frame resets the count.
/// When a frame is retained, the frame to write is [`reference`], which
/// after a distinct frame is that frame itself and during a still stretch
/// is the frame the stretch started from.
///
/// There is no end-of-stream flush: a still stretch that runs into the end
/// of the input is never reported as a [`SkippedRange`].
///
/// [`reference`]: RetentionStateMachine::reference
pub struct RetentionStateMachine {
    comparator: Box<dyn FrameComparator>,
    slack_frames: u64,
    skip_count: u64,
    frames_seen: u64,
    slots: FrameSlots,
}

impl RetentionStateMachine {
    pub fn new(comparator: Box<dyn FrameComparator>, slack_frames: u64) -> Self {
        Self {
            comparator,
            slack_frames,
            skip_count: 0,
            frames_seen: 0,
            slots: FrameSlots::new(),
        }
    }

    /// Builds a machine comparing with the configured border, converting
    /// the slack time to whole frames at `fps`.
    pub fn from_options(options: &ExciseOptions, fps: &FrameRate) -> Self {
        Self::new(
            Box::new(NeighbourhoodComparator::new(options.border)),
            fps.frames_in_centiseconds(options.slack_cs),
        )
    }

    pub fn process(&mut self, frame: Frame) -> RetentionOutcome {
        let index = self.frames_seen;
        self.frames_seen += 1;
        self.slots.load_current(frame);

        if index == 0 || self.current_differs() {
            self.slots.promote_current();

            let skipped = (self.skip_count > self.slack_frames).then(|| {
                SkippedRange::new(index - (self.skip_count - self.slack_frames), index)
            });
            self.skip_count = 0;

            log::trace!("{index}: Different");
            RetentionOutcome {
                index,
                classification: Classification::Distinct,
                decision: Decision::Retain,
                skipped,
            }
        } else {
            self.skip_count += 1;

            log::trace!("{index}: Same");
            let decision = if self.skip_count > self.slack_frames {
                Decision::Suppress
            } else {
                Decision::Retain
            };
            RetentionOutcome {
                index,
                classification: Classification::Same,
                decision,
                skipped: None,
            }
        }
    }

    fn current_differs(&self) -> bool {
        match (self.slots.previous(), self.slots.current()) {
            (Some(prev), Some(curr)) => self.comparator.frames_differ(prev, curr),
            _ => true,
        }
    }

    /// The last distinct frame; this is what gets written on a retain.
    pub fn reference(&self) -> Option<&Frame> {
        self.slots.previous()
    }

    pub fn slack_frames(&self) -> u64 {
        self.slack_frames
    }

    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }
}
