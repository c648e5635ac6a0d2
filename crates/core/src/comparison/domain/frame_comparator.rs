use crate::shared::frame::Frame;

/// Domain interface for deciding whether a frame changed since the reference.
///
/// Implementations are pure: the verdict depends only on the two frames.
pub trait FrameComparator: Send {
    fn frames_differ(&self, prev: &Frame, curr: &Frame) -> bool;
}
