use crate::shared::frame::Frame;

/// Two frame slots whose roles ("previous" and "current") swap by index.
///
/// Loading a frame always overwrites the slot not holding the previous
/// reference; promoting makes that slot the new reference and frees the
/// old one for the next load.
#[derive(Debug, Default)]
pub struct FrameSlots {
    slots: [Option<Frame>; 2],
    previous: usize,
}

impl FrameSlots {
    pub fn new() -> Self {
        Self::default()
    }

    fn current_slot(&self) -> usize {
        1 - self.previous
    }

    pub fn load_current(&mut self, frame: Frame) {
        let slot = self.current_slot();
        self.slots[slot] = Some(frame);
    }

    pub fn previous(&self) -> Option<&Frame> {
        self.slots[self.previous].as_ref()
    }

    pub fn current(&self) -> Option<&Frame> {
        self.slots[self.current_slot()].as_ref()
    }

    /// Swaps roles: the current frame becomes the previous reference.
    pub fn promote_current(&mut self) {
        self.previous = self.current_slot();
    }
}
