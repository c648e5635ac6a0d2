use std::path::Path;

use crate::shared::frame_rate::FrameRate;
use crate::video::domain::frame_linker::FrameLinker;

use super::output_sequence::OutputSequence;

/// Leading output frames given to the splash image: `cs * num / (100 * den)`.
pub fn splash_frame_count(splash_cs: u32, fps: &FrameRate) -> u64 {
    fps.frames_in_centiseconds(splash_cs)
}

/// Links `splash` into the first `count` slots of `sequence`.
///
/// Stops at the first slot that cannot be linked and returns how many were
/// placed; a failed splash never aborts the run.
pub fn place_splash_frames(
    linker: &dyn FrameLinker,
    splash: &Path,
    sequence: &OutputSequence,
    count: u64,
) -> u64 {
    let mut placed = 0;
    while placed < count {
        let destination = sequence.path_for(placed);
        if let Err(e) = linker.link(splash, &destination) {
            log::warn!("Could not copy splash image {}: {e}", splash.display());
            break;
        }
        placed += 1;
    }

    log::debug!("Splash frames: {placed}");
    placed
}
