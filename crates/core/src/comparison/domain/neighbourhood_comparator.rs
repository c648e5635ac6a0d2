use crate::shared::frame::Frame;

use super::frame_comparator::FrameComparator;
use super::pixel_metric::neighbourhoods_differ;

/// Compares frames block by block, ignoring a margin at the edges.
///
/// Anchors run from `border` up to `dimension - 2 * border - 1` on each
/// axis, so the excluded band on the right and bottom is wider than the
/// one on the left and top. Scanning stops at the first differing block.
pub struct NeighbourhoodComparator {
    border: u32,
}

impl NeighbourhoodComparator {
    pub fn new(border: u32) -> Self {
        Self { border }
    }
}

impl FrameComparator for NeighbourhoodComparator {
    fn frames_differ(&self, prev: &Frame, curr: &Frame) -> bool {
        frames_differ(prev, curr, curr.width(), curr.height(), self.border)
    }
}

/// Whether any 2x2 neighbourhood inside the border differs between frames.
///
/// Rows are addressed through each frame's own stride. `width` and
/// `height` are clamped to the smaller frame, and a border too large for
/// the frame leaves no anchors, which reads as "no difference".
pub fn frames_differ(prev: &Frame, curr: &Frame, width: u32, height: u32, border: u32) -> bool {
    let width = width.min(prev.width()).min(curr.width());
    let height = height.min(prev.height()).min(curr.height());

    let border = i64::from(border);
    let end_x = i64::from(width) - 2 * border - 1;
    let end_y = i64::from(height) - 2 * border - 1;
    if end_x <= border || end_y <= border {
        return false;
    }

    let start = border as usize;
    let end_x = end_x as usize;
    let end_y = end_y as usize;

    for y in start..end_y {
        let prev_top = prev.row(y);
        let prev_bottom = prev.row(y + 1);
        let curr_top = curr.row(y);
        let curr_bottom = curr.row(y + 1);

        let block_differs =
            |x| neighbourhoods_differ(prev_top, prev_bottom, curr_top, curr_bottom, x);
        if (start..end_x).any(block_differs) {
            return true;
        }
    }

    false
}
