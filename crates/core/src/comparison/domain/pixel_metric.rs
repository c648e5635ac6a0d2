use crate::shared::constants::PIXEL_TOLERANCE;
use crate::shared::frame::BYTES_PER_PIXEL;

/// Sum of absolute channel differences between two RGB pixels, in `0..=765`.
///
/// Only the first three bytes of each slice are read.
#[inline]
pub fn pixel_difference(prev: &[u8], curr: &[u8]) -> u32 {
    prev[..BYTES_PER_PIXEL]
        .iter()
        .zip(&curr[..BYTES_PER_PIXEL])
        .map(|(&p, &c)| u32::from(p.abs_diff(c)))
        .sum()
}

/// Whether the 2x2 blocks anchored at pixel `x` of two row pairs differ.
///
/// The block covers pixels `x` and `x + 1` on the top and bottom rows.
/// A block only counts as different when all four pixel pairs exceed
/// [`PIXEL_TOLERANCE`]; three out of four is still treated as noise.
#[inline]
pub fn neighbourhoods_differ(
    prev_top: &[u8],
    prev_bottom: &[u8],
    curr_top: &[u8],
    curr_bottom: &[u8],
    x: usize,
) -> bool {
    let left = x * BYTES_PER_PIXEL;
    let right = left + BYTES_PER_PIXEL;

    let differences = [
        pixel_difference(&prev_top[left..], &curr_top[left..]),
        pixel_difference(&prev_top[right..], &curr_top[right..]),
        pixel_difference(&prev_bottom[left..], &curr_bottom[left..]),
        pixel_difference(&prev_bottom[right..], &curr_bottom[right..]),
    ];
    let different = differences
        .iter()
        .filter(|&&d| d > PIXEL_TOLERANCE)
        .count();

    different > 3
}
