/// Largest per-pixel difference (sum over three channels) still treated as noise.
pub const PIXEL_TOLERANCE: u32 = (255 * 3) / 10;

pub const CENTISECONDS_PER_SECOND: u64 = 100;

/// Default margin, in pixels, excluded from comparison at each frame edge.
pub const DEFAULT_BORDER: u32 = 5;

/// Default time an unchanging stretch may last before frames are dropped.
pub const DEFAULT_SLACK_CS: u32 = 80;

/// Default time the splash image is shown for.
pub const DEFAULT_SPLASH_CS: u32 = 300;

pub const OUTPUT_EXTENSION: &str = "png";

/// Digits in the zero-padded sequence number of each output file.
pub const SEQUENCE_DIGITS: usize = 8;
