use super::constants::{DEFAULT_BORDER, DEFAULT_SLACK_CS, DEFAULT_SPLASH_CS};

/// Run configuration, fixed before the first frame is decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExciseOptions {
    /// Pixels at each edge ignored when comparing frames.
    pub border: u32,
    /// Unchanging time allowed before frames are dropped, in centiseconds.
    pub slack_cs: u32,
    /// Time the splash image is shown for, in centiseconds.
    pub splash_cs: u32,
}

impl Default for ExciseOptions {
    fn default() -> Self {
        Self {
            border: DEFAULT_BORDER,
            slack_cs: DEFAULT_SLACK_CS,
            splash_cs: DEFAULT_SPLASH_CS,
        }
    }
}
