use std::fmt;

use thiserror::Error;

use super::constants::CENTISECONDS_PER_SECOND;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FrameRateError {
    #[error("frame rate {num}/{den} has a zero term")]
    ZeroTerm { num: u32, den: u32 },
}

/// Frames per second as an exact fraction, fixed for the whole run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRate {
    num: u32,
    den: u32,
}

impl FrameRate {
    pub fn new(num: u32, den: u32) -> Result<Self, FrameRateError> {
        if num == 0 || den == 0 {
            return Err(FrameRateError::ZeroTerm { num, den });
        }
        Ok(Self { num, den })
    }

    pub fn num(&self) -> u32 {
        self.num
    }

    pub fn den(&self) -> u32 {
        self.den
    }

    /// Number of whole frames spanned by `centiseconds`, truncating.
    ///
    /// `cs * num / (100 * den)`, the conversion used for both the slack
    /// allowance and the splash duration.
    pub fn frames_in_centiseconds(&self, centiseconds: u32) -> u64 {
        u64::from(centiseconds) * u64::from(self.num)
            / (CENTISECONDS_PER_SECOND * u64::from(self.den))
    }

    /// Whole seconds elapsed at the start of `frame_index`, truncating.
    pub fn elapsed_seconds(&self, frame_index: u64) -> u64 {
        frame_index * u64::from(self.den) / u64::from(self.num)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}
