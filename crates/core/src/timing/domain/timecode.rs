use std::fmt;

use crate::shared::frame_rate::FrameRate;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// Elapsed time at a frame boundary, in whole seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timecode {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Timecode {
    pub fn from_seconds(total_seconds: u64) -> Self {
        let hours = total_seconds / SECONDS_PER_HOUR;
        let remainder = total_seconds % SECONDS_PER_HOUR;
        Self {
            hours,
            minutes: remainder / SECONDS_PER_MINUTE,
            seconds: remainder % SECONDS_PER_MINUTE,
        }
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Timecode of `frame_index`: `frame_index * den / num` seconds, truncated.
pub fn to_timecode(frame_index: u64, fps: &FrameRate) -> Timecode {
    Timecode::from_seconds(fps.elapsed_seconds(frame_index))
}

/// Timecodes of both ends of a frame range, each computed on its own.
///
/// Panics if `start > end`; callers only ever pass ranges they built in order.
pub fn range_to_timecodes(start: u64, end: u64, fps: &FrameRate) -> (Timecode, Timecode) {
    assert!(start <= end, "frame range {start}..{end} is reversed");
    (to_timecode(start, fps), to_timecode(end, fps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pal() -> FrameRate {
        FrameRate::new(25, 1).unwrap()
    }

    fn tc(hours: u64, minutes: u64, seconds: u64) -> Timecode {
        Timecode {
            hours,
            minutes,
            seconds,
        }
    }

    #[rstest]
    #[case::zero(0, tc(0, 0, 0))]
    #[case::under_a_second(24, tc(0, 0, 0))]
    #[case::five_seconds(125, tc(0, 0, 5))]
    #[case::minutes(3725, tc(0, 2, 29))]
    #[case::one_hour(90_000, tc(1, 0, 0))]
    #[case::hours_minutes_seconds(93_775, tc(1, 2, 31))]
    fn test_to_timecode_pal(#[case] frame: u64, #[case] expected: Timecode) {
        assert_eq!(to_timecode(frame, &pal()), expected);
    }

    #[test]
    fn test_to_timecode_fractional_rate() {
        // 30000/1001 fps: frame 1800 is 60.06s in
        let ntsc = FrameRate::new(30000, 1001).unwrap();
        assert_eq!(to_timecode(1800, &ntsc), tc(0, 1, 0));
    }

    #[test]
    fn test_inverse_lands_in_same_second() {
        let fps = pal();
        for frame in [0u64, 1, 24, 25, 125, 3725, 89_999, 90_000, 1_000_003] {
            let code = to_timecode(frame, &fps);
            let seconds =
                code.hours * SECONDS_PER_HOUR + code.minutes * SECONDS_PER_MINUTE + code.seconds;
            let start = seconds * u64::from(fps.num()) / u64::from(fps.den());
            assert!(start <= frame);
            assert_eq!(to_timecode(start, &fps), code);
        }
    }

    #[test]
    fn test_range_endpoints_are_independent() {
        // Start is under an hour, end is over: the end still gets its hours.
        let (start, end) = range_to_timecodes(25, 90_025, &pal());
        assert_eq!(start, tc(0, 0, 1));
        assert_eq!(end, tc(1, 0, 1));
    }

    #[test]
    fn test_empty_range_allowed() {
        let (start, end) = range_to_timecodes(50, 50, &pal());
        assert_eq!(start, end);
    }

    #[test]
    #[should_panic(expected = "reversed")]
    fn test_reversed_range_panics() {
        range_to_timecodes(10, 9, &pal());
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(tc(1, 2, 3).to_string(), "01:02:03");
        assert_eq!(tc(123, 0, 0).to_string(), "123:00:00");
    }
}
