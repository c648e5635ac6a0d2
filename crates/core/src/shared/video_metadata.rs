use super::frame_rate::FrameRate;

/// Stream properties reported when a video is opened.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub frame_rate: FrameRate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let meta = VideoMetadata {
            width: 1920,
            height: 1080,
            frame_rate: FrameRate::new(25, 1).unwrap(),
        };
        assert_eq!(meta.width, 1920);
        assert_eq!(meta.height, 1080);
        assert_eq!(meta.frame_rate.num(), 25);
    }
}
