use std::path::Path;

use crate::video::domain::frame_linker::FrameLinker;

/// Places frames as filesystem hard links to the source image.
pub struct HardLinkFrameLinker;

impl HardLinkFrameLinker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HardLinkFrameLinker {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLinker for HardLinkFrameLinker {
    fn link(&self, source: &Path, destination: &Path) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::hard_link(source, destination)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_shares_content() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("splash.png");
        let destination = dir.path().join("out00000000.png");
        std::fs::write(&source, b"splash bytes").unwrap();

        HardLinkFrameLinker::new().link(&source, &destination).unwrap();

        assert_eq!(std::fs::read(&destination).unwrap(), b"splash bytes");
    }

    #[test]
    fn test_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = HardLinkFrameLinker::new().link(
            &dir.path().join("missing.png"),
            &dir.path().join("out00000000.png"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_existing_destination_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("splash.png");
        let destination = dir.path().join("out00000000.png");
        std::fs::write(&source, b"a").unwrap();
        std::fs::write(&destination, b"b").unwrap();

        assert!(HardLinkFrameLinker::new().link(&source, &destination).is_err());
    }
}
