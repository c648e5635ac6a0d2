use std::path::Path;

/// Places an existing image file at a new path without re-encoding it.
pub trait FrameLinker: Send {
    fn link(&self, source: &Path, destination: &Path) -> Result<(), Box<dyn std::error::Error>>;
}
