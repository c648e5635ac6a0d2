use std::path::Path;

use crate::shared::frame::Frame;

/// Writes a single frame to an image file.
pub trait ImageWriter: Send {
    /// Encodes `frame` at its own dimensions and saves it at `path`.
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;
}
