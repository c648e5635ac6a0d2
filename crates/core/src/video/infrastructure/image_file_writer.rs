use std::path::Path;

use crate::shared::frame::Frame;
use crate::video::domain::image_writer::ImageWriter;

/// Writes a single frame to an image file using the `image` crate.
///
/// The format follows the path's extension; row padding is dropped.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        let img = image::RgbImage::from_raw(frame.width(), frame.height(), frame.to_packed())
            .ok_or("Failed to create image from frame data")?;

        img.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_frame(width: u32, height: u32, r: u8, g: u8, b: u8) -> Frame {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..(width * height) {
            data.push(r);
            data.push(g);
            data.push(b);
        }
        Frame::new(data, width, height, 0)
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out00000000.png");
        let frame = make_frame(100, 80, 50, 100, 200);
        let writer = ImageFileWriter::new();
        writer.write(&path, &frame).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_roundtrip_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let frame = make_frame(50, 50, 50, 100, 200);
        let writer = ImageFileWriter::new();
        writer.write(&path, &frame).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.width(), 50);
        assert_eq!(img.height(), 50);
        assert_eq!(img.get_pixel(0, 0).0, [50, 100, 200]);
    }

    #[test]
    fn test_padded_rows_written_without_padding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("padded.png");
        // 2x2 frame with two bytes of padding per row
        let data = vec![10, 20, 30, 40, 50, 60, 0, 0, 70, 80, 90, 1, 2, 3, 0, 0];
        let frame = Frame::with_stride(data, 2, 2, 8, 0).unwrap();
        ImageFileWriter::new().write(&path, &frame).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.get_pixel(1, 0).0, [40, 50, 60]);
        assert_eq!(img.get_pixel(0, 1).0, [70, 80, 90]);
        assert_eq!(img.get_pixel(1, 1).0, [1, 2, 3]);
    }

    #[test]
    fn test_write_invalid_path_returns_error() {
        let frame = make_frame(10, 10, 0, 0, 0);
        let writer = ImageFileWriter::new();
        assert!(writer
            .write(Path::new("/nonexistent/dir/out.png"), &frame)
            .is_err());
    }
}
