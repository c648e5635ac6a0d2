use thiserror::Error;

/// Bytes per pixel of the packed RGB24 layout every frame is converted to.
pub const BYTES_PER_PIXEL: usize = 3;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FrameError {
    #[error("stride {stride} is shorter than a row of {width} pixels")]
    StrideTooShort { stride: usize, width: u32 },
    #[error("buffer of {actual} bytes cannot hold {width}x{height} frame with stride {stride}")]
    BufferTooShort {
        actual: usize,
        width: u32,
        height: u32,
        stride: usize,
    },
}

/// A decoded video frame: packed 3-channel 8-bit pixels, row-major.
///
/// Rows may be padded: `stride` is the distance in bytes between the start
/// of two consecutive rows and may exceed `width * 3`. The frame is never
/// mutated once built; the retention engine only borrows it.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
    index: usize,
}

impl Frame {
    /// Builds a tightly packed frame (`stride == width * 3`).
    pub fn new(data: Vec<u8>, width: u32, height: u32, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * BYTES_PER_PIXEL,
            "data length must equal width * height * 3"
        );
        Self {
            data,
            width,
            height,
            stride: width as usize * BYTES_PER_PIXEL,
            index,
        }
    }

    /// Builds a frame whose rows are `stride` bytes apart.
    pub fn with_stride(
        data: Vec<u8>,
        width: u32,
        height: u32,
        stride: usize,
        index: usize,
    ) -> Result<Self, FrameError> {
        let row_len = width as usize * BYTES_PER_PIXEL;
        if stride < row_len {
            return Err(FrameError::StrideTooShort { stride, width });
        }
        let required = match height as usize {
            0 => 0,
            h => stride * (h - 1) + row_len,
        };
        if data.len() < required {
            return Err(FrameError::BufferTooShort {
                actual: data.len(),
                width,
                height,
                stride,
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
            index,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Position of this frame in decode order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Pixel bytes of row `y`, without trailing padding.
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.width as usize * BYTES_PER_PIXEL]
    }

    /// Copies the rows into a contiguous buffer with no padding.
    pub fn to_packed(&self) -> Vec<u8> {
        let mut pixels =
            Vec::with_capacity(self.width as usize * self.height as usize * BYTES_PER_PIXEL);
        for y in 0..self.height as usize {
            pixels.extend_from_slice(self.row(y));
        }
        pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2x3
        let frame = Frame::new(data.clone(), 2, 2, 5);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.stride(), 6);
        assert_eq!(frame.index(), 5);
        assert_eq!(frame.data(), &data[..]);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * 3")]
    fn test_mismatched_data_length_panics_in_debug() {
        Frame::new(vec![0u8; 10], 2, 2, 0);
    }

    #[test]
    fn test_row_skips_padding() {
        // 2x2 frame, 8-byte stride: 6 pixel bytes + 2 padding bytes per row
        let data = vec![1, 1, 1, 2, 2, 2, 0xEE, 0xEE, 3, 3, 3, 4, 4, 4, 0xEE, 0xEE];
        let frame = Frame::with_stride(data, 2, 2, 8, 0).unwrap();
        assert_eq!(frame.row(0), &[1, 1, 1, 2, 2, 2]);
        assert_eq!(frame.row(1), &[3, 3, 3, 4, 4, 4]);
    }

    #[test]
    fn test_last_row_padding_may_be_absent() {
        let data = vec![0u8; 8 + 6];
        assert!(Frame::with_stride(data, 2, 2, 8, 0).is_ok());
    }

    #[test]
    fn test_stride_shorter_than_row_rejected() {
        let err = Frame::with_stride(vec![0u8; 12], 2, 2, 5, 0).unwrap_err();
        assert_eq!(err, FrameError::StrideTooShort { stride: 5, width: 2 });
    }

    #[test]
    fn test_short_buffer_rejected() {
        let err = Frame::with_stride(vec![0u8; 10], 2, 2, 6, 0).unwrap_err();
        assert!(matches!(err, FrameError::BufferTooShort { actual: 10, .. }));
    }

    #[test]
    fn test_to_packed_strips_padding() {
        let data = vec![1, 1, 1, 9, 2, 2, 2, 9];
        let frame = Frame::with_stride(data, 1, 2, 4, 0).unwrap();
        assert_eq!(frame.to_packed(), vec![1, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn test_clone_is_independent() {
        let frame = Frame::new(vec![100u8; 12], 2, 2, 0);
        let cloned = frame.clone();
        assert_eq!(frame.data(), cloned.data());
        assert_eq!(cloned.index(), 0);
    }
}
