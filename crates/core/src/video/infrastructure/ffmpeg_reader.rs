use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::frame::{Frame, BYTES_PER_PIXEL};
use crate::shared::frame_rate::FrameRate;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::video_reader::VideoReader;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("could not open input video '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: ffmpeg_next::Error,
    },
    #[error("could not find video stream in input file '{0}'")]
    NoVideoStream(PathBuf),
    #[error("could not open codec for input video: {0}")]
    NoDecoder(#[source] ffmpeg_next::Error),
    #[error("input video has no usable frame rate ({num}/{den})")]
    InvalidFrameRate { num: i32, den: i32 },
    #[error("reader has not been opened")]
    NotOpened,
    #[error("could not decode frame: {0}")]
    Decode(#[source] ffmpeg_next::Error),
}

/// Decodes video frames via ffmpeg-next (libavformat + libavcodec).
///
/// Converts each decoded frame to RGB24 and wraps it in a [`Frame`],
/// keeping the converter's row stride.
pub struct FfmpegReader {
    input_ctx: Option<ffmpeg_next::format::context::Input>,
    video_stream_index: usize,
}

// Safety: FfmpegReader is only used from a single thread at a time.
// The raw pointers inside ffmpeg types are not shared across threads.
unsafe impl Send for FfmpegReader {}

impl FfmpegReader {
    pub fn new() -> Self {
        Self {
            input_ctx: None,
            video_stream_index: 0,
        }
    }
}

impl Default for FfmpegReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoReader for FfmpegReader {
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>> {
        ffmpeg_next::init()?;

        let ictx = ffmpeg_next::format::input(path).map_err(|source| ReaderError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or_else(|| ReaderError::NoVideoStream(path.to_path_buf()))?;

        let video_stream_index = stream.index();
        let codec_ctx = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
            .map_err(ReaderError::NoDecoder)?;
        let decoder = codec_ctx.decoder().video().map_err(ReaderError::NoDecoder)?;

        let frame_rate = stream_frame_rate(&stream)?;

        let metadata = VideoMetadata {
            width: decoder.width(),
            height: decoder.height(),
            frame_rate,
        };

        self.video_stream_index = video_stream_index;
        self.input_ctx = Some(ictx);

        Ok(metadata)
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        match self.start_decoding() {
            Ok(iter) => Box::new(iter),
            Err(e) => Box::new(std::iter::once(Err(e))),
        }
    }

    fn close(&mut self) {
        self.input_ctx = None;
    }
}

impl FfmpegReader {
    fn start_decoding(&mut self) -> Result<FfmpegFrameIter<'_>, Box<dyn std::error::Error>> {
        let video_stream_index = self.video_stream_index;
        let ictx = self.input_ctx.as_mut().ok_or(ReaderError::NotOpened)?;

        let stream = ictx
            .stream(video_stream_index)
            .ok_or(ReaderError::NotOpened)?;
        let codec_ctx = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
            .map_err(ReaderError::NoDecoder)?;
        let decoder = codec_ctx.decoder().video().map_err(ReaderError::NoDecoder)?;

        let width = decoder.width();
        let height = decoder.height();

        let scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGB24,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BICUBIC,
        )?;

        Ok(FfmpegFrameIter {
            ictx,
            decoder,
            scaler,
            width,
            height,
            video_stream_index,
            frame_index: 0,
            flushing: false,
            done: false,
        })
    }
}

/// Average frame rate of the stream, falling back to its base rate.
fn stream_frame_rate(
    stream: &ffmpeg_next::format::stream::Stream,
) -> Result<FrameRate, ReaderError> {
    let average = stream.avg_frame_rate();
    let rate = if average.numerator() > 0 && average.denominator() > 0 {
        average
    } else {
        stream.rate()
    };
    to_frame_rate(rate.numerator(), rate.denominator())
}

fn to_frame_rate(num: i32, den: i32) -> Result<FrameRate, ReaderError> {
    let invalid = || ReaderError::InvalidFrameRate { num, den };
    let num = u32::try_from(num).map_err(|_| invalid())?;
    let den = u32::try_from(den).map_err(|_| invalid())?;
    FrameRate::new(num, den).map_err(|_| invalid())
}

/// Whether a `receive_frame` error only means "no frame available right now".
fn decoder_drained(error: &ffmpeg_next::Error) -> bool {
    matches!(
        error,
        ffmpeg_next::Error::Eof
            | ffmpeg_next::Error::Other {
                errno: ffmpeg_next::util::error::EAGAIN
            }
    )
}

/// Lazy iterator that decodes video frames one at a time.
///
/// A failed decode yields one `Err` and ends the iteration.
struct FfmpegFrameIter<'a> {
    ictx: &'a mut ffmpeg_next::format::context::Input,
    decoder: ffmpeg_next::decoder::Video,
    scaler: ffmpeg_next::software::scaling::Context,
    width: u32,
    height: u32,
    video_stream_index: usize,
    frame_index: usize,
    flushing: bool,
    done: bool,
}

impl FfmpegFrameIter<'_> {
    fn try_receive(&mut self) -> Option<Result<Frame, Box<dyn std::error::Error>>> {
        let mut decoded = ffmpeg_next::util::frame::video::Video::empty();
        match self.decoder.receive_frame(&mut decoded) {
            Ok(()) => {}
            Err(e) if decoder_drained(&e) => return None,
            Err(e) => return self.fail(e),
        }

        let mut rgb_frame = ffmpeg_next::util::frame::video::Video::empty();
        if let Err(e) = self.scaler.run(&decoded, &mut rgb_frame) {
            return Some(Err(Box::new(e)));
        }

        let frame = strided_rgb_frame(&rgb_frame, self.width, self.height, self.frame_index);
        self.frame_index += 1;
        Some(frame)
    }

    fn fail(
        &mut self,
        error: ffmpeg_next::Error,
    ) -> Option<Result<Frame, Box<dyn std::error::Error>>> {
        self.done = true;
        Some(Err(Box::new(ReaderError::Decode(error))))
    }
}

impl Iterator for FfmpegFrameIter<'_> {
    type Item = Result<Frame, Box<dyn std::error::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(result) = self.try_receive() {
            return Some(result);
        }

        if self.flushing {
            self.done = true;
            return None;
        }

        loop {
            let Some((stream, packet)) = self.ictx.packets().next() else {
                let _ = self.decoder.send_eof();
                self.flushing = true;
                if let Some(result) = self.try_receive() {
                    return Some(result);
                }
                self.done = true;
                return None;
            };

            if stream.index() != self.video_stream_index {
                log::trace!("Skipping packet from non-video stream {}", stream.index());
                continue;
            }

            if let Err(e) = self.decoder.send_packet(&packet) {
                return self.fail(e);
            }

            if let Some(result) = self.try_receive() {
                return Some(result);
            }
        }
    }
}

/// Copies an RGB24 ffmpeg frame into a [`Frame`], keeping its row stride.
fn strided_rgb_frame(
    rgb_frame: &ffmpeg_next::util::frame::video::Video,
    width: u32,
    height: u32,
    index: usize,
) -> Result<Frame, Box<dyn std::error::Error>> {
    let stride = rgb_frame.stride(0);
    let data = rgb_frame.data(0);
    let used = match height as usize {
        0 => 0,
        h => stride * (h - 1) + width as usize * BYTES_PER_PIXEL,
    };
    let pixels = data.get(..used).ok_or("converted frame is smaller than expected")?;
    Ok(Frame::with_stride(
        pixels.to_vec(),
        width,
        height,
        stride,
        index,
    )?)
}
