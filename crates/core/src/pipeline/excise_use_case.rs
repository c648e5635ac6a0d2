use std::path::Path;

use crate::output::domain::output_sequence::OutputSequence;
use crate::output::domain::splash_sequence::{place_splash_frames, splash_frame_count};
use crate::retention::domain::retention_state_machine::{Decision, RetentionStateMachine};
use crate::retention::domain::skipped_range::SkippedRange;
use crate::shared::frame_rate::FrameRate;
use crate::shared::options::ExciseOptions;
use crate::timing::domain::timecode::{to_timecode, Timecode};
use crate::video::domain::frame_linker::FrameLinker;
use crate::video::domain::image_writer::ImageWriter;
use crate::video::domain::video_reader::VideoReader;

use super::excise_logger::ExciseLogger;

/// What an excise run did, returned even when decoding stopped early.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExciseReport {
    pub frame_rate: FrameRate,
    /// Frames decoded from the input.
    pub input_frames: u64,
    /// Output sequence length, splash frames included. Failed writes still
    /// take a number.
    pub output_frames: u64,
    pub splash_frames: u64,
    pub suppressed_frames: u64,
    pub failed_writes: u64,
    pub skipped_ranges: Vec<SkippedRange>,
    /// Set when a decode error ended the stream before its end.
    pub decode_error: Option<String>,
}

impl ExciseReport {
    /// Whether every frame of the input was decoded.
    pub fn is_complete(&self) -> bool {
        self.decode_error.is_none()
    }

    /// Input and output lengths as timecodes, each computed on its own.
    pub fn durations(&self) -> (Timecode, Timecode) {
        (
            to_timecode(self.input_frames, &self.frame_rate),
            to_timecode(self.output_frames, &self.frame_rate),
        )
    }
}

/// Video excising pipeline: read → classify → write retained frames.
///
/// The splash image, if any, takes the first output numbers; retained
/// frames follow in input order. Processing is strictly sequential.
pub struct ExciseUseCase {
    reader: Box<dyn VideoReader>,
    writer: Box<dyn ImageWriter>,
    linker: Box<dyn FrameLinker>,
    logger: Box<dyn ExciseLogger>,
    options: ExciseOptions,
}

impl ExciseUseCase {
    pub fn new(
        reader: Box<dyn VideoReader>,
        writer: Box<dyn ImageWriter>,
        linker: Box<dyn FrameLinker>,
        logger: Box<dyn ExciseLogger>,
        options: ExciseOptions,
    ) -> Self {
        Self {
            reader,
            writer,
            linker,
            logger,
            options,
        }
    }

    /// Runs the whole input through the retention engine.
    ///
    /// Fails only if the input cannot be opened. Decode errors end the run
    /// early and are recorded in the report; frames already written stay.
    pub fn execute(
        &mut self,
        input_path: &Path,
        output_path: &Path,
        splash_path: Option<&Path>,
    ) -> Result<ExciseReport, Box<dyn std::error::Error>> {
        let metadata = self.reader.open(input_path)?;
        let fps = metadata.frame_rate;
        log::debug!(
            "Input {}x{} at {fps} fps",
            metadata.width,
            metadata.height
        );
        let sequence = OutputSequence::from_output_path(output_path);

        let splash_frames = match splash_path {
            Some(splash) => {
                let count = splash_frame_count(self.options.splash_cs, &fps);
                place_splash_frames(self.linker.as_ref(), splash, &sequence, count)
            }
            None => 0,
        };

        let mut machine = RetentionStateMachine::from_options(&self.options, &fps);
        let mut output_frames = splash_frames;
        let mut suppressed_frames = 0;
        let mut failed_writes = 0;
        let mut skipped_ranges = Vec::new();
        let mut decode_error = None;

        for result in self.reader.frames() {
            let frame = match result {
                Ok(frame) => frame,
                Err(e) => {
                    self.logger
                        .warning(&format!("Could not decode frame: {e}"));
                    decode_error = Some(e.to_string());
                    break;
                }
            };

            let outcome = machine.process(frame);
            self.logger.frame(&outcome);

            if let Some(range) = outcome.skipped {
                self.logger.skipped(&range, &fps);
                skipped_ranges.push(range);
            }

            match outcome.decision {
                Decision::Retain => {
                    let path = sequence.path_for(output_frames);
                    if let Some(reference) = machine.reference() {
                        if let Err(e) = self.writer.write(&path, reference) {
                            self.logger.warning(&format!(
                                "Could not write frame {}: {e}",
                                path.display()
                            ));
                            failed_writes += 1;
                        }
                    }
                    output_frames += 1;
                }
                Decision::Suppress => suppressed_frames += 1,
            }
        }

        self.reader.close();

        let report = ExciseReport {
            frame_rate: fps,
            input_frames: machine.frames_seen(),
            output_frames,
            splash_frames,
            suppressed_frames,
            failed_writes,
            skipped_ranges,
            decode_error,
        };
        self.logger.summary(&report);

        Ok(report)
    }
}
