use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::LevelFilter;

use ebb_core::pipeline::excise_logger::LogExciseLogger;
use ebb_core::pipeline::excise_use_case::ExciseUseCase;
use ebb_core::shared::constants::{DEFAULT_BORDER, DEFAULT_SLACK_CS, DEFAULT_SPLASH_CS};
use ebb_core::shared::options::ExciseOptions;
use ebb_core::video::infrastructure::ffmpeg_reader::FfmpegReader;
use ebb_core::video::infrastructure::hard_link_frame_linker::HardLinkFrameLinker;
use ebb_core::video::infrastructure::image_file_writer::ImageFileWriter;

/// Excise boring bits: remove stretches of a video where nothing changes.
///
/// Writes the remaining frames as a numbered PNG sequence, e.g. for
/// `ffmpeg -framerate 25 -i out%08d.png result.mp4`.
#[derive(Parser)]
#[command(name = "ebb")]
struct Cli {
    /// Input video file.
    input: PathBuf,

    /// Output path; a trailing ".png" is replaced by the frame number.
    output: PathBuf,

    /// Optional start screen PNG, linked into the first frames.
    splash: Option<PathBuf>,

    /// Border in px; changes inside it are ignored.
    #[arg(short, long, default_value_t = DEFAULT_BORDER)]
    border: u32,

    /// Slack time in cs: unchanging time allowed before frames are dropped.
    #[arg(short, long, default_value_t = DEFAULT_SLACK_CS)]
    slack: u32,

    /// Time to show the splash screen for, in cs.
    #[arg(short, long, default_value_t = DEFAULT_SPLASH_CS)]
    intro: u32,

    /// Only report warnings and errors.
    #[arg(short, long, group = "verbosity")]
    quiet: bool,

    /// Verbose output.
    #[arg(short, long, group = "verbosity")]
    verbose: bool,

    /// Debug output.
    #[arg(short, long, group = "verbosity")]
    debug: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Trace
        } else if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    fn options(&self) -> ExciseOptions {
        ExciseOptions {
            border: self.border,
            slack_cs: self.slack,
            splash_cs: self.intro,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        log::error!("{e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    validate(&cli)?;

    let mut use_case = ExciseUseCase::new(
        Box::new(FfmpegReader::new()),
        Box::new(ImageFileWriter::new()),
        Box::new(HardLinkFrameLinker::new()),
        Box::new(LogExciseLogger::new()),
        cli.options(),
    );

    let report = use_case.execute(&cli.input, &cli.output, cli.splash.as_deref())?;

    if let Some(e) = report.decode_error {
        return Err(format!("Stopped after {} frames: {e}", report.input_frames).into());
    }
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if let Some(splash) = &cli.splash {
        if !splash.is_file() {
            log::warn!("Splash image not found: {}", splash.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("ebb").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["in.mp4", "out.png"]).unwrap();
        assert_eq!(cli.options(), ExciseOptions::default());
        assert_eq!(cli.log_level(), LevelFilter::Info);
        assert!(cli.splash.is_none());
    }

    #[test]
    fn test_short_and_long_options() {
        let cli = parse(&["-b", "2", "--slack", "40", "-i", "100", "in", "out", "s.png"]).unwrap();
        assert_eq!(
            cli.options(),
            ExciseOptions {
                border: 2,
                slack_cs: 40,
                splash_cs: 100,
            }
        );
        assert_eq!(cli.splash, Some(PathBuf::from("s.png")));
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["-q", "a", "b"]).unwrap().log_level(), LevelFilter::Warn);
        assert_eq!(parse(&["-v", "a", "b"]).unwrap().log_level(), LevelFilter::Debug);
        assert_eq!(parse(&["-d", "a", "b"]).unwrap().log_level(), LevelFilter::Trace);
    }

    #[test]
    fn test_verbosity_flags_conflict() {
        assert!(parse(&["-q", "-v", "a", "b"]).is_err());
    }

    #[test]
    fn test_missing_output_is_error() {
        assert!(parse(&["in.mp4"]).is_err());
    }

    #[test]
    fn test_malformed_numbers_are_errors() {
        assert!(parse(&["--border", "x", "a", "b"]).is_err());
        assert!(parse(&["--slack", "-5", "a", "b"]).is_err());
    }

    #[test]
    fn test_extra_positional_is_error() {
        assert!(parse(&["a", "b", "c", "d"]).is_err());
    }

    #[test]
    fn test_validate_missing_input() {
        let cli = parse(&["/nonexistent/in.mp4", "out.png"]).unwrap();
        assert!(validate(&cli).is_err());
    }

    #[test]
    fn test_validate_missing_splash_is_not_fatal() {
        let input = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        let cli = parse(&[input, "out.png", "/nonexistent/splash.png"]).unwrap();
        assert!(validate(&cli).is_ok());
    }
}
