use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::thread::JoinHandle;

use clap::Parser;
use crossbeam_channel::Receiver;

use gaze_quadrant_core::gaze::domain::quadrant_classifier::QuadrantClassifier;
use gaze_quadrant_core::gaze::domain::quadrant_publisher::QuadrantUpdate;
use gaze_quadrant_core::gaze::infrastructure::channel_quadrant_publisher::ChannelQuadrantPublisher;
use gaze_quadrant_core::landmarking::infrastructure::recorded_landmarker::RecordedLandmarker;
use gaze_quadrant_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use gaze_quadrant_core::pipeline::track_gaze_use_case::{
    BlendShapeSink, TrackGazeConfig, TrackGazeUseCase,
};
use gaze_quadrant_core::shared::recorded_session::RecordedSession;
use gaze_quadrant_core::shared::settings::Settings;
use gaze_quadrant_core::video::infrastructure::recorded_frame_source::RecordedFrameSource;

/// Replays a recorded face-landmarker session and prints the gaze quadrant
/// of every classified frame.
#[derive(Parser)]
#[command(name = "gaze-quadrant")]
struct Cli {
    /// Session file (JSON Lines, one landmarker result per frame).
    session: PathBuf,

    /// Settings file (defaults to the platform config directory).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Baseline subtracted from each gaze axis before comparison.
    #[arg(long)]
    bias: Option<f64>,

    /// Width of the display box in pixels.
    #[arg(long)]
    display_width: Option<u32>,

    /// Output format: text or json.
    #[arg(long, default_value = "text")]
    format: String,

    /// Print the first face's blend-shape list for every frame (stderr).
    #[arg(long)]
    blend_shapes: bool,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<usize>,
}

#[derive(Clone, Copy, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let settings = load_settings(&cli)?;
    let format = parse_format(&cli.format);

    let session = RecordedSession::load(&cli.session)?;
    let source = RecordedFrameSource::from_session(&session, Some(cli.session.as_path()));
    let metadata = source.metadata();
    log::info!(
        "Replaying {} frames from {}",
        metadata.total_frames,
        cli.session.display()
    );
    let landmarker = RecordedLandmarker::new(&session, &settings.landmarker);

    let classifier = QuadrantClassifier::new(settings.axis_bias);
    log::info!("Gaze axis bias {}", classifier.bias());

    let (tx, rx) = crossbeam_channel::unbounded::<QuadrantUpdate>();
    let printer = spawn_printer(rx, format);

    let blend_shape_sink: Option<BlendShapeSink> = if cli.blend_shapes {
        Some(Box::new(|text: &str| eprintln!("{text}\n")))
    } else {
        None
    };
    let config = TrackGazeConfig {
        display_width: settings.display_width,
        max_frames: cli.max_frames,
        on_blend_shapes: blend_shape_sink,
        ..TrackGazeConfig::default()
    };

    let mut use_case = TrackGazeUseCase::new(
        Box::new(source),
        Box::new(landmarker),
        Box::new(classifier),
        Box::new(ChannelQuadrantPublisher::new(tx)),
        Box::new(StdoutPipelineLogger::new(settings.progress_throttle)),
        config,
    );
    let result = use_case.execute(&metadata);
    // Dropping the use case closes the channel so the printer can finish.
    drop(use_case);
    if printer.join().is_err() {
        log::warn!("Output thread panicked");
    }
    let summary = result?;

    match summary.last_quadrant {
        Some(q) => log::info!(
            "Classified {}/{} frames; last quadrant {} ({q})",
            summary.classified(),
            summary.frames,
            q.code()
        ),
        None => log::info!("No frame could be classified"),
    }
    if summary.classification_failures > 0 {
        log::warn!(
            "{} frames had unusable blend shapes",
            summary.classification_failures
        );
    }
    Ok(())
}

fn load_settings(cli: &Cli) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = match &cli.settings {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(),
    };
    if let Some(bias) = cli.bias {
        settings.axis_bias = bias;
    }
    if let Some(width) = cli.display_width {
        settings.display_width = width;
    }
    settings.validate()?;
    Ok(settings)
}

fn spawn_printer(rx: Receiver<QuadrantUpdate>, format: OutputFormat) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for update in rx {
            let line = match format {
                OutputFormat::Text => format!(
                    "frame {} t={:.3}s quadrant {} ({})",
                    update.frame_index,
                    update.video_time,
                    update.quadrant.code(),
                    update.quadrant
                ),
                OutputFormat::Json => match serde_json::to_string(&update) {
                    Ok(json) => json,
                    Err(e) => {
                        log::error!("Failed to encode update: {e}");
                        continue;
                    }
                },
            };
            if writeln!(out, "{line}").is_err() {
                // stdout closed (e.g. piped into `head`)
                break;
            }
        }
    })
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.session.exists() {
        return Err(format!("Session file not found: {}", cli.session.display()).into());
    }
    if cli.format != "text" && cli.format != "json" {
        return Err(format!("Format must be 'text' or 'json', got '{}'", cli.format).into());
    }
    if let Some(bias) = cli.bias {
        if !bias.is_finite() {
            return Err(format!("Bias must be a finite number, got {bias}").into());
        }
    }
    if cli.display_width == Some(0) {
        return Err("Display width must be positive".into());
    }
    if cli.max_frames == Some(0) {
        return Err("Max frames must be at least 1".into());
    }
    Ok(())
}

fn parse_format(format: &str) -> OutputFormat {
    if format == "json" {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}
