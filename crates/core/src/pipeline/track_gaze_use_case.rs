use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::gaze::domain::gaze_classifier::GazeClassifier;
use crate::gaze::domain::gaze_quadrant::GazeQuadrant;
use crate::gaze::domain::quadrant_publisher::{QuadrantPublisher, QuadrantUpdate};
use crate::landmarking::domain::face_landmarker::FaceLandmarker;
use crate::landmarking::domain::landmarker_options::RunningMode;
use crate::landmarking::domain::landmarker_result::LandmarkerResult;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::rendering::blend_shape_list::BlendShapeListRenderer;
use crate::rendering::face_mesh_overlay::{draw_face_mesh, LandmarkDrawer};
use crate::shared::constants::DEFAULT_DISPLAY_WIDTH;
use crate::shared::video_metadata::{display_size, VideoMetadata};
use crate::video::domain::frame_source::FrameSource;

/// Sink for the rendered blend-shape list of each frame.
pub type BlendShapeSink = Box<dyn FnMut(&str) + Send>;

pub struct TrackGazeConfig {
    pub display_width: u32,
    /// Stop after this many frames.
    pub max_frames: Option<usize>,
    /// Cleared to stop the loop (the "disable webcam" toggle).
    pub running: Arc<AtomicBool>,
    pub on_blend_shapes: Option<BlendShapeSink>,
}

impl Default for TrackGazeConfig {
    fn default() -> Self {
        Self {
            display_width: DEFAULT_DISPLAY_WIDTH,
            max_frames: None,
            running: Arc::new(AtomicBool::new(true)),
            on_blend_shapes: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackingSummary {
    pub frames: usize,
    pub inferences: usize,
    /// Frames whose video time had not advanced, so the cached result was reused.
    pub skipped_inferences: usize,
    pub classification_failures: usize,
    /// Indexed by quadrant code - 1.
    pub quadrant_counts: [usize; 4],
    pub last_quadrant: Option<GazeQuadrant>,
}

impl TrackingSummary {
    fn record(&mut self, quadrant: GazeQuadrant) {
        self.quadrant_counts[(quadrant.code() - 1) as usize] += 1;
        self.last_quadrant = Some(quadrant);
    }

    pub fn classified(&self) -> usize {
        self.quadrant_counts.iter().sum()
    }
}

/// Per-frame loop: run inference when the video has advanced, classify the
/// first face's gaze, publish it, and draw the overlay.
///
/// Single-threaded; classification runs synchronously inside the loop.
/// Landmarker and source errors abort the run. Classification errors only
/// skip publishing for that frame.
pub struct TrackGazeUseCase {
    source: Box<dyn FrameSource>,
    landmarker: Box<dyn FaceLandmarker>,
    classifier: Box<dyn GazeClassifier>,
    publisher: Box<dyn QuadrantPublisher>,
    drawer: Option<Box<dyn LandmarkDrawer>>,
    logger: Box<dyn PipelineLogger>,
    renderer: BlendShapeListRenderer,
    config: TrackGazeConfig,
}

impl TrackGazeUseCase {
    pub fn new(
        source: Box<dyn FrameSource>,
        landmarker: Box<dyn FaceLandmarker>,
        classifier: Box<dyn GazeClassifier>,
        publisher: Box<dyn QuadrantPublisher>,
        logger: Box<dyn PipelineLogger>,
        config: TrackGazeConfig,
    ) -> Self {
        Self {
            source,
            landmarker,
            classifier,
            publisher,
            drawer: None,
            logger,
            renderer: BlendShapeListRenderer::default(),
            config,
        }
    }

    pub fn with_drawer(mut self, drawer: Box<dyn LandmarkDrawer>) -> Self {
        self.drawer = Some(drawer);
        self
    }

    /// Runs the loop to completion. The source is closed and the summary
    /// emitted whether or not the run fails.
    pub fn execute(
        &mut self,
        metadata: &VideoMetadata,
    ) -> Result<TrackingSummary, Box<dyn std::error::Error>> {
        let result = self.run_frames(metadata);
        self.source.close();
        self.logger.summary();
        result
    }

    fn run_frames(
        &mut self,
        metadata: &VideoMetadata,
    ) -> Result<TrackingSummary, Box<dyn std::error::Error>> {
        if self.landmarker.running_mode() == RunningMode::Image {
            self.landmarker.set_running_mode(RunningMode::Video)?;
        }

        let start = Instant::now();
        let total = metadata.total_frames;
        let mut summary = TrackingSummary::default();
        let mut last_video_time: Option<f64> = None;
        let mut results = LandmarkerResult::default();
        let mut display: Option<(u32, u32)> = None;

        for frame_result in self.source.frames() {
            if !self.config.running.load(Ordering::Relaxed) {
                self.logger.info("Gaze tracking stopped");
                break;
            }
            if self.config.max_frames.is_some_and(|max| summary.frames >= max) {
                break;
            }
            let frame = frame_result?;
            summary.frames += 1;

            let size = display_size(frame.width(), frame.height(), self.config.display_width);
            if display != Some(size) {
                log::debug!(
                    "Display {}x{} for {}x{} source",
                    size.0,
                    size.1,
                    frame.width(),
                    frame.height()
                );
                display = Some(size);
            }

            if last_video_time != Some(frame.video_time()) {
                last_video_time = Some(frame.video_time());
                let t = Instant::now();
                let now_ms = start.elapsed().as_secs_f64() * 1000.0;
                results = self.landmarker.detect_for_video(&frame, now_ms)?;
                self.logger.timing("detect", elapsed_ms(t));
                summary.inferences += 1;
            } else {
                summary.skipped_inferences += 1;
            }

            if let Some(face) = results.first_face_blend_shapes() {
                let t = Instant::now();
                let outcome = self.classifier.classify(face);
                self.logger.timing("classify", elapsed_ms(t));
                match outcome {
                    Ok(quadrant) => {
                        summary.record(quadrant);
                        self.logger.quadrant(quadrant);
                        self.publisher.publish(QuadrantUpdate {
                            frame_index: frame.index(),
                            video_time: frame.video_time(),
                            quadrant,
                        });
                    }
                    Err(e) => {
                        summary.classification_failures += 1;
                        log::warn!("Frame {}: gaze classification failed: {e}", frame.index());
                    }
                }
            }

            if let Some(drawer) = self.drawer.as_mut() {
                for landmarks in &results.face_landmarks {
                    draw_face_mesh(&mut **drawer, landmarks);
                }
            }

            if let Some(sink) = self.config.on_blend_shapes.as_mut() {
                if let Some(text) = self.renderer.render(&results.face_blendshapes) {
                    sink(text.as_str());
                }
            }

            self.logger.metric("faces", results.face_count() as f64);
            self.logger.progress(summary.frames, total);
        }

        Ok(summary)
    }
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}
