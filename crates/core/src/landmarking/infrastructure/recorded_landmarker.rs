use std::path::Path;

use crate::landmarking::domain::face_landmarker::{FaceLandmarker, LandmarkerError};
use crate::landmarking::domain::landmarker_options::{FaceLandmarkerOptions, RunningMode};
use crate::landmarking::domain::landmarker_result::LandmarkerResult;
use crate::shared::frame::Frame;
use crate::shared::recorded_session::{RecordedSession, SessionError};

/// Replays recorded landmarker output by frame index.
///
/// Enforces the same call contract as a live landmarker: stream detection
/// requires VIDEO mode and timestamps must not go backwards. Output is
/// shaped by the options the way a live landmarker shapes it: at most
/// `num_faces` faces, and no blend shapes unless `output_face_blendshapes`.
pub struct RecordedLandmarker {
    results: Vec<Option<LandmarkerResult>>,
    running_mode: RunningMode,
    num_faces: usize,
    output_face_blendshapes: bool,
    last_timestamp_ms: Option<f64>,
}

impl RecordedLandmarker {
    pub fn new(session: &RecordedSession, options: &FaceLandmarkerOptions) -> Self {
        log::info!(
            "Replaying landmarker output recorded with model {} ({:?} delegate)",
            options.model_asset_path,
            options.delegate
        );
        Self {
            results: session.frames.iter().map(|f| f.result.clone()).collect(),
            running_mode: options.running_mode,
            num_faces: options.num_faces,
            output_face_blendshapes: options.output_face_blendshapes,
            last_timestamp_ms: None,
        }
    }

    pub fn open(path: &Path, options: &FaceLandmarkerOptions) -> Result<Self, SessionError> {
        Ok(Self::new(&RecordedSession::load(path)?, options))
    }

    fn shape(&self, mut result: LandmarkerResult) -> LandmarkerResult {
        result.face_landmarks.truncate(self.num_faces);
        if self.output_face_blendshapes {
            result.face_blendshapes.truncate(self.num_faces);
        } else {
            result.face_blendshapes.clear();
        }
        result
    }
}

impl FaceLandmarker for RecordedLandmarker {
    fn running_mode(&self) -> RunningMode {
        self.running_mode
    }

    fn set_running_mode(&mut self, mode: RunningMode) -> Result<(), Box<dyn std::error::Error>> {
        if mode != self.running_mode {
            log::debug!("Landmarker running mode {} -> {mode}", self.running_mode);
            self.running_mode = mode;
            self.last_timestamp_ms = None;
        }
        Ok(())
    }

    fn detect_for_video(
        &mut self,
        frame: &Frame,
        timestamp_ms: f64,
    ) -> Result<LandmarkerResult, Box<dyn std::error::Error>> {
        if self.running_mode != RunningMode::Video {
            return Err(LandmarkerError::WrongRunningMode(self.running_mode).into());
        }
        if let Some(previous) = self.last_timestamp_ms {
            if timestamp_ms < previous {
                return Err(LandmarkerError::NonMonotonicTimestamp {
                    previous,
                    current: timestamp_ms,
                }
                .into());
            }
        }
        self.last_timestamp_ms = Some(timestamp_ms);

        let recorded = self
            .results
            .get(frame.index())
            .cloned()
            .flatten()
            .unwrap_or_default();
        Ok(self.shape(recorded))
    }
}
