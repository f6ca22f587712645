use thiserror::Error;

use crate::landmarking::domain::landmarker_options::RunningMode;
use crate::landmarking::domain::landmarker_result::LandmarkerResult;
use crate::shared::frame::Frame;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LandmarkerError {
    #[error("landmarker is in {0} mode; switch to VIDEO before detecting on a stream")]
    WrongRunningMode(RunningMode),
    #[error("timestamp {current}ms is earlier than previous {previous}ms")]
    NonMonotonicTimestamp { previous: f64, current: f64 },
}

/// Domain interface for the external face-landmark model.
///
/// Implementations are stateful (running mode, last timestamp), hence
/// `&mut self`.
pub trait FaceLandmarker: Send {
    fn running_mode(&self) -> RunningMode;

    fn set_running_mode(&mut self, mode: RunningMode) -> Result<(), Box<dyn std::error::Error>>;

    /// Runs inference on one stream frame. `timestamp_ms` must not decrease
    /// between calls.
    fn detect_for_video(
        &mut self,
        frame: &Frame,
        timestamp_ms: f64,
    ) -> Result<LandmarkerResult, Box<dyn std::error::Error>>;
}
