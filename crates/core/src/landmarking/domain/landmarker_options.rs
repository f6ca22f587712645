use serde::{Deserialize, Serialize};

use crate::shared::constants::{DEFAULT_NUM_FACES, FACE_LANDMARKER_MODEL_URL};

/// Whether the landmarker expects independent images or a timestamped stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunningMode {
    Image,
    Video,
}

impl std::fmt::Display for RunningMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunningMode::Image => write!(f, "IMAGE"),
            RunningMode::Video => write!(f, "VIDEO"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Delegate {
    Cpu,
    Gpu,
}

/// Construction options for a face landmarker backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceLandmarkerOptions {
    pub model_asset_path: String,
    pub delegate: Delegate,
    pub output_face_blendshapes: bool,
    pub running_mode: RunningMode,
    pub num_faces: usize,
}

impl Default for FaceLandmarkerOptions {
    fn default() -> Self {
        Self {
            model_asset_path: FACE_LANDMARKER_MODEL_URL.to_string(),
            delegate: Delegate::Gpu,
            output_face_blendshapes: true,
            running_mode: RunningMode::Image,
            num_faces: DEFAULT_NUM_FACES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = FaceLandmarkerOptions::default();
        assert!(opts.model_asset_path.ends_with("face_landmarker.task"));
        assert_eq!(opts.delegate, Delegate::Gpu);
        assert!(opts.output_face_blendshapes);
        assert_eq!(opts.running_mode, RunningMode::Image);
        assert_eq!(opts.num_faces, 1);
    }

    #[test]
    fn test_running_mode_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&RunningMode::Video).unwrap(), "\"VIDEO\"");
        let mode: RunningMode = serde_json::from_str("\"IMAGE\"").unwrap();
        assert_eq!(mode, RunningMode::Image);
    }

    #[test]
    fn test_partial_options_fill_defaults() {
        let opts: FaceLandmarkerOptions =
            serde_json::from_str(r#"{"delegate":"CPU","num_faces":2}"#).unwrap();
        assert_eq!(opts.delegate, Delegate::Cpu);
        assert_eq!(opts.num_faces, 2);
        assert!(opts.output_face_blendshapes);
    }
}
