use thiserror::Error;

use crate::blendshapes::domain::face_blend_shapes::{BlendShapeError, FaceBlendShapes};
use crate::gaze::domain::gaze_quadrant::GazeQuadrant;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GazeError {
    #[error(transparent)]
    BlendShape(#[from] BlendShapeError),
    #[error("blend-shape score for '{name}' is not finite: {score}")]
    InvalidScore { name: &'static str, score: f64 },
}

/// Domain interface for estimating gaze direction from one face's blend shapes.
pub trait GazeClassifier: Send {
    fn classify(&self, face: &FaceBlendShapes) -> Result<GazeQuadrant, GazeError>;
}
