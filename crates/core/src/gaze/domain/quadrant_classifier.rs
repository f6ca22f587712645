//! Quadrant heuristic over the eight eye-look blend-shape channels.
//!
//! Down and up pair both eyes' down/up channels. Right pairs the left eye
//! looking in with the right eye looking out, and left pairs the left eye
//! looking out with the right eye looking in. Every sum has the same bias
//! subtracted before the vertical and horizontal comparisons.

use crate::blendshapes::domain::blend_shape::BlendShape;
use crate::blendshapes::domain::face_blend_shapes::FaceBlendShapes;
use crate::gaze::domain::gaze_axes::GazeAxes;
use crate::gaze::domain::gaze_classifier::{GazeClassifier, GazeError};
use crate::gaze::domain::gaze_quadrant::GazeQuadrant;
use crate::shared::constants::DEFAULT_AXIS_BIAS;

pub struct QuadrantClassifier {
    bias: f64,
}

impl QuadrantClassifier {
    pub fn new(bias: f64) -> Self {
        Self { bias }
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Computes the four biased axis sums.
    ///
    /// Operand order matches the heuristic exactly so results are
    /// bit-for-bit reproducible.
    pub fn axes(&self, face: &FaceBlendShapes) -> Result<GazeAxes, GazeError> {
        let down_left = score(face, BlendShape::EyeLookDownLeft)?;
        let down_right = score(face, BlendShape::EyeLookDownRight)?;
        let in_left = score(face, BlendShape::EyeLookInLeft)?;
        let in_right = score(face, BlendShape::EyeLookInRight)?;
        let out_left = score(face, BlendShape::EyeLookOutLeft)?;
        let out_right = score(face, BlendShape::EyeLookOutRight)?;
        let up_left = score(face, BlendShape::EyeLookUpLeft)?;
        let up_right = score(face, BlendShape::EyeLookUpRight)?;

        Ok(GazeAxes {
            look_down: down_left + down_right - self.bias,
            look_right: in_left + out_right - self.bias,
            look_up: up_left + up_right - self.bias,
            look_left: out_left + in_right - self.bias,
        })
    }
}

impl Default for QuadrantClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_AXIS_BIAS)
    }
}

impl GazeClassifier for QuadrantClassifier {
    fn classify(&self, face: &FaceBlendShapes) -> Result<GazeQuadrant, GazeError> {
        let axes = self.axes(face)?;
        let quadrant = GazeQuadrant::from_axes(axes.looks_up(), axes.looks_left());
        log::trace!("gaze axes {axes:?} -> quadrant {}", quadrant.code());
        Ok(quadrant)
    }
}

fn score(face: &FaceBlendShapes, shape: BlendShape) -> Result<f64, GazeError> {
    let value = face.score(shape)?;
    if !value.is_finite() {
        return Err(GazeError::InvalidScore {
            name: shape.name(),
            score: value,
        });
    }
    Ok(value)
}
