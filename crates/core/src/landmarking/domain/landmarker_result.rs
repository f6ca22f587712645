use serde::{Deserialize, Serialize};

use crate::blendshapes::domain::face_blend_shapes::FaceBlendShapes;

/// A mesh point in normalized image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLandmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl NormalizedLandmark {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            visibility: None,
        }
    }
}

/// Output of one face-landmarker inference.
///
/// `face_landmarks[i]` and `face_blendshapes[i]` describe the same face.
/// Blend shapes are only present when the landmarker was configured to
/// output them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkerResult {
    #[serde(default)]
    pub face_landmarks: Vec<Vec<NormalizedLandmark>>,
    #[serde(default)]
    pub face_blendshapes: Vec<FaceBlendShapes>,
}

impl LandmarkerResult {
    pub fn face_count(&self) -> usize {
        self.face_landmarks.len().max(self.face_blendshapes.len())
    }

    pub fn has_faces(&self) -> bool {
        self.face_count() > 0
    }

    /// Blend shapes of the first detected face, if any.
    pub fn first_face_blend_shapes(&self) -> Option<&FaceBlendShapes> {
        self.face_blendshapes.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result: LandmarkerResult = serde_json::from_str("{}").unwrap();
        assert!(!result.has_faces());
        assert!(result.first_face_blend_shapes().is_none());
    }

    #[test]
    fn test_deserializes_library_json() {
        let json = r#"{
            "faceLandmarks": [[{"x":0.5,"y":0.4,"z":-0.01},{"x":0.6,"y":0.4,"z":0.0}]],
            "faceBlendshapes": [{"categories":[{"index":0,"score":0.1,"categoryName":"_neutral","displayName":""}],"headIndex":-1,"headName":""}]
        }"#;
        let result: LandmarkerResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.face_count(), 1);
        assert_eq!(result.face_landmarks[0].len(), 2);
        assert_eq!(result.face_landmarks[0][1].x, 0.6);
        assert_eq!(result.first_face_blend_shapes().unwrap().len(), 1);
    }

    #[test]
    fn test_landmarks_without_blend_shapes_still_count_as_face() {
        let result = LandmarkerResult {
            face_landmarks: vec![vec![NormalizedLandmark::new(0.1, 0.2, 0.0)]],
            face_blendshapes: Vec::new(),
        };
        assert!(result.has_faces());
        assert!(result.first_face_blend_shapes().is_none());
    }
}
