use serde::{Deserialize, Serialize};

use crate::gaze::domain::gaze_quadrant::GazeQuadrant;

/// A classified frame, as handed to consumers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantUpdate {
    pub frame_index: usize,
    pub video_time: f64,
    pub quadrant: GazeQuadrant,
}

/// Delivers classified quadrants to whatever reads them.
///
/// The frame loop calls this once per classified frame; frames without a
/// face or with a classification failure publish nothing.
pub trait QuadrantPublisher: Send {
    fn publish(&mut self, update: QuadrantUpdate);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_serializes_camel_case() {
        let update = QuadrantUpdate {
            frame_index: 3,
            video_time: 0.1,
            quadrant: GazeQuadrant::LowerLeft,
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"frameIndex":3,"videoTime":0.1,"quadrant":3}"#);
    }
}
