//! Layered face-mesh overlay drawn on top of each video frame.
//!
//! The connection tables themselves belong to the drawing backend; this
//! module only fixes which sets are drawn, in which order, and how.

use crate::landmarking::domain::landmarker_result::NormalizedLandmark;
use crate::shared::constants::DEFAULT_LINE_WIDTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionSet {
    Tesselation,
    RightEye,
    RightEyebrow,
    LeftEye,
    LeftEyebrow,
    FaceOval,
    Lips,
    RightIris,
    LeftIris,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingStyle {
    /// CSS hex color, optionally with alpha (`#RRGGBBAA`).
    pub color: &'static str,
    pub line_width: f32,
}

const RIGHT_COLOR: &str = "#FF3030";
const LEFT_COLOR: &str = "#30FF30";
const OUTLINE_COLOR: &str = "#E0E0E0";

/// Overlay layers in draw order; later layers paint over earlier ones.
pub const FACE_MESH_LAYERS: [(ConnectionSet, DrawingStyle); 9] = [
    (
        ConnectionSet::Tesselation,
        DrawingStyle {
            color: "#C0C0C070",
            line_width: 1.0,
        },
    ),
    (ConnectionSet::RightEye, style(RIGHT_COLOR)),
    (ConnectionSet::RightEyebrow, style(RIGHT_COLOR)),
    (ConnectionSet::LeftEye, style(LEFT_COLOR)),
    (ConnectionSet::LeftEyebrow, style(LEFT_COLOR)),
    (ConnectionSet::FaceOval, style(OUTLINE_COLOR)),
    (ConnectionSet::Lips, style(OUTLINE_COLOR)),
    (ConnectionSet::RightIris, style(RIGHT_COLOR)),
    (ConnectionSet::LeftIris, style(LEFT_COLOR)),
];

const fn style(color: &'static str) -> DrawingStyle {
    DrawingStyle {
        color,
        line_width: DEFAULT_LINE_WIDTH,
    }
}

/// Drawing backend for landmark connections (canvas, texture, ...).
pub trait LandmarkDrawer: Send {
    fn draw_connectors(
        &mut self,
        landmarks: &[NormalizedLandmark],
        set: ConnectionSet,
        style: &DrawingStyle,
    );
}

/// Draws every overlay layer for one face.
pub fn draw_face_mesh(drawer: &mut dyn LandmarkDrawer, landmarks: &[NormalizedLandmark]) {
    for (set, style) in &FACE_MESH_LAYERS {
        drawer.draw_connectors(landmarks, *set, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingDrawer {
        calls: Vec<(ConnectionSet, DrawingStyle, usize)>,
    }

    impl LandmarkDrawer for RecordingDrawer {
        fn draw_connectors(
            &mut self,
            landmarks: &[NormalizedLandmark],
            set: ConnectionSet,
            style: &DrawingStyle,
        ) {
            self.calls.push((set, *style, landmarks.len()));
        }
    }

    #[test]
    fn test_draws_all_layers_in_order() {
        let mut drawer = RecordingDrawer::default();
        let landmarks = vec![NormalizedLandmark::new(0.5, 0.5, 0.0); 3];
        draw_face_mesh(&mut drawer, &landmarks);

        let sets: Vec<_> = drawer.calls.iter().map(|c| c.0).collect();
        assert_eq!(
            sets,
            vec![
                ConnectionSet::Tesselation,
                ConnectionSet::RightEye,
                ConnectionSet::RightEyebrow,
                ConnectionSet::LeftEye,
                ConnectionSet::LeftEyebrow,
                ConnectionSet::FaceOval,
                ConnectionSet::Lips,
                ConnectionSet::RightIris,
                ConnectionSet::LeftIris,
            ]
        );
        assert!(drawer.calls.iter().all(|c| c.2 == 3));
    }

    #[test]
    fn test_tesselation_is_thin_and_translucent() {
        let (_, style) = FACE_MESH_LAYERS[0];
        assert_eq!(style.color, "#C0C0C070");
        assert_eq!(style.line_width, 1.0);
    }

    #[test]
    fn test_sides_use_distinct_colors() {
        for (set, style) in &FACE_MESH_LAYERS {
            match set {
                ConnectionSet::RightEye | ConnectionSet::RightEyebrow | ConnectionSet::RightIris => {
                    assert_eq!(style.color, RIGHT_COLOR)
                }
                ConnectionSet::LeftEye | ConnectionSet::LeftEyebrow | ConnectionSet::LeftIris => {
                    assert_eq!(style.color, LEFT_COLOR)
                }
                ConnectionSet::FaceOval | ConnectionSet::Lips => {
                    assert_eq!(style.color, OUTLINE_COLOR)
                }
                ConnectionSet::Tesselation => {}
            }
        }
    }
}
