pub const FACE_LANDMARKER_MODEL_URL: &str =
    "https://storage.googleapis.com/mediapipe-models/face_landmarker/face_landmarker/float16/1/face_landmarker.task";

/// Baseline subtracted from each gaze axis sum before comparison.
///
/// Empirically chosen; keep as-is.
pub const DEFAULT_AXIS_BIAS: f64 = 0.2;

/// Width in pixels of the on-screen video and overlay box.
pub const DEFAULT_DISPLAY_WIDTH: u32 = 480;

/// Faces tracked per frame.
pub const DEFAULT_NUM_FACES: usize = 1;

pub const DEFAULT_FRAME_WIDTH: u32 = 640;
pub const DEFAULT_FRAME_HEIGHT: u32 = 480;

/// Line width the drawing library uses when a style leaves it unset.
pub const DEFAULT_LINE_WIDTH: f32 = 4.0;

/// Maximum bar length (in characters) of a rendered blend-shape row.
pub const BLEND_SHAPE_BAR_WIDTH: usize = 40;

pub const SETTINGS_DIR_NAME: &str = "GazeQuadrant";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
