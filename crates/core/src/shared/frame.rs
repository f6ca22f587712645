/// One frame handed out by a frame source.
///
/// Pixel data never enters the workspace: acquisition and inference happen
/// behind the [`FrameSource`](crate::video::domain::frame_source::FrameSource)
/// and [`FaceLandmarker`](crate::landmarking::domain::face_landmarker::FaceLandmarker)
/// ports, so a frame only carries what the loop needs to schedule work.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    index: usize,
    video_time: f64,
    width: u32,
    height: u32,
}

impl Frame {
    pub fn new(index: usize, video_time: f64, width: u32, height: u32) -> Self {
        debug_assert!(video_time.is_finite(), "video_time must be finite");
        Self {
            index,
            video_time,
            width,
            height,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Playback position in seconds (the video element's `currentTime`).
    pub fn video_time(&self) -> f64 {
        self.video_time
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}
