use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub total_frames: usize,
    pub source_path: Option<PathBuf>,
}

impl VideoMetadata {
    /// Size of the on-screen box for this source at a fixed display width.
    ///
    /// Height follows the source aspect ratio. A source with zero width
    /// yields a zero-height box.
    pub fn display_size(&self, display_width: u32) -> (u32, u32) {
        display_size(self.width, self.height, display_width)
    }
}

pub(crate) fn display_size(width: u32, height: u32, display_width: u32) -> (u32, u32) {
    if width == 0 {
        return (display_width, 0);
    }
    let ratio = height as f64 / width as f64;
    (display_width, (display_width as f64 * ratio).round() as u32)
}
