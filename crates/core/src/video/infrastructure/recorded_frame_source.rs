use std::path::{Path, PathBuf};

use crate::shared::frame::Frame;
use crate::shared::recorded_session::{RecordedFrame, RecordedSession};
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::frame_source::FrameSource;

/// Yields one frame per line of a recorded session.
pub struct RecordedFrameSource {
    frames: Vec<RecordedFrame>,
    source_path: Option<PathBuf>,
}

impl RecordedFrameSource {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            source_path: None,
        }
    }

    /// Source over an already-parsed session; `open` is not needed.
    pub fn from_session(session: &RecordedSession, source_path: Option<&Path>) -> Self {
        Self {
            frames: session.frames.clone(),
            source_path: source_path.map(Path::to_path_buf),
        }
    }

    pub fn metadata(&self) -> VideoMetadata {
        let (width, height) = self
            .frames
            .first()
            .map(|f| (f.width, f.height))
            .unwrap_or((0, 0));
        VideoMetadata {
            width,
            height,
            total_frames: self.frames.len(),
            source_path: self.source_path.clone(),
        }
    }
}

impl Default for RecordedFrameSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for RecordedFrameSource {
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>> {
        self.frames = RecordedSession::load(path)?.frames;
        self.source_path = Some(path.to_path_buf());
        Ok(self.metadata())
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        Box::new(
            self.frames
                .iter()
                .enumerate()
                .map(|(i, f)| Ok(Frame::new(i, f.video_time, f.width, f.height))),
        )
    }

    fn close(&mut self) {
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_open_reports_metadata() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{\"videoTime\":0.0,\"width\":1280,\"height\":720}}").unwrap();
        writeln!(file, "{{\"videoTime\":0.033,\"width\":1280,\"height\":720}}").unwrap();

        let mut source = RecordedFrameSource::new();
        let meta = source.open(file.path()).unwrap();
        assert_eq!(meta.width, 1280);
        assert_eq!(meta.height, 720);
        assert_eq!(meta.total_frames, 2);
        assert_eq!(meta.source_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_frames_carry_index_and_time() {
        let session = RecordedSession::parse("{\"videoTime\":0.0}\n{\"videoTime\":0.5}\n").unwrap();
        let mut source = RecordedFrameSource::from_session(&session, None);
        let frames: Vec<Frame> = source.frames().collect::<Result<_, _>>().unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].index(), 1);
        assert_eq!(frames[1].video_time(), 0.5);
    }

    #[test]
    fn test_close_clears_frames() {
        let session = RecordedSession::parse("{\"videoTime\":0.0}\n").unwrap();
        let mut source = RecordedFrameSource::from_session(&session, None);
        source.close();
        assert_eq!(source.frames().count(), 0);
    }

    #[test]
    fn test_from_session_metadata_matches_open() {
        let session = RecordedSession::parse(
            "{\"videoTime\":0.0,\"width\":320,\"height\":240}\n{\"videoTime\":0.1,\"width\":320,\"height\":240}\n",
        )
        .unwrap();
        let source = RecordedFrameSource::from_session(&session, Some(Path::new("/tmp/s.jsonl")));
        let meta = source.metadata();
        assert_eq!((meta.width, meta.height, meta.total_frames), (320, 240, 2));
        assert_eq!(meta.source_path, Some(PathBuf::from("/tmp/s.jsonl")));
    }

    #[test]
    fn test_open_missing_file_errors() {
        let mut source = RecordedFrameSource::new();
        assert!(source.open(Path::new("/nonexistent.jsonl")).is_err());
    }
}
