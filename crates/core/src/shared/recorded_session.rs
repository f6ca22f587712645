//! JSON Lines recordings of face-landmarker output, one object per frame.
//!
//! ```text
//! {"videoTime":0.033,"width":640,"height":480,"result":{"faceLandmarks":[...],"faceBlendshapes":[...]}}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::landmarking::domain::landmarker_result::LandmarkerResult;
use crate::shared::constants::{DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("failed to read session {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid session record on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedFrame {
    pub video_time: f64,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// `None` when no inference was recorded for this frame.
    #[serde(default)]
    pub result: Option<LandmarkerResult>,
}

fn default_width() -> u32 {
    DEFAULT_FRAME_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_FRAME_HEIGHT
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedSession {
    pub frames: Vec<RecordedFrame>,
}

impl RecordedSession {
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let text = fs::read_to_string(path).map_err(|e| SessionError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&text)
    }

    /// Parses JSON Lines text; blank lines are skipped, line numbers are
    /// 1-based.
    pub fn parse(text: &str) -> Result<Self, SessionError> {
        let mut frames = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let frame = serde_json::from_str(line).map_err(|e| SessionError::Parse {
                line: i + 1,
                source: e,
            })?;
            frames.push(frame);
        }
        Ok(Self { frames })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
