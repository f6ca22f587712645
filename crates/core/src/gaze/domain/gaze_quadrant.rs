use serde::{Deserialize, Serialize};

/// Screen quadrant the subject is estimated to be looking at.
///
/// Serializes as its integer code (1-4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum GazeQuadrant {
    UpperLeft = 1,
    UpperRight = 2,
    LowerLeft = 3,
    LowerRight = 4,
}

impl GazeQuadrant {
    pub const ALL: [GazeQuadrant; 4] = [
        GazeQuadrant::UpperLeft,
        GazeQuadrant::UpperRight,
        GazeQuadrant::LowerLeft,
        GazeQuadrant::LowerRight,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Picks the quadrant from the two axis decisions.
    pub fn from_axes(up: bool, left: bool) -> Self {
        match (up, left) {
            (true, true) => GazeQuadrant::UpperLeft,
            (true, false) => GazeQuadrant::UpperRight,
            (false, true) => GazeQuadrant::LowerLeft,
            (false, false) => GazeQuadrant::LowerRight,
        }
    }
}

impl From<GazeQuadrant> for u8 {
    fn from(q: GazeQuadrant) -> Self {
        q.code()
    }
}

impl TryFrom<u8> for GazeQuadrant {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(GazeQuadrant::UpperLeft),
            2 => Ok(GazeQuadrant::UpperRight),
            3 => Ok(GazeQuadrant::LowerLeft),
            4 => Ok(GazeQuadrant::LowerRight),
            other => Err(format!("gaze quadrant code must be 1-4, got {other}")),
        }
    }
}

impl std::fmt::Display for GazeQuadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            GazeQuadrant::UpperLeft => "upper-left",
            GazeQuadrant::UpperRight => "upper-right",
            GazeQuadrant::LowerLeft => "lower-left",
            GazeQuadrant::LowerRight => "lower-right",
        })
    }
}
