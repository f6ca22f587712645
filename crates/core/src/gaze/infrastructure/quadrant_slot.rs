use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::gaze::domain::gaze_quadrant::GazeQuadrant;
use crate::gaze::domain::quadrant_publisher::{QuadrantPublisher, QuadrantUpdate};

const EMPTY: u8 = 0;

/// Shared "current gaze quadrant" cell.
///
/// Clones share the same cell: hand one to the frame loop as a publisher and
/// keep another to poll from any thread. Last write wins.
#[derive(Clone, Debug, Default)]
pub struct QuadrantSlot {
    code: Arc<AtomicU8>,
}

impl QuadrantSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, quadrant: GazeQuadrant) {
        self.code.store(quadrant.code(), Ordering::Release);
    }

    /// Most recently stored quadrant, or `None` before the first store.
    pub fn load(&self) -> Option<GazeQuadrant> {
        match self.code.load(Ordering::Acquire) {
            EMPTY => None,
            code => GazeQuadrant::try_from(code).ok(),
        }
    }
}

impl QuadrantPublisher for QuadrantSlot {
    fn publish(&mut self, update: QuadrantUpdate) {
        self.store(update.quadrant);
    }
}
