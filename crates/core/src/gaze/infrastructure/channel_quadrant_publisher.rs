use crossbeam_channel::Sender;

use crate::gaze::domain::quadrant_publisher::{QuadrantPublisher, QuadrantUpdate};

/// Forwards every update to a consumer thread over a channel.
///
/// Once the receiver is gone, updates are dropped; the disconnect is logged
/// a single time.
pub struct ChannelQuadrantPublisher {
    tx: Sender<QuadrantUpdate>,
    disconnected: bool,
}

impl ChannelQuadrantPublisher {
    pub fn new(tx: Sender<QuadrantUpdate>) -> Self {
        Self {
            tx,
            disconnected: false,
        }
    }
}

impl QuadrantPublisher for ChannelQuadrantPublisher {
    fn publish(&mut self, update: QuadrantUpdate) {
        if self.disconnected {
            return;
        }
        if self.tx.send(update).is_err() {
            log::warn!("Quadrant consumer disconnected; dropping further updates");
            self.disconnected = true;
        }
    }
}
