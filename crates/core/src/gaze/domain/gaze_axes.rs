/// Biased per-direction sums of the eye-look channels for one face.
///
/// Each field is the sum of the left- and right-eye channels pointing in
/// that direction, minus the axis bias.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GazeAxes {
    pub look_down: f64,
    pub look_right: f64,
    pub look_up: f64,
    pub look_left: f64,
}

impl GazeAxes {
    /// Strictly greater: a tie counts as looking down.
    pub fn looks_up(&self) -> bool {
        self.look_up > self.look_down
    }

    /// Strictly greater: a tie counts as looking right.
    pub fn looks_left(&self) -> bool {
        self.look_left > self.look_right
    }
}
