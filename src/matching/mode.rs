/// Sign convention for the matching distance.
///
/// One calibration curve covers both halves of a move: positive distances
/// index the start of the clip (distance travelled from where acceleration
/// began) and negative distances index the end (distance still to go before
/// the predicted stop or landing point).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Accelerating away from a start anchor; distance is positive.
    #[default]
    Approaching,
    /// Decelerating toward a predicted stop or landing; distance is negative.
    Receding,
}

impl MatchMode {
    pub fn sign(self) -> f32 {
        match self {
            MatchMode::Approaching => 1.0,
            MatchMode::Receding => -1.0,
        }
    }

    /// Applies this mode's sign to an unsigned distance.
    pub fn signed_distance(self, distance: f32) -> f32 {
        distance.abs() * self.sign()
    }
}
