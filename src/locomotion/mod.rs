//! Orientation helpers that sit next to distance matching in a locomotion
//! graph: cardinal direction selection, lean and aim offset.

mod cardinal;
mod state;

pub use cardinal::{CardinalDirection, CardinalThresholds};
pub use state::{LocomotionInput, LocomotionState};
