//! Integer lattice vectors and quarter-turn rotations.
//!
//! Cube puzzles only ever rotate by multiples of 90 degrees around the
//! principal axes, so all geometry here is exact integer arithmetic.

mod axis;
mod sign;
mod vector;

/// Names for the three axes.
pub const AXIS_NAMES: &str = "XYZ";

/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::AXIS_NAMES;
    pub use crate::axis::Axis;
    pub use crate::sign::Sign;
    pub use crate::vector::Vector3;
}
pub use prelude::*;
