//! N×N×N cube puzzle simulator backend.
//!
//! A [`Cube`] models only the visible shell of sub-cubes. Each [`Cell`] has a
//! lattice position and an orientation basis, and slice turns rotate both.
//! [`Cube::draw()`] projects the six faces onto a flat net on any [`Canvas`].

#[cfg(test)]
use criterion as _; // Suppress unused crate warning (it's used in a benchmark)

mod canvas;
mod cell;
mod cube;
mod draw;
mod error;
mod face;
mod prefs;
mod rgb;
mod scramble;
mod turn;


pub use cubemath;
pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use cubemath::prelude::*;

    pub use crate::canvas::{Canvas, FaceNet};
    pub use crate::cell::Cell;
    pub use crate::cube::Cube;
    pub use crate::error::CubeError;
    pub use crate::face::{Face, PerFace};
    pub use crate::prefs::Preferences;
    pub use crate::rgb::Rgb;
    pub use crate::scramble::ScrambleParams;
    pub use crate::turn::{Turn, TurnKind, TurnSource};
}

/// Default cube size, if no other is specified.
pub const DEFAULT_SIZE: u32 = 3;

/// Default length for a full scramble.
pub const FULL_SCRAMBLE_LENGTH: u32 = 1000;
