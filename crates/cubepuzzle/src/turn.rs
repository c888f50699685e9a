use std::fmt;

use cubemath::Axis;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Category of slice turn.
#[derive(Serialize, Deserialize, EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TurnKind {
    /// Slice parallel to the front face. Slice 0 is the front face.
    Front,
    /// Slice parallel to the up face. Slice 0 is the up face.
    Top,
    /// Slice parallel to the left face. Slice 0 is the left face.
    Side,
}

impl TurnKind {
    /// Returns the axis that the slice rotates around.
    pub fn axis(self) -> Axis {
        match self {
            TurnKind::Front => Axis::Z,
            TurnKind::Top => Axis::Y,
            TurnKind::Side => Axis::X,
        }
    }
}

/// Quarter turn of one slice of the cube. This is also the entry type of the
/// undo and redo stacks.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    /// Which family of slices is turned.
    pub kind: TurnKind,
    /// Normalized slice index, in `0..size`.
    pub slice: u32,
    /// Direction of the turn.
    pub clockwise: bool,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self.kind {
            TurnKind::Front => 'F',
            TurnKind::Top => 'T',
            TurnKind::Side => 'S',
        };
        let direction = if self.clockwise { "" } else { "'" };
        write!(f, "{symbol}{}{direction}", self.slice)
    }
}

impl Turn {
    /// Constructs a turn.
    pub fn new(kind: TurnKind, slice: u32, clockwise: bool) -> Self {
        Self {
            kind,
            slice,
            clockwise,
        }
    }

    /// Returns the turn that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            clockwise: !self.clockwise,
            ..self
        }
    }
}

/// Source of random choices for shuffling a cube.
///
/// Every [`rand::Rng`] is a `TurnSource`, so a seeded generator gives a
/// reproducible shuffle.
pub trait TurnSource {
    /// Returns a slice index in `0..size`.
    fn next_slice(&mut self, size: u32) -> u32;
    /// Returns a random turn direction.
    fn next_clockwise(&mut self) -> bool;
    /// Returns a random turn category, each with equal probability.
    fn next_kind(&mut self) -> TurnKind;

    /// Returns a random turn for a cube of size `size`.
    fn next_turn(&mut self, size: u32) -> Turn {
        let slice = self.next_slice(size);
        let clockwise = self.next_clockwise();
        let kind = self.next_kind();
        Turn::new(kind, slice, clockwise)
    }
}

impl<R: Rng + ?Sized> TurnSource for R {
    fn next_slice(&mut self, size: u32) -> u32 {
        self.random_range(0..size)
    }

    fn next_clockwise(&mut self) -> bool {
        self.random()
    }

    fn next_kind(&mut self) -> TurnKind {
        match self.random_range(0..3) {
            0 => TurnKind::Front,
            1 => TurnKind::Side,
            _ => TurnKind::Top,
        }
    }
}
