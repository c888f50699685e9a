use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};

use cubemath::{Axis, Sign, Vector3};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{EnumIter, IntoEnumIterator};

/// Face of the cube, named by where it sits in the solved orientation.
///
/// The Y axis grows downward, so the up face is on the negative side of it.
#[derive(
    Serialize, Deserialize, EnumIter, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd,
    Ord,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Face {
    /// Right face (`+X`).
    #[default]
    R = 0,
    /// Left face (`-X`).
    L = 1,
    /// Up face (`-Y`), also called the top.
    U = 2,
    /// Down face (`+Y`).
    D = 3,
    /// Front face (`+Z`).
    F = 4,
    /// Back face (`-Z`).
    B = 5,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Face {
    /// Number of faces on a cube.
    pub const COUNT: usize = 6;

    /// Returns an iterator over all faces.
    pub fn iter() -> impl Iterator<Item = Face> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Returns the face on the given side of an axis.
    pub fn from_axis_sign(axis: Axis, sign: Sign) -> Self {
        use Face::*;

        match (axis, sign) {
            (Axis::X, Sign::Pos) => R,
            (Axis::X, Sign::Neg) => L,
            (Axis::Y, Sign::Pos) => D,
            (Axis::Y, Sign::Neg) => U,
            (Axis::Z, Sign::Pos) => F,
            (Axis::Z, Sign::Neg) => B,
        }
    }

    /// Returns the axis perpendicular to the face.
    pub fn axis(self) -> Axis {
        use Face::*;

        match self {
            R | L => Axis::X,
            U | D => Axis::Y,
            F | B => Axis::Z,
        }
    }
    /// Returns which side of its axis the face is on.
    pub fn sign(self) -> Sign {
        use Face::*;

        match self {
            R | D | F => Sign::Pos,
            L | U | B => Sign::Neg,
        }
    }
    /// Returns the outward unit normal of the face.
    pub fn normal(self) -> Vector3 {
        Vector3::unit(self.axis(), self.sign())
    }
    /// Returns the direction from which the face is viewed, which is the
    /// opposite of its outward normal.
    pub fn view_direction(self) -> Vector3 {
        -self.normal()
    }

    /// Returns the face on the opposite side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::from_axis_sign(self.axis(), -self.sign())
    }

    /// Returns the single-letter symbol for the face.
    pub fn symbol(self) -> char {
        use Face::*;

        match self {
            R => 'R',
            L => 'L',
            U => 'U',
            D => 'D',
            F => 'F',
            B => 'B',
        }
    }
    /// Returns the human-friendly name of the face.
    pub fn name(self) -> &'static str {
        use Face::*;

        match self {
            R => "Right",
            L => "Left",
            U => "Up",
            D => "Down",
            F => "Front",
            B => "Back",
        }
    }
}

/// One value for each face of the cube, indexed by [`Face`].
///
/// Serializes as a map from lowercase face symbol to value.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PerFace<T>(pub [T; Face::COUNT]);

impl<T> Index<Face> for PerFace<T> {
    type Output = T;

    fn index(&self, face: Face) -> &Self::Output {
        &self.0[face as usize]
    }
}
impl<T> IndexMut<Face> for PerFace<T> {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.0[face as usize]
    }
}

impl<T> PerFace<T> {
    /// Constructs a new list by calling `f` for each face.
    pub fn from_fn(mut f: impl FnMut(Face) -> T) -> Self {
        Self([Face::R, Face::L, Face::U, Face::D, Face::F, Face::B].map(&mut f))
    }

    /// Returns an iterator over faces and their values.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        std::iter::zip(Face::iter(), &self.0)
    }

    /// Maps each value to a new one.
    pub fn map<U>(self, mut f: impl FnMut(Face, T) -> U) -> PerFace<U> {
        let mut faces = Face::iter();
        PerFace(self.0.map(|value| f(faces.next().unwrap_or_default(), value)))
    }
}

impl<T: Serialize> Serialize for PerFace<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PerFace<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut values = HashMap::<Face, T>::deserialize(deserializer)?;
        let mut missing = vec![];
        let ret = PerFace::from_fn(|face| {
            let value = values.remove(&face);
            if value.is_none() {
                missing.push(face);
            }
            value
        });
        match ret.0 {
            [Some(r), Some(l), Some(u), Some(d), Some(f), Some(b)] => Ok(PerFace([r, l, u, d, f, b])),
            _ => Err(serde::de::Error::custom(format!(
                "missing value for face(s): {missing:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_axis_sign_roundtrip() {
        for face in Face::iter() {
            assert_eq!(face, Face::from_axis_sign(face.axis(), face.sign()));
            assert_eq!(face, face.opposite().opposite());
            assert_ne!(face, face.opposite());
            assert_eq!(Some((face.axis(), face.sign())), face.normal().as_unit());
        }
    }

    #[test]
    fn test_per_face_index_order() {
        let symbols = PerFace::from_fn(Face::symbol);
        for face in Face::iter() {
            assert_eq!(face.symbol(), symbols[face]);
        }
        assert_eq!(['R', 'L', 'U', 'D', 'F', 'B'], symbols.0);
    }
}
