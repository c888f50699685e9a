use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

/// 3-dimensional axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (down).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let i = self.index();
        write!(f, "{}", &crate::AXIS_NAMES[i..=i])
    }
}

impl Axis {
    /// All three axes, in order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns an integer index for this axis; X = 0, Y = 1, Z = 2.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the axis with the given index, or `None` if it is out of range.
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Returns the perpendicular axes from this one, using the left-hand rule.
    /// (The cross product of the returned axes is the opposite of the input.)
    ///
    /// A clockwise quarter turn around `self` carries the first returned axis
    /// onto the second.
    pub fn perpendiculars(self) -> [Axis; 2] {
        use Axis::*;
        match self {
            X => [Z, Y], // X+ => rotate from Z+ to Y+.
            Y => [X, Z], // Y+ => rotate from X+ to Z+.
            Z => [Y, X], // Z+ => rotate from Y+ to X+.
        }
    }

    /// Returns an iterator over all axes.
    pub fn iter() -> impl Iterator<Item = Axis> {
        <Self as IntoEnumIterator>::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perpendiculars_exclude_self() {
        for axis in Axis::iter() {
            let [a, b] = axis.perpendiculars();
            assert_ne!(a, axis);
            assert_ne!(b, axis);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_axis_index_roundtrip() {
        for axis in Axis::iter() {
            assert_eq!(Some(axis), Axis::from_index(axis.index()));
        }
        assert_eq!(None, Axis::from_index(3));
        assert_eq!("Y", Axis::Y.to_string());
    }
}
