//! Integer 3D vectors.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use itertools::Itertools;

use crate::{Axis, Sign};

/// Integer 3D vector, used both for lattice positions and for orientation
/// vectors.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector3(pub [i32; 3]);

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}

impl From<[i32; 3]> for Vector3 {
    fn from(value: [i32; 3]) -> Self {
        Self(value)
    }
}

impl Index<Axis> for Vector3 {
    type Output = i32;

    fn index(&self, axis: Axis) -> &Self::Output {
        &self.0[axis.index()]
    }
}
impl IndexMut<Axis> for Vector3 {
    fn index_mut(&mut self, axis: Axis) -> &mut Self::Output {
        &mut self.0[axis.index()]
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Self(self.0.map(|x| -x))
    }
}
impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Self) -> Self::Output {
        let [x, y, z] = self.0;
        let [rx, ry, rz] = rhs.0;
        Self([x + rx, y + ry, z + rz])
    }
}
impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}
impl Mul<i32> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: i32) -> Self::Output {
        Self(self.0.map(|x| x * rhs))
    }
}
impl Mul<Sign> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: Sign) -> Self::Output {
        self * rhs.int()
    }
}

impl Vector3 {
    /// Zero vector.
    pub const ZERO: Self = Self([0, 0, 0]);

    /// Constructs a vector from its components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self([x, y, z])
    }
    /// Returns the unit vector along `axis` in the direction `sign`.
    pub fn unit(axis: Axis, sign: Sign) -> Self {
        let mut ret = Self::ZERO;
        ret[axis] = sign.int();
        ret
    }

    /// Returns the X component.
    pub fn x(self) -> i32 {
        self[Axis::X]
    }
    /// Returns the Y component.
    pub fn y(self) -> i32 {
        self[Axis::Y]
    }
    /// Returns the Z component.
    pub fn z(self) -> i32 {
        self[Axis::Z]
    }

    /// Returns the dot product of this vector with another.
    pub fn dot(self, rhs: Self) -> i32 {
        std::iter::zip(self.0, rhs.0).map(|(l, r)| l * r).sum()
    }

    /// Returns the vector rotated by a quarter turn around `axis`.
    ///
    /// A clockwise turn carries the first axis of
    /// [`Axis::perpendiculars()`] onto the second; a counterclockwise turn is
    /// its inverse.
    #[must_use]
    pub fn rotated(self, axis: Axis, clockwise: bool) -> Self {
        let [from, to] = match clockwise {
            true => axis.perpendiculars(),
            false => {
                let [a, b] = axis.perpendiculars();
                [b, a]
            }
        };
        let mut ret = self;
        ret[to] = self[from];
        ret[from] = -self[to];
        ret
    }
    /// Returns the vector rotated around the X axis.
    #[must_use]
    pub fn rotated_x(self, clockwise: bool) -> Self {
        self.rotated(Axis::X, clockwise)
    }
    /// Returns the vector rotated around the Y axis.
    #[must_use]
    pub fn rotated_y(self, clockwise: bool) -> Self {
        self.rotated(Axis::Y, clockwise)
    }
    /// Returns the vector rotated around the Z axis.
    #[must_use]
    pub fn rotated_z(self, clockwise: bool) -> Self {
        self.rotated(Axis::Z, clockwise)
    }

    /// Returns the axis and sign of the vector if it is a unit vector along
    /// one of the principal axes.
    pub fn as_unit(self) -> Option<(Axis, Sign)> {
        let mut nonzero = Axis::iter().filter(|&axis| self[axis] != 0);
        let axis = nonzero.next()?;
        if nonzero.next().is_some() || self[axis].abs() != 1 {
            return None;
        }
        Some((axis, Sign::of(self[axis])?))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn vector3() -> impl Strategy<Value = Vector3> {
        prop::array::uniform3(-9..=9_i32).prop_map(Vector3)
    }

    #[test]
    fn test_rotated_axes() {
        let x = Vector3::new(1, 0, 0);
        let y = Vector3::new(0, 1, 0);
        let z = Vector3::new(0, 0, 1);

        assert_eq!(y, z.rotated_x(true));
        assert_eq!(-z, y.rotated_x(true));
        assert_eq!(z, x.rotated_y(true));
        assert_eq!(-x, z.rotated_y(true));
        assert_eq!(x, y.rotated_z(true));
        assert_eq!(-y, x.rotated_z(true));

        // Rotation axis is fixed.
        for axis in Axis::iter() {
            let v = Vector3::unit(axis, Sign::Neg);
            assert_eq!(v, v.rotated(axis, true));
            assert_eq!(v, v.rotated(axis, false));
        }
    }

    #[test]
    fn test_as_unit() {
        assert_eq!(Some((Axis::Y, Sign::Neg)), Vector3::new(0, -1, 0).as_unit());
        assert_eq!(None, Vector3::new(0, -2, 0).as_unit());
        assert_eq!(None, Vector3::new(1, 1, 0).as_unit());
        assert_eq!(None, Vector3::ZERO.as_unit());
    }

    #[test]
    fn test_display() {
        assert_eq!("(1, -2, 3)", Vector3::new(1, -2, 3).to_string());
    }

    proptest! {
        #[test]
        fn proptest_quarter_turns(v in vector3(), axis_index in 0..3_usize, clockwise in any::<bool>()) {
            let axis = Axis::ALL[axis_index];

            prop_assert_eq!(v, v.rotated(axis, clockwise).rotated(axis, !clockwise));

            let mut w = v;
            for _ in 0..4 {
                w = w.rotated(axis, clockwise);
            }
            prop_assert_eq!(v, w);

            // Rotations preserve length and the component along the axis.
            let r = v.rotated(axis, clockwise);
            prop_assert_eq!(v.dot(v), r.dot(r));
            prop_assert_eq!(v[axis], r[axis]);
        }
    }
}
