use std::ops::{Mul, MulAssign, Neg};

/// Positive or negative direction along an axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Positive.
    #[default]
    Pos = 1,
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Pos => Sign::Neg,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Self) -> Self::Output {
        if self == rhs { Sign::Pos } else { Sign::Neg }
    }
}

impl MulAssign for Sign {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Sign {
    /// Returns the sign of a nonzero integer, or `None` if it is zero.
    pub fn of(x: i32) -> Option<Self> {
        match x.signum() {
            1 => Some(Sign::Pos),
            -1 => Some(Sign::Neg),
            _ => None,
        }
    }

    /// Returns `1` or `-1`.
    pub fn int(self) -> i32 {
        self as i32
    }
}
