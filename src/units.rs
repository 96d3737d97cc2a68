//! Length units used throughout the crate.
//!
//! Paper and grid measurements are entered in inches ([In]); the PDF drawing
//! layer works in points ([Pt]), where one inch is 72 points.

use derive_more::{Add, AddAssign, Display, From, Into, MulAssign, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// Points per inch.
pub const PT_PER_INCH: f64 = 72.0;

/// A length in PDF user-space points
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    MulAssign,
    Sum,
    Display,
    From,
    Into,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// A physical length in inches
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    MulAssign,
    Sum,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display("{_0}in")]
#[serde(transparent)]
pub struct In(pub f64);

impl In {
    /// Whether the length is a real number (not NaN or infinite)
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt((value.0 * PT_PER_INCH) as f32)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Self::Output {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Self::Output {
        Pt(self.0 / rhs)
    }
}

impl Mul<f64> for In {
    type Output = In;

    fn mul(self, rhs: f64) -> Self::Output {
        In(self.0 * rhs)
    }
}

/// Dividing two lengths gives a unitless ratio
impl Div for In {
    type Output = f64;

    fn div(self, rhs: In) -> Self::Output {
        self.0 / rhs.0
    }
}

impl Div<f64> for In {
    type Output = In;

    fn div(self, rhs: f64) -> Self::Output {
        In(self.0 / rhs)
    }
}
