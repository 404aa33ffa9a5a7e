use std::ops::{Add, Div, Mul, Neg, Sub};

/// Plane angle stored in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };

    pub fn from_radians(radians: f64) -> Self {
        Angle { radians }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            radians: degrees.to_radians(),
        }
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    pub fn sin(&self) -> f64 {
        self.radians.sin()
    }

    pub fn cos(&self) -> f64 {
        self.radians.cos()
    }

    pub fn is_finite(&self) -> bool {
        self.radians.is_finite()
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Angle::from_radians(self.radians + other.radians)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Angle::from_radians(self.radians - other.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Angle::from_radians(self.radians * scalar)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;

    fn mul(self, angle: Angle) -> Angle {
        Angle::from_radians(self * angle.radians)
    }
}

impl Div<f64> for Angle {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Angle::from_radians(self.radians / scalar)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Angle::from_radians(-self.radians)
    }
}
