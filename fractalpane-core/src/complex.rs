use serde::{Deserialize, Serialize};

/// A point in the complex plane.
///
/// Immutable value type: all operations return a new `Complex`. Pixel
/// iteration only ever needs addition, multiplication and squared magnitude,
/// so the arithmetic surface is kept deliberately small.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn add(&self, other: &Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    /// Complex multiplication: (a+bi)(c+di) = (ac-bd) + (ad+bc)i.
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Squared: (re² - im², 2·re·im). Cheaper than `mul(self)` and the exact
    /// form the quadratic escape iteration uses.
    pub fn sqr(&self) -> Self {
        Self {
            re: self.re * self.re - self.im * self.im,
            im: 2.0 * self.re * self.im,
        }
    }

    /// Squared magnitude |z|². Avoids the sqrt of `abs`; escape checks
    /// compare this against the squared escape radius.
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Component-wise absolute value, the Burning Ship fold.
    pub fn abs_parts(&self) -> Self {
        Self {
            re: self.re.abs(),
            im: self.im.abs(),
        }
    }
}
