use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionByZero;

impl Display for DivisionByZero {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "division by zero")
    }
}

/// A complex number over `f64` components. Equality is exact and
/// componentwise; magnitude ordering lives in `compare_magnitude` and is
/// intentionally not a `PartialOrd` impl, since two distinct values with
/// equal modulus order as equal while comparing unequal under `==`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    real: f64,
    imag: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { real: 0.0, imag: 0.0 };

    pub fn new(real: f64, imag: f64) -> Complex {
        Complex { real, imag }
    }

    pub fn from_real(real: f64) -> Complex {
        Complex { real, imag: 0.0 }
    }

    pub fn real(&self) -> f64 {
        self.real
    }

    pub fn imag(&self) -> f64 {
        self.imag
    }

    pub fn set_real(&mut self, real: f64) {
        self.real = real;
    }

    pub fn set_imag(&mut self, imag: f64) {
        self.imag = imag;
    }

    pub fn modulus(&self) -> f64 {
        (self.real * self.real + self.imag * self.imag).sqrt()
    }

    /// Orders by modulus with native float semantics; `None` when either
    /// modulus is NaN.
    pub fn compare_magnitude(&self, other: &Complex) -> Option<Ordering> {
        self.modulus().partial_cmp(&other.modulus())
    }

    /// Prefix increment: steps the real part by 1 and returns the new value.
    /// The imaginary part is untouched.
    pub fn increment_real(&mut self) -> Complex {
        self.real += 1.0;
        *self
    }

    /// Postfix increment: steps the real part by 1 and returns the value
    /// from before the step.
    pub fn post_increment_real(&mut self) -> Complex {
        let before = *self;
        self.real += 1.0;
        before
    }

    pub fn decrement_real(&mut self) -> Complex {
        self.real -= 1.0;
        *self
    }

    pub fn post_decrement_real(&mut self) -> Complex {
        let before = *self;
        self.real -= 1.0;
        before
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.real - rhs.real, self.imag - rhs.imag)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.real * rhs.imag + self.imag * rhs.real,
        )
    }
}

impl Div for Complex {
    type Output = Result<Complex, DivisionByZero>;

    // conjugate multiplication; fails only when the denominator is exactly zero
    fn div(self, rhs: Complex) -> Result<Complex, DivisionByZero> {
        let denom = rhs.real * rhs.real + rhs.imag * rhs.imag;
        if denom == 0.0 {
            return Err(DivisionByZero);
        }
        Ok(Complex::new(
            (self.real * rhs.real + self.imag * rhs.imag) / denom,
            (self.imag * rhs.real - self.real * rhs.imag) / denom,
        ))
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.real, -self.imag)
    }
}

impl Display for Complex {
    // branch order matters: (0, 0) prints "0", not "0i"
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.imag == 0.0 {
            write!(f, "{}", self.real)
        } else if self.real == 0.0 {
            write!(f, "{}i", self.imag)
        } else if self.imag > 0.0 {
            write!(f, "{} + {}i", self.real, self.imag)
        } else {
            write!(f, "{} - {}i", self.real, -self.imag)
        }
    }
}
