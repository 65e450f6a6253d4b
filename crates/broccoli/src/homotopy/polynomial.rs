//! Complex polynomials with real coefficients.

use std::fmt;
use std::str::FromStr;

use crate::errors::FractalError;
use crate::geom2::{from_real, origin, Planar, Point};

/// Anything that can be read as a complex number.
pub trait AsComplex {
    fn as_complex(&self) -> Point;
}

impl AsComplex for f64 {
    #[inline]
    fn as_complex(&self) -> Point {
        from_real(*self)
    }
}

impl AsComplex for Point {
    #[inline]
    fn as_complex(&self) -> Point {
        *self
    }
}

/// `Σ coefficients[k] · z^k`.
///
/// Invariant: at least one coefficient, so `degree()` is defined.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexPolynomial {
    coefficients: Vec<f64>,
}

impl ComplexPolynomial {
    pub fn new(coefficients: Vec<f64>) -> Result<Self, FractalError> {
        if coefficients.is_empty() {
            return Err(FractalError::invalid("polynomial needs at least one coefficient"));
        }
        Ok(Self { coefficients })
    }

    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Number of coefficients minus one; trailing zeros count.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Horner evaluation.
    pub fn evaluate_at<Z: AsComplex>(&self, z: Z) -> Point {
        let z = z.as_complex();
        self.coefficients
            .iter()
            .rev()
            .fold(origin(), |acc, &c| acc.by(&z) + from_real(c))
    }
}

/// Highest power first, zero terms dropped, unit coefficients elided:
/// `[1, 0, -2, 1]` renders as `z^3 - 2z^2 + 1`.
impl fmt::Display for ComplexPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .coefficients
            .iter()
            .enumerate()
            .rev()
            .filter(|&(_, &c)| c != 0.0)
            .map(|(k, &c)| term(c, k))
            .collect();
        if terms.is_empty() {
            return f.write_str("0");
        }
        for (i, t) in terms.iter().enumerate() {
            match (i, t.strip_prefix('-')) {
                (0, _) => f.write_str(t)?,
                (_, Some(rest)) => write!(f, " - {rest}")?,
                (_, None) => write!(f, " + {t}")?,
            }
        }
        Ok(())
    }
}

fn term(c: f64, k: usize) -> String {
    if k == 0 {
        return c.to_string();
    }
    let coefficient = if c == 1.0 {
        String::new()
    } else if c == -1.0 {
        "-".to_string()
    } else {
        c.to_string()
    };
    if k == 1 {
        format!("{coefficient}z")
    } else {
        format!("{coefficient}z^{k}")
    }
}

/// Whitespace-separated coefficients, constant term first. Tokens that are not
/// numbers are skipped; an input with no numbers at all is rejected.
impl FromStr for ComplexPolynomial {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coefficients = s
            .split_whitespace()
            .filter_map(|t| t.parse::<f64>().ok())
            .filter(|c| !c.is_nan())
            .collect();
        Self::new(coefficients)
    }
}
