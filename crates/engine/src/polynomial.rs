// Polynomial arithmetic
//
// Polynomials as coefficient vectors indexed by degree. Addition and
// subtraction pad to the longer vector; multiplication is the full
// convolution. Display follows the calculator's term rules: highest degree
// first, unit coefficients elided, '^' only from degree 2 up.

use crate::error::{EngineError, EngineResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
    variable: String,
}

impl Polynomial {
    /// Build from coefficients indexed by degree, trimming trailing zeros
    pub fn new(coefficients: Vec<f64>, variable: &str) -> Self {
        let mut poly = Self {
            coefficients,
            variable: variable.to_string(),
        };
        poly.normalize();
        poly
    }

    pub fn parse(source: &str) -> EngineResult<Self> {
        let parsed =
            parser::polynomial::parse_polynomial(source).map_err(|e| EngineError::InvalidInput {
                what: "polynomial".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(parsed.coefficients, &parsed.variable))
    }

    fn normalize(&mut self) {
        while self.coefficients.len() > 1 && self.coefficients.last() == Some(&0.0) {
            self.coefficients.pop();
        }
        if self.coefficients.is_empty() {
            self.coefficients.push(0.0);
        }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| *c == 0.0)
    }

    /// Sum, padding to the longer coefficient vector.
    /// The result keeps this polynomial's variable name.
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coefficients.len().max(other.coefficients.len());
        let mut result = vec![0.0; len];
        for (i, slot) in result.iter_mut().enumerate() {
            *slot = self.coefficients.get(i).copied().unwrap_or(0.0)
                + other.coefficients.get(i).copied().unwrap_or(0.0);
        }
        Self::new(result, &self.variable)
    }

    pub fn sub(&self, other: &Self) -> Self {
        let len = self.coefficients.len().max(other.coefficients.len());
        let mut result = vec![0.0; len];
        for (i, slot) in result.iter_mut().enumerate() {
            *slot = self.coefficients.get(i).copied().unwrap_or(0.0)
                - other.coefficients.get(i).copied().unwrap_or(0.0);
        }
        Self::new(result, &self.variable)
    }

    /// Product by full convolution of the coefficient vectors
    pub fn mul(&self, other: &Self) -> Self {
        let mut result = vec![0.0; self.coefficients.len() + other.coefficients.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                result[i + j] += a * b;
            }
        }
        Self::new(result, &self.variable)
    }

    /// Evaluate at a point by Horner's rule
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * x + c)
    }
}

// Coefficients print as integers when they are whole, "2x" not "2.0x"
fn format_coefficient(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for degree in (0..self.coefficients.len()).rev() {
            let coefficient = self.coefficients[degree];
            if coefficient == 0.0 {
                continue;
            }

            if first {
                if coefficient < 0.0 {
                    write!(f, "-")?;
                }
                first = false;
            } else if coefficient < 0.0 {
                write!(f, "-")?;
            } else {
                write!(f, "+")?;
            }

            let magnitude = coefficient.abs();
            if magnitude != 1.0 || degree == 0 {
                write!(f, "{}", format_coefficient(magnitude))?;
            }

            if degree > 0 {
                write!(f, "{}", self.variable)?;
            }
            if degree > 1 {
                write!(f, "^{}", degree)?;
            }
        }

        Ok(())
    }
}
