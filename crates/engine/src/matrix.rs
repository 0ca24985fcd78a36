// Matrix operations
//
// Row-major f64 matrices bounded at 5x5, the ceiling the calculator UI
// enforces. Determinants use recursive cofactor expansion and the inverse
// the adjugate formula; both are fine at this size.

use crate::error::{EngineError, EngineResult};
use lexer::token::Token;

/// Largest supported dimension per side
pub const MAX_DIM: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Zero-filled matrix; dimensions must be within 1..=MAX_DIM
    pub fn zeros(rows: usize, cols: usize) -> EngineResult<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        })
    }

    pub fn identity(n: usize) -> EngineResult<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        Ok(m)
    }

    /// Build from nested rows, validating rectangularity and bounds
    pub fn from_rows(rows: Vec<Vec<f64>>) -> EngineResult<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map(|row| row.len()).unwrap_or(0);
        check_dimensions(row_count, col_count)?;

        for row in &rows {
            if row.len() != col_count {
                return Err(EngineError::InvalidInput {
                    what: "matrix".to_string(),
                    reason: "rows have different lengths".to_string(),
                });
            }
        }

        Ok(Self {
            rows: row_count,
            cols: col_count,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse a "1,2;3,4" row-major literal
    pub fn parse(source: &str) -> EngineResult<Self> {
        let tokens = lexer::lex_strict(source).map_err(|span| EngineError::InvalidInput {
            what: "matrix".to_string(),
            reason: format!("invalid character at position {}", span.start),
        })?;

        let mut rows = Vec::new();
        for row_tokens in tokens.split(|t| *t == Token::Semicolon) {
            let mut row = Vec::new();
            for cell in row_tokens.split(|t| *t == Token::Comma) {
                row.push(parse_cell(cell)?);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Resize, preserving the overlapping region and zero-filling the rest
    pub fn resize(&self, rows: usize, cols: usize) -> EngineResult<Self> {
        let mut resized = Self::zeros(rows, cols)?;
        for i in 0..self.rows.min(rows) {
            for j in 0..self.cols.min(cols) {
                resized.set(i, j, self.get(i, j));
            }
        }
        Ok(resized)
    }

    pub fn add(&self, other: &Self) -> EngineResult<Self> {
        self.elementwise(other, "add", |a, b| a + b)
    }

    pub fn sub(&self, other: &Self) -> EngineResult<Self> {
        self.elementwise(other, "subtract", |a, b| a - b)
    }

    fn elementwise(
        &self,
        other: &Self,
        operation: &str,
        f: impl Fn(f64, f64) -> f64,
    ) -> EngineResult<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(EngineError::DimensionMismatch {
                operation: operation.to_string(),
                lhs: (self.rows, self.cols),
                rhs: (other.rows, other.cols),
            });
        }

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| f(*a, *b))
            .collect();
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    pub fn scale(&self, k: f64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| v * k).collect(),
        }
    }

    pub fn mul(&self, other: &Self) -> EngineResult<Self> {
        if self.cols != other.rows {
            return Err(EngineError::DimensionMismatch {
                operation: "multiply".to_string(),
                lhs: (self.rows, self.cols),
                rhs: (other.rows, other.cols),
            });
        }

        let mut product = Self::zeros(self.rows, other.cols)?;
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self.get(i, k) * other.get(k, j);
                }
                product.set(i, j, acc);
            }
        }
        Ok(product)
    }

    pub fn transpose(&self) -> Self {
        let mut t = Self {
            rows: self.cols,
            cols: self.rows,
            data: vec![0.0; self.data.len()],
        };
        for i in 0..self.rows {
            for j in 0..self.cols {
                t.set(j, i, self.get(i, j));
            }
        }
        t
    }

    /// Submatrix with one row and one column removed
    fn minor(&self, row: usize, col: usize) -> Self {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in 0..self.rows {
            if i == row {
                continue;
            }
            for j in 0..self.cols {
                if j == col {
                    continue;
                }
                data.push(self.get(i, j));
            }
        }
        Self {
            rows: self.rows - 1,
            cols: self.cols - 1,
            data,
        }
    }

    pub fn determinant(&self) -> EngineResult<f64> {
        if self.rows != self.cols {
            return Err(EngineError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.det_unchecked())
    }

    // Cofactor expansion along the first row
    fn det_unchecked(&self) -> f64 {
        match self.rows {
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            n => (0..n)
                .map(|j| {
                    let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                    sign * self.get(0, j) * self.minor(0, j).det_unchecked()
                })
                .sum(),
        }
    }

    /// Inverse by the adjugate/determinant formula
    pub fn inverse(&self) -> EngineResult<Self> {
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(EngineError::SingularMatrix);
        }

        let n = self.rows;
        if n == 1 {
            return Ok(Self {
                rows: 1,
                cols: 1,
                data: vec![1.0 / det],
            });
        }

        let mut adjugate = Self::zeros(n, n)?;
        for i in 0..n {
            for j in 0..n {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                adjugate.set(j, i, sign * self.minor(i, j).det_unchecked());
            }
        }
        Ok(adjugate.scale(1.0 / det))
    }

    /// Rows as slices, for display code
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}

// A cell is an optionally signed number and nothing else
fn parse_cell(tokens: &[Token]) -> EngineResult<f64> {
    let invalid = |reason: String| EngineError::InvalidInput {
        what: "matrix".to_string(),
        reason,
    };

    let mut sign = 1.0;
    let mut i = 0;
    while matches!(tokens.get(i), Some(Token::Minus)) {
        sign = -sign;
        i += 1;
    }

    let value = match tokens.get(i) {
        Some(Token::Int(n)) => *n as f64,
        Some(Token::Float(text)) => text.parse().unwrap_or(0.0),
        _ => return Err(invalid("expected a number".to_string())),
    };

    if i + 1 != tokens.len() {
        return Err(invalid("each cell holds a single number".to_string()));
    }
    Ok(sign * value)
}

fn check_dimensions(rows: usize, cols: usize) -> EngineResult<()> {
    if rows == 0 || cols == 0 || rows > MAX_DIM || cols > MAX_DIM {
        return Err(EngineError::DimensionOutOfRange { rows, cols });
    }
    Ok(())
}
