// Graph sampling and terminal rendering
//
// Samples an expression over a view window, skipping points where the
// function is undefined or non-finite, and renders point sets onto a
// character canvas with axes.

use crate::error::{EngineError, EngineResult};
use crate::eval::{evaluate, Environment};
use parser::ast::Expr;

pub const DEFAULT_SAMPLES: usize = 200;

/// Glyphs assigned to successive series on the canvas
const SERIES_GLYPHS: [char; 6] = ['*', '#', 'o', 'x', '+', '%'];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for ViewWindow {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
        }
    }
}

impl ViewWindow {
    pub fn validate(&self) -> EngineResult<()> {
        if !(self.x_min < self.x_max) || !(self.y_min < self.y_max) {
            return Err(EngineError::InvalidInput {
                what: "view window".to_string(),
                reason: "minimum bounds must be below maximum bounds".to_string(),
            });
        }
        Ok(())
    }
}

/// Sample `expr` at `samples` evenly spaced steps across the window's x
/// range, binding the variable "x". Points that evaluate to NaN or
/// infinity are dropped; structural errors (unknown names) propagate.
pub fn sample(expr: &Expr, window: &ViewWindow, samples: usize) -> EngineResult<Vec<(f64, f64)>> {
    window.validate()?;
    if samples == 0 {
        return Err(EngineError::NonPositive {
            what: "sample count".to_string(),
        });
    }

    let step = (window.x_max - window.x_min) / samples as f64;
    let mut env = Environment::new();
    let mut points = Vec::with_capacity(samples + 1);

    for i in 0..=samples {
        let x = window.x_min + step * i as f64;
        env.set("x", x);
        let y = evaluate(expr, &env)?;
        if y.is_finite() {
            points.push((x, y));
        }
    }

    Ok(points)
}

/// Render one or more sampled series onto a text canvas with axes
pub fn render_ascii(
    series: &[Vec<(f64, f64)>],
    window: &ViewWindow,
    width: usize,
    height: usize,
) -> EngineResult<String> {
    window.validate()?;
    if width < 2 || height < 2 {
        return Err(EngineError::InvalidInput {
            what: "canvas".to_string(),
            reason: "width and height must be at least 2".to_string(),
        });
    }

    let mut grid = vec![vec![' '; width]; height];

    let x_span = window.x_max - window.x_min;
    let y_span = window.y_max - window.y_min;
    let to_col = |x: f64| ((x - window.x_min) / x_span * (width - 1) as f64).round() as isize;
    let to_row = |y: f64| {
        ((window.y_max - y) / y_span * (height - 1) as f64).round() as isize
    };

    // Axes first, so points draw over them
    if window.y_min <= 0.0 && 0.0 <= window.y_max {
        let row = to_row(0.0);
        if (0..height as isize).contains(&row) {
            for cell in &mut grid[row as usize] {
                *cell = '-';
            }
        }
    }
    if window.x_min <= 0.0 && 0.0 <= window.x_max {
        let col = to_col(0.0);
        if (0..width as isize).contains(&col) {
            for row in &mut grid {
                row[col as usize] = '|';
            }
        }
    }

    for (index, points) in series.iter().enumerate() {
        let glyph = SERIES_GLYPHS[index % SERIES_GLYPHS.len()];
        for &(x, y) in points {
            let col = to_col(x);
            let row = to_row(y);
            if (0..width as isize).contains(&col) && (0..height as isize).contains(&row) {
                grid[row as usize][col as usize] = glyph;
            }
        }
    }

    let mut out = String::with_capacity((width + 1) * height);
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    Ok(out)
}
