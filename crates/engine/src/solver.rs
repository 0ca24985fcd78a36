// Equation solvers
//
// Closed-form solvers over the parser's coefficient forms: single linear
// equations, quadratics by discriminant, and 2x2 linear systems by
// Cramer's rule.

use crate::error::{EngineError, EngineResult};
use parser::equation;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    NoRealRoots,
    OneRoot(f64),
    TwoRoots(f64, f64),
}

fn equation_error(e: equation::EquationError) -> EngineError {
    EngineError::InvalidEquation {
        reason: e.to_string(),
    }
}

/// Solve "ax + b = c" style text for the given variable.
/// Fails when the net coefficient of the variable is zero.
pub fn solve_linear(source: &str, variable: &str) -> EngineResult<f64> {
    let eq = equation::parse_linear(source, variable).map_err(equation_error)?;
    if eq.coefficient == 0.0 {
        return Err(EngineError::DegenerateLinear);
    }
    Ok(-eq.constant / eq.coefficient)
}

/// Solve "ax^2 + bx + c = 0" style text by the discriminant formula
pub fn solve_quadratic(source: &str, variable: &str) -> EngineResult<QuadraticRoots> {
    let eq = equation::parse_quadratic(source, variable).map_err(equation_error)?;

    let discriminant = eq.b * eq.b - 4.0 * eq.a * eq.c;
    if discriminant < 0.0 {
        Ok(QuadraticRoots::NoRealRoots)
    } else if discriminant == 0.0 {
        Ok(QuadraticRoots::OneRoot(-eq.b / (2.0 * eq.a)))
    } else {
        let sqrt_disc = discriminant.sqrt();
        Ok(QuadraticRoots::TwoRoots(
            (-eq.b + sqrt_disc) / (2.0 * eq.a),
            (-eq.b - sqrt_disc) / (2.0 * eq.a),
        ))
    }
}

/// Solve a 2x2 linear system in the given variables by Cramer's rule.
/// Fails when the coefficient determinant is zero.
pub fn solve_system(
    first: &str,
    second: &str,
    x: &str,
    y: &str,
) -> EngineResult<(f64, f64)> {
    let eq1 = equation::parse_linear_pair(first, x, y).map_err(equation_error)?;
    let eq2 = equation::parse_linear_pair(second, x, y).map_err(equation_error)?;

    let determinant = eq1.a * eq2.b - eq1.b * eq2.a;
    if determinant == 0.0 {
        return Err(EngineError::NoUniqueSolution);
    }

    let x_value = (eq1.c * eq2.b - eq1.b * eq2.c) / determinant;
    let y_value = (eq1.a * eq2.c - eq1.c * eq2.a) / determinant;
    Ok((x_value, y_value))
}
