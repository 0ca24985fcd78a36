// Polynomial Parsing Tests
//
// Tests for text -> coefficient-vector conversion.

use crate::equation::EquationError;
use crate::polynomial::parse_polynomial;

#[test]
fn test_parse_constant() {
    let poly = parse_polynomial("5").unwrap();
    assert_eq!(poly.coefficients, vec![5.0]);
    assert_eq!(poly.variable, "x");
}

#[test]
fn test_parse_linear() {
    let poly = parse_polynomial("3x - 1").unwrap();
    assert_eq!(poly.coefficients, vec![-1.0, 3.0]);
}

#[test]
fn test_parse_quadratic() {
    // Coefficients are indexed by degree: [c, b, a]
    let poly = parse_polynomial("2x^2 + 3x - 1").unwrap();
    assert_eq!(poly.coefficients, vec![-1.0, 3.0, 2.0]);
}

#[test]
fn test_parse_sparse_degrees_fill_with_zero() {
    let poly = parse_polynomial("x^3 + 1").unwrap();
    assert_eq!(poly.coefficients, vec![1.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_parse_repeated_degree_accumulates() {
    let poly = parse_polynomial("x + x").unwrap();
    assert_eq!(poly.coefficients, vec![0.0, 2.0]);
}

#[test]
fn test_parse_bare_variable() {
    let poly = parse_polynomial("x").unwrap();
    assert_eq!(poly.coefficients, vec![0.0, 1.0]);
}

#[test]
fn test_parse_keeps_variable_name() {
    let poly = parse_polynomial("2t^2 - t").unwrap();
    assert_eq!(poly.variable, "t");
    assert_eq!(poly.coefficients, vec![0.0, -1.0, 2.0]);
}

#[test]
fn test_parse_float_coefficients() {
    let poly = parse_polynomial("0.5x^2 + 1.25").unwrap();
    assert_eq!(poly.coefficients, vec![1.25, 0.0, 0.5]);
}

#[test]
fn test_parse_rejects_mixed_variables() {
    assert!(matches!(
        parse_polynomial("x + y"),
        Err(EquationError::UnknownVariable { .. })
    ));
}

#[test]
fn test_parse_rejects_empty() {
    assert_eq!(parse_polynomial("").unwrap_err(), EquationError::EmptySide);
}

#[test]
fn test_parse_rejects_excessive_degree() {
    assert!(matches!(
        parse_polynomial("x^65"),
        Err(EquationError::DegreeTooHigh { .. })
    ));
}

#[test]
fn test_parse_rejects_equals_sign() {
    // '=' is not a polynomial term separator
    assert!(matches!(
        parse_polynomial("x = 1"),
        Err(EquationError::UnexpectedToken { .. })
    ));
}
