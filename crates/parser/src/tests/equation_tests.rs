// Equation Parsing Tests
//
// Tests for the term scanner and the linear / quadratic / system
// coefficient collectors.

use crate::equation::{
    parse_linear, parse_linear_pair, parse_quadratic, scan_terms, EquationError,
    LinearEquation, LinearPair, QuadraticEquation,
};

// ==================== TERM SCANNER ====================

#[test]
fn test_scan_single_constant() {
    let terms = scan_terms(&lexer::lex("42")).unwrap();
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].coefficient, 42.0);
    assert_eq!(terms[0].variable, None);
    assert_eq!(terms[0].degree, 0);
}

#[test]
fn test_scan_bare_variable_has_coefficient_one() {
    let terms = scan_terms(&lexer::lex("x")).unwrap();
    assert_eq!(terms[0].coefficient, 1.0);
    assert_eq!(terms[0].variable.as_deref(), Some("x"));
    assert_eq!(terms[0].degree, 1);
}

#[test]
fn test_scan_negative_variable() {
    let terms = scan_terms(&lexer::lex("-x")).unwrap();
    assert_eq!(terms[0].coefficient, -1.0);
    assert_eq!(terms[0].degree, 1);
}

#[test]
fn test_scan_implicit_and_explicit_multiply() {
    let implicit = scan_terms(&lexer::lex("2x")).unwrap();
    let explicit = scan_terms(&lexer::lex("2*x")).unwrap();
    assert_eq!(implicit, explicit);
}

#[test]
fn test_scan_exponent() {
    let terms = scan_terms(&lexer::lex("3x^2")).unwrap();
    assert_eq!(terms[0].coefficient, 3.0);
    assert_eq!(terms[0].degree, 2);
}

#[test]
fn test_scan_multiple_terms_with_signs() {
    let terms = scan_terms(&lexer::lex("x^2 - 5x + 6")).unwrap();
    assert_eq!(terms.len(), 3);
    assert_eq!(terms[0].coefficient, 1.0);
    assert_eq!(terms[1].coefficient, -5.0);
    assert_eq!(terms[2].coefficient, 6.0);
}

#[test]
fn test_scan_float_coefficient() {
    let terms = scan_terms(&lexer::lex("0.5x")).unwrap();
    assert_eq!(terms[0].coefficient, 0.5);
}

#[test]
fn test_scan_rejects_empty() {
    assert_eq!(scan_terms(&[]).unwrap_err(), EquationError::EmptySide);
}

#[test]
fn test_scan_rejects_dangling_operator() {
    assert!(matches!(
        scan_terms(&lexer::lex("2x +")),
        Err(EquationError::UnexpectedToken { .. })
    ));
}

// ==================== LINEAR EQUATIONS ====================

#[test]
fn test_linear_simple() {
    // 2x + 4 = 10 collects to 2x - 6 = 0
    assert_eq!(
        parse_linear("2x + 4 = 10", "x").unwrap(),
        LinearEquation {
            coefficient: 2.0,
            constant: -6.0,
        }
    );
}

#[test]
fn test_linear_variable_on_both_sides() {
    // 3x - 2 = x + 6 collects to 2x - 8 = 0
    assert_eq!(
        parse_linear("3x - 2 = x + 6", "x").unwrap(),
        LinearEquation {
            coefficient: 2.0,
            constant: -8.0,
        }
    );
}

#[test]
fn test_linear_cancelled_variable() {
    // x = x collects to a zero coefficient; solving is the engine's problem
    assert_eq!(
        parse_linear("x = x", "x").unwrap(),
        LinearEquation {
            coefficient: 0.0,
            constant: 0.0,
        }
    );
}

#[test]
fn test_linear_rejects_missing_equals() {
    assert_eq!(
        parse_linear("2x + 4", "x").unwrap_err(),
        EquationError::MissingEquals
    );
}

#[test]
fn test_linear_rejects_two_equals() {
    assert_eq!(
        parse_linear("2x = 4 = 10", "x").unwrap_err(),
        EquationError::MultipleEquals
    );
}

#[test]
fn test_linear_rejects_wrong_variable() {
    assert!(matches!(
        parse_linear("2y + 4 = 10", "x"),
        Err(EquationError::UnknownVariable { .. })
    ));
}

#[test]
fn test_linear_rejects_quadratic_term() {
    assert!(matches!(
        parse_linear("x^2 = 4", "x"),
        Err(EquationError::DegreeTooHigh { degree: 2, max: 1 })
    ));
}

#[test]
fn test_linear_rejects_invalid_character() {
    assert!(matches!(
        parse_linear("2x + 4 = 10?", "x"),
        Err(EquationError::InvalidCharacter { .. })
    ));
}

// ==================== QUADRATIC EQUATIONS ====================

#[test]
fn test_quadratic_full() {
    assert_eq!(
        parse_quadratic("x^2 - 5x + 6 = 0", "x").unwrap(),
        QuadraticEquation {
            a: 1.0,
            b: -5.0,
            c: 6.0,
        }
    );
}

#[test]
fn test_quadratic_with_leading_coefficient() {
    assert_eq!(
        parse_quadratic("2x^2 + 3x - 1 = 0", "x").unwrap(),
        QuadraticEquation {
            a: 2.0,
            b: 3.0,
            c: -1.0,
        }
    );
}

#[test]
fn test_quadratic_terms_on_right_side() {
    // x^2 = 4 collects to x^2 - 4 = 0
    assert_eq!(
        parse_quadratic("x^2 = 4", "x").unwrap(),
        QuadraticEquation {
            a: 1.0,
            b: 0.0,
            c: -4.0,
        }
    );
}

#[test]
fn test_quadratic_rejects_zero_leading_coefficient() {
    assert_eq!(
        parse_quadratic("0x^2 + 3x = 1", "x").unwrap_err(),
        EquationError::NotQuadratic
    );
}

#[test]
fn test_quadratic_rejects_cubic_term() {
    assert!(matches!(
        parse_quadratic("x^3 = 1", "x"),
        Err(EquationError::DegreeTooHigh { degree: 3, max: 2 })
    ));
}

// ==================== 2x2 SYSTEMS ====================

#[test]
fn test_pair_simple() {
    assert_eq!(
        parse_linear_pair("x + y = 10", "x", "y").unwrap(),
        LinearPair {
            a: 1.0,
            b: 1.0,
            c: 10.0,
        }
    );
}

#[test]
fn test_pair_with_coefficients() {
    assert_eq!(
        parse_linear_pair("2x - y = 5", "x", "y").unwrap(),
        LinearPair {
            a: 2.0,
            b: -1.0,
            c: 5.0,
        }
    );
}

#[test]
fn test_pair_constant_on_left_moves_right() {
    // x + y + 3 = 10 collects to x + y = 7
    assert_eq!(
        parse_linear_pair("x + y + 3 = 10", "x", "y").unwrap(),
        LinearPair {
            a: 1.0,
            b: 1.0,
            c: 7.0,
        }
    );
}

#[test]
fn test_pair_rejects_third_variable() {
    assert!(matches!(
        parse_linear_pair("x + y + z = 10", "x", "y"),
        Err(EquationError::UnknownVariable { .. })
    ));
}
