// Equation Solver Tests

use crate::error::EngineError;
use crate::solver::{solve_linear, solve_quadratic, solve_system, QuadraticRoots};

// ==================== LINEAR ====================

#[test]
fn test_linear_simple() {
    assert_eq!(solve_linear("2x + 4 = 10", "x").unwrap(), 3.0);
}

#[test]
fn test_linear_bare_variable() {
    assert_eq!(solve_linear("x = 7", "x").unwrap(), 7.0);
}

#[test]
fn test_linear_negative_solution() {
    assert_eq!(solve_linear("3x + 9 = 0", "x").unwrap(), -3.0);
}

#[test]
fn test_linear_variable_on_both_sides() {
    // 3x - 2 = x + 6  ->  x = 4
    assert_eq!(solve_linear("3x - 2 = x + 6", "x").unwrap(), 4.0);
}

#[test]
fn test_linear_fractional_solution() {
    assert!((solve_linear("4x = 1", "x").unwrap() - 0.25).abs() < 1e-12);
}

#[test]
fn test_linear_other_variable_name() {
    assert_eq!(solve_linear("2n = 12", "n").unwrap(), 6.0);
}

#[test]
fn test_linear_degenerate() {
    assert_eq!(
        solve_linear("x = x", "x").unwrap_err(),
        EngineError::DegenerateLinear
    );
}

#[test]
fn test_linear_malformed() {
    assert!(matches!(
        solve_linear("2x + 4", "x"),
        Err(EngineError::InvalidEquation { .. })
    ));
}

// ==================== QUADRATIC ====================

#[test]
fn test_quadratic_two_roots() {
    // x^2 - 5x + 6 = 0 has roots 3 and 2; the +sqrt root comes first
    assert_eq!(
        solve_quadratic("x^2 - 5x + 6 = 0", "x").unwrap(),
        QuadraticRoots::TwoRoots(3.0, 2.0)
    );
}

#[test]
fn test_quadratic_one_root() {
    // x^2 - 4x + 4 = 0 is (x - 2)^2
    assert_eq!(
        solve_quadratic("x^2 - 4x + 4 = 0", "x").unwrap(),
        QuadraticRoots::OneRoot(2.0)
    );
}

#[test]
fn test_quadratic_no_real_roots() {
    assert_eq!(
        solve_quadratic("x^2 + 1 = 0", "x").unwrap(),
        QuadraticRoots::NoRealRoots
    );
}

#[test]
fn test_quadratic_roots_satisfy_equation() {
    let roots = solve_quadratic("2x^2 + 3x - 7 = 0", "x").unwrap();
    let QuadraticRoots::TwoRoots(x1, x2) = roots else {
        panic!("expected two roots, got {:?}", roots);
    };
    for x in [x1, x2] {
        assert!((2.0 * x * x + 3.0 * x - 7.0).abs() < 1e-9);
    }
}

#[test]
fn test_quadratic_terms_on_right() {
    // x^2 = 4  ->  roots 2 and -2
    assert_eq!(
        solve_quadratic("x^2 = 4", "x").unwrap(),
        QuadraticRoots::TwoRoots(2.0, -2.0)
    );
}

#[test]
fn test_quadratic_rejects_linear_input() {
    assert!(matches!(
        solve_quadratic("3x + 1 = 0", "x"),
        Err(EngineError::InvalidEquation { .. })
    ));
}

// ==================== 2x2 SYSTEMS ====================

#[test]
fn test_system_simple() {
    let (x, y) = solve_system("x + y = 10", "2x - y = 5", "x", "y").unwrap();
    assert_eq!((x, y), (5.0, 5.0));
}

#[test]
fn test_system_with_coefficients() {
    // 2x + 3y = 8, x - y = -1  ->  x = 1, y = 2
    let (x, y) = solve_system("2x + 3y = 8", "x - y = -1", "x", "y").unwrap();
    assert!((x - 1.0).abs() < 1e-12);
    assert!((y - 2.0).abs() < 1e-12);
}

#[test]
fn test_system_solution_satisfies_both() {
    let (x, y) = solve_system("3x - 2y = 4", "x + 5y = 7", "x", "y").unwrap();
    assert!((3.0 * x - 2.0 * y - 4.0).abs() < 1e-9);
    assert!((x + 5.0 * y - 7.0).abs() < 1e-9);
}

#[test]
fn test_system_singular() {
    assert_eq!(
        solve_system("x + y = 2", "2x + 2y = 4", "x", "y").unwrap_err(),
        EngineError::NoUniqueSolution
    );
}

#[test]
fn test_system_inconsistent_is_also_singular() {
    assert_eq!(
        solve_system("x + y = 2", "x + y = 3", "x", "y").unwrap_err(),
        EngineError::NoUniqueSolution
    );
}

#[test]
fn test_system_custom_variable_names() {
    let (a, b) = solve_system("a + b = 3", "a - b = 1", "a", "b").unwrap();
    assert_eq!((a, b), (2.0, 1.0));
}
