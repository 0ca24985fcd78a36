// Expression Parsing Tests
//
// Tests for AST construction: literals, identifiers, operators, function
// calls, and implicit multiplication.

use crate::ast::{BinaryOp, Expr, Literal, UnaryOp};
use crate::parser::parser;
use chumsky::Parser;
use lexer::token::Token;

// Helper to parse an expression from source
fn parse_expr(input: &str) -> Result<Expr, String> {
    let tokens: Vec<Token> = lexer::lex(input);
    parser()
        .parse(tokens)
        .map_err(|e| format!("Parse error: {:?}", e))
}

fn lit_int(n: i64) -> Expr {
    Expr::Literal(Literal::Int(n))
}

fn lit_float(f: f64) -> Expr {
    Expr::Literal(Literal::Float(f))
}

fn ident(name: &str) -> Expr {
    Expr::Identifier(name.to_string())
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

// ==================== LITERAL TESTS ====================

#[test]
fn test_literal_int() {
    assert_eq!(parse_expr("42").unwrap(), lit_int(42));
}

#[test]
fn test_literal_float() {
    assert_eq!(parse_expr("3.14").unwrap(), lit_float(3.14));
}

// ==================== IDENTIFIER TESTS ====================

#[test]
fn test_identifier_simple() {
    assert_eq!(parse_expr("x").unwrap(), ident("x"));
}

#[test]
fn test_identifier_constant_name() {
    assert_eq!(parse_expr("pi").unwrap(), ident("pi"));
}

// ==================== BINARY OPERATOR TESTS ====================

#[test]
fn test_addition() {
    assert_eq!(
        parse_expr("1 + 2").unwrap(),
        binary(BinaryOp::Add, lit_int(1), lit_int(2))
    );
}

#[test]
fn test_subtraction() {
    assert_eq!(
        parse_expr("5 - 3").unwrap(),
        binary(BinaryOp::Sub, lit_int(5), lit_int(3))
    );
}

#[test]
fn test_multiplication() {
    assert_eq!(
        parse_expr("4 * 2").unwrap(),
        binary(BinaryOp::Mul, lit_int(4), lit_int(2))
    );
}

#[test]
fn test_division() {
    assert_eq!(
        parse_expr("8 / 2").unwrap(),
        binary(BinaryOp::Div, lit_int(8), lit_int(2))
    );
}

#[test]
fn test_modulo() {
    assert_eq!(
        parse_expr("7 % 3").unwrap(),
        binary(BinaryOp::Mod, lit_int(7), lit_int(3))
    );
}

#[test]
fn test_power() {
    assert_eq!(
        parse_expr("2 ^ 8").unwrap(),
        binary(BinaryOp::Pow, lit_int(2), lit_int(8))
    );
}

// ==================== UNARY TESTS ====================

#[test]
fn test_unary_negation() {
    assert_eq!(
        parse_expr("-x").unwrap(),
        Expr::Unary {
            op: UnaryOp::Negate,
            expr: Box::new(ident("x")),
        }
    );
}

#[test]
fn test_double_negation() {
    assert_eq!(
        parse_expr("--3").unwrap(),
        Expr::Unary {
            op: UnaryOp::Negate,
            expr: Box::new(Expr::Unary {
                op: UnaryOp::Negate,
                expr: Box::new(lit_int(3)),
            }),
        }
    );
}

#[test]
fn test_negation_of_product() {
    // Unary binds tighter than '*': -2 * 3 is (-2) * 3
    assert_eq!(
        parse_expr("-2 * 3").unwrap(),
        binary(
            BinaryOp::Mul,
            Expr::Unary {
                op: UnaryOp::Negate,
                expr: Box::new(lit_int(2)),
            },
            lit_int(3)
        )
    );
}

// ==================== CALL TESTS ====================

#[test]
fn test_call_one_arg() {
    assert_eq!(
        parse_expr("sin(x)").unwrap(),
        Expr::Call {
            name: "sin".to_string(),
            args: vec![ident("x")],
        }
    );
}

#[test]
fn test_call_two_args() {
    assert_eq!(
        parse_expr("atan2(1, 2)").unwrap(),
        Expr::Call {
            name: "atan2".to_string(),
            args: vec![lit_int(1), lit_int(2)],
        }
    );
}

#[test]
fn test_call_nested() {
    assert_eq!(
        parse_expr("sqrt(abs(x))").unwrap(),
        Expr::Call {
            name: "sqrt".to_string(),
            args: vec![Expr::Call {
                name: "abs".to_string(),
                args: vec![ident("x")],
            }],
        }
    );
}

#[test]
fn test_call_with_expression_arg() {
    assert_eq!(
        parse_expr("sin(x + 1)").unwrap(),
        Expr::Call {
            name: "sin".to_string(),
            args: vec![binary(BinaryOp::Add, ident("x"), lit_int(1))],
        }
    );
}

// ==================== IMPLICIT MULTIPLICATION ====================

#[test]
fn test_implicit_number_times_variable() {
    assert_eq!(
        parse_expr("2x").unwrap(),
        binary(BinaryOp::Mul, lit_int(2), ident("x"))
    );
}

#[test]
fn test_implicit_number_times_group() {
    assert_eq!(
        parse_expr("3(x + 1)").unwrap(),
        binary(
            BinaryOp::Mul,
            lit_int(3),
            binary(BinaryOp::Add, ident("x"), lit_int(1))
        )
    );
}

#[test]
fn test_implicit_number_times_call() {
    assert_eq!(
        parse_expr("2sin(x)").unwrap(),
        binary(
            BinaryOp::Mul,
            lit_int(2),
            Expr::Call {
                name: "sin".to_string(),
                args: vec![ident("x")],
            }
        )
    );
}

#[test]
fn test_implicit_group_times_group() {
    assert_eq!(
        parse_expr("(x + 1)(x - 1)").unwrap(),
        binary(
            BinaryOp::Mul,
            binary(BinaryOp::Add, ident("x"), lit_int(1)),
            binary(BinaryOp::Sub, ident("x"), lit_int(1))
        )
    );
}

// ==================== GROUPING TESTS ====================

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(
        parse_expr("(1 + 2) * 3").unwrap(),
        binary(
            BinaryOp::Mul,
            binary(BinaryOp::Add, lit_int(1), lit_int(2)),
            lit_int(3)
        )
    );
}

#[test]
fn test_redundant_parentheses() {
    assert_eq!(parse_expr("((42))").unwrap(), lit_int(42));
}

// ==================== ERROR CASES ====================

#[test]
fn test_error_trailing_operator() {
    assert!(parse_expr("2 +").is_err());
}

#[test]
fn test_error_unbalanced_parens() {
    assert!(parse_expr("(1 + 2").is_err());
}

#[test]
fn test_error_empty_input() {
    assert!(parse_expr("").is_err());
}

#[test]
fn test_error_adjacent_numbers() {
    // Implicit multiplication never applies between two numbers
    assert!(parse_expr("2 3").is_err());
}
