// Expression evaluation
//
// Tree-walking evaluator for the parser AST. All arithmetic is f64;
// division by zero follows IEEE 754 and surfaces as inf/NaN rather than
// an error, matching ordinary calculator behavior.

use crate::error::{EngineError, EngineResult};
use parser::ast::{BinaryOp, Expr, UnaryOp};
use std::collections::HashMap;

/// Variable bindings for evaluation. Constants pi, e, and tau are always
/// available unless shadowed by an explicit binding.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, f64>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied().or_else(|| constant(name))
    }
}

fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        "tau" => Some(std::f64::consts::TAU),
        _ => None,
    }
}

/// Built-in functions of one argument. "log" is base-10 and "ln" natural,
/// following the calculator's button labels.
fn unary_builtin(name: &str) -> Option<fn(f64) -> f64> {
    match name {
        "sin" => Some(f64::sin),
        "cos" => Some(f64::cos),
        "tan" => Some(f64::tan),
        "asin" => Some(f64::asin),
        "acos" => Some(f64::acos),
        "atan" => Some(f64::atan),
        "sinh" => Some(f64::sinh),
        "cosh" => Some(f64::cosh),
        "tanh" => Some(f64::tanh),
        "exp" => Some(f64::exp),
        "ln" => Some(f64::ln),
        "log" => Some(f64::log10),
        "log2" => Some(f64::log2),
        "sqrt" => Some(f64::sqrt),
        "cbrt" => Some(f64::cbrt),
        "abs" => Some(f64::abs),
        "floor" => Some(f64::floor),
        "ceil" => Some(f64::ceil),
        "round" => Some(f64::round),
        _ => None,
    }
}

/// Built-in functions of two arguments
fn binary_builtin(name: &str) -> Option<fn(f64, f64) -> f64> {
    match name {
        "atan2" => Some(f64::atan2),
        "hypot" => Some(f64::hypot),
        "pow" => Some(f64::powf),
        "min" => Some(f64::min),
        "max" => Some(f64::max),
        _ => None,
    }
}

pub fn evaluate(expr: &Expr, env: &Environment) -> EngineResult<f64> {
    match expr {
        Expr::Literal(lit) => Ok(lit.as_f64()),

        Expr::Identifier(name) => env.get(name).ok_or_else(|| EngineError::UndefinedVariable {
            name: name.clone(),
        }),

        Expr::Unary { op, expr } => {
            let value = evaluate(expr, env)?;
            match op {
                UnaryOp::Negate => Ok(-value),
            }
        }

        Expr::Binary { op, lhs, rhs } => {
            let lhs = evaluate(lhs, env)?;
            let rhs = evaluate(rhs, env)?;
            Ok(match op {
                BinaryOp::Add => lhs + rhs,
                BinaryOp::Sub => lhs - rhs,
                BinaryOp::Mul => lhs * rhs,
                BinaryOp::Div => lhs / rhs,
                BinaryOp::Mod => lhs % rhs,
                BinaryOp::Pow => lhs.powf(rhs),
            })
        }

        Expr::Call { name, args } => {
            if let Some(f) = unary_builtin(name) {
                if args.len() != 1 {
                    return Err(EngineError::WrongArity {
                        function: name.clone(),
                        expected: 1,
                        found: args.len(),
                    });
                }
                return Ok(f(evaluate(&args[0], env)?));
            }

            if let Some(f) = binary_builtin(name) {
                if args.len() != 2 {
                    return Err(EngineError::WrongArity {
                        function: name.clone(),
                        expected: 2,
                        found: args.len(),
                    });
                }
                let a = evaluate(&args[0], env)?;
                let b = evaluate(&args[1], env)?;
                return Ok(f(a, b));
            }

            Err(EngineError::UnknownFunction { name: name.clone() })
        }
    }
}

/// Evaluate an expression with no variable bindings
pub fn evaluate_constant(expr: &Expr) -> EngineResult<f64> {
    evaluate(expr, &Environment::new())
}
