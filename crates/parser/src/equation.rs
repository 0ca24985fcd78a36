// Equation parsing
//
// Turns equation text into coefficient form for the solvers. Terms are
// collected token by token: [sign] [number] [*] [variable [^ exponent]].
// Right-hand-side terms fold across the equals sign with negated sign, so
// "2x + 4 = 10" and "2x = 10 - 4" collect to the same form.

use lexer::token::Token;
use std::fmt;

/// Highest exponent the term scanner will accept
pub const MAX_DEGREE: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum EquationError {
    /// Input contained a character outside the calculator grammar
    InvalidCharacter { position: usize },

    /// Equation text must contain exactly one '='
    MissingEquals,
    MultipleEquals,

    /// One side of the '=' had no terms at all
    EmptySide,

    /// A token appeared where a term could not continue
    UnexpectedToken { token: String },

    /// A variable other than the declared one(s) appeared
    UnknownVariable { name: String },

    /// Term exponent outside 0..=max for the requested form
    DegreeTooHigh { degree: usize, max: usize },

    /// Degree-2 coefficient collected to zero
    NotQuadratic,
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquationError::InvalidCharacter { position } => {
                write!(f, "invalid character at position {}", position)
            }
            EquationError::MissingEquals => write!(f, "equation must contain '='"),
            EquationError::MultipleEquals => {
                write!(f, "equation must contain exactly one '='")
            }
            EquationError::EmptySide => write!(f, "one side of the equation is empty"),
            EquationError::UnexpectedToken { token } => {
                write!(f, "unexpected '{}' in equation", token)
            }
            EquationError::UnknownVariable { name } => {
                write!(f, "unknown variable '{}'", name)
            }
            EquationError::DegreeTooHigh { degree, max } => {
                write!(f, "term of degree {} exceeds the maximum of {}", degree, max)
            }
            EquationError::NotQuadratic => {
                write!(f, "coefficient of the squared term is zero")
            }
        }
    }
}

/// A single collected term: coefficient * variable^degree.
/// Constant terms have no variable and degree 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub variable: Option<String>,
    pub degree: usize,
}

/// Linear equation reduced to coefficient*x + constant = 0
#[derive(Debug, Clone, PartialEq)]
pub struct LinearEquation {
    pub coefficient: f64,
    pub constant: f64,
}

/// Quadratic equation reduced to a*x^2 + b*x + c = 0, with a != 0
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// One row of a 2x2 system: a*x + b*y = c
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPair {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Scan a token slice into a list of signed terms
pub fn scan_terms(tokens: &[Token]) -> Result<Vec<Term>, EquationError> {
    let mut terms = Vec::new();
    let mut i = 0;

    if tokens.is_empty() {
        return Err(EquationError::EmptySide);
    }

    while i < tokens.len() {
        // Sign run: any number of leading +/- multiply together
        let mut sign = 1.0;
        while let Some(tok) = tokens.get(i) {
            match tok {
                Token::Plus => i += 1,
                Token::Minus => {
                    sign = -sign;
                    i += 1;
                }
                _ => break,
            }
        }

        // Coefficient, variable, or both
        let mut coefficient = None;
        match tokens.get(i) {
            Some(Token::Int(n)) => {
                coefficient = Some(*n as f64);
                i += 1;
                // Optional explicit multiply between coefficient and variable
                if matches!(tokens.get(i), Some(Token::Star)) {
                    i += 1;
                }
            }
            Some(Token::Float(text)) => {
                // The lexer's float regex guarantees this parses
                coefficient = Some(text.parse().unwrap_or(0.0));
                i += 1;
                if matches!(tokens.get(i), Some(Token::Star)) {
                    i += 1;
                }
            }
            _ => {}
        }

        let mut variable = None;
        let mut degree = 0;
        if let Some(Token::Identifier(name)) = tokens.get(i) {
            variable = Some(name.clone());
            degree = 1;
            i += 1;

            if matches!(tokens.get(i), Some(Token::Caret)) {
                i += 1;
                match tokens.get(i) {
                    Some(Token::Int(exp)) => {
                        degree = *exp as usize;
                        i += 1;
                    }
                    Some(other) => {
                        return Err(EquationError::UnexpectedToken {
                            token: other.to_string(),
                        });
                    }
                    None => {
                        return Err(EquationError::UnexpectedToken {
                            token: "end of input".to_string(),
                        });
                    }
                }
            }
        }

        if coefficient.is_none() && variable.is_none() {
            let token = tokens
                .get(i)
                .map(|t| t.to_string())
                .unwrap_or_else(|| "end of input".to_string());
            return Err(EquationError::UnexpectedToken { token });
        }

        terms.push(Term {
            coefficient: sign * coefficient.unwrap_or(1.0),
            variable,
            degree,
        });

        // Between terms only +/- may appear; the sign loop consumes them
        match tokens.get(i) {
            None | Some(Token::Plus) | Some(Token::Minus) => {}
            Some(other) => {
                return Err(EquationError::UnexpectedToken {
                    token: other.to_string(),
                });
            }
        }
    }

    Ok(terms)
}

/// Split a token stream at its single '='
fn split_equation(tokens: &[Token]) -> Result<(&[Token], &[Token]), EquationError> {
    let mut split = None;
    for (i, tok) in tokens.iter().enumerate() {
        if *tok == Token::Eq {
            if split.is_some() {
                return Err(EquationError::MultipleEquals);
            }
            split = Some(i);
        }
    }

    let i = split.ok_or(EquationError::MissingEquals)?;
    let (lhs, rhs) = tokens.split_at(i);
    let rhs = &rhs[1..];
    if lhs.is_empty() || rhs.is_empty() {
        return Err(EquationError::EmptySide);
    }
    Ok((lhs, rhs))
}

/// Collect terms of a single variable into coefficients indexed by degree.
/// `negate` flips signs, used to fold right-hand sides across the '='.
fn collect_univariate(
    tokens: &[Token],
    variable: &str,
    max_degree: usize,
    negate: bool,
    coeffs: &mut [f64],
) -> Result<(), EquationError> {
    for term in scan_terms(tokens)? {
        if let Some(name) = &term.variable {
            if name != variable {
                return Err(EquationError::UnknownVariable { name: name.clone() });
            }
        }
        if term.degree > max_degree {
            return Err(EquationError::DegreeTooHigh {
                degree: term.degree,
                max: max_degree,
            });
        }
        let sign = if negate { -1.0 } else { 1.0 };
        coeffs[term.degree] += sign * term.coefficient;
    }
    Ok(())
}

fn lex(source: &str) -> Result<Vec<Token>, EquationError> {
    lexer::lex_strict(source)
        .map_err(|span| EquationError::InvalidCharacter { position: span.start })
}

/// Parse "ax + b = c" style text into coefficient*x + constant = 0 form
pub fn parse_linear(source: &str, variable: &str) -> Result<LinearEquation, EquationError> {
    let tokens = lex(source)?;
    let (lhs, rhs) = split_equation(&tokens)?;

    let mut coeffs = [0.0; 2];
    collect_univariate(lhs, variable, 1, false, &mut coeffs)?;
    collect_univariate(rhs, variable, 1, true, &mut coeffs)?;

    Ok(LinearEquation {
        coefficient: coeffs[1],
        constant: coeffs[0],
    })
}

/// Parse "ax^2 + bx + c = 0" style text into (a, b, c), requiring a != 0
pub fn parse_quadratic(source: &str, variable: &str) -> Result<QuadraticEquation, EquationError> {
    let tokens = lex(source)?;
    let (lhs, rhs) = split_equation(&tokens)?;

    let mut coeffs = [0.0; 3];
    collect_univariate(lhs, variable, 2, false, &mut coeffs)?;
    collect_univariate(rhs, variable, 2, true, &mut coeffs)?;

    if coeffs[2] == 0.0 {
        return Err(EquationError::NotQuadratic);
    }

    Ok(QuadraticEquation {
        a: coeffs[2],
        b: coeffs[1],
        c: coeffs[0],
    })
}

/// Parse one "ax + by = c" row of a 2x2 linear system
pub fn parse_linear_pair(
    source: &str,
    x: &str,
    y: &str,
) -> Result<LinearPair, EquationError> {
    let tokens = lex(source)?;
    let (lhs, rhs) = split_equation(&tokens)?;

    let mut a = 0.0;
    let mut b = 0.0;
    let mut c = 0.0;

    for (side, negate) in [(lhs, false), (rhs, true)] {
        for term in scan_terms(side)? {
            if term.degree > 1 {
                return Err(EquationError::DegreeTooHigh {
                    degree: term.degree,
                    max: 1,
                });
            }
            let sign = if negate { -1.0 } else { 1.0 };
            match term.variable.as_deref() {
                _ if term.degree == 0 => c -= sign * term.coefficient,
                Some(name) if name == x => a += sign * term.coefficient,
                Some(name) if name == y => b += sign * term.coefficient,
                Some(name) => {
                    return Err(EquationError::UnknownVariable {
                        name: name.to_string(),
                    });
                }
                None => c -= sign * term.coefficient,
            }
        }
    }

    Ok(LinearPair { a, b, c })
}
