// Polynomial parsing
//
// Turns "2x^2 + 3x - 1" style text into a coefficient vector indexed by
// degree. Reuses the equation term scanner; repeated same-degree terms
// accumulate, as in "x + x" collecting to 2x.

use crate::equation::{scan_terms, EquationError, MAX_DEGREE};
use lexer::token::Token;

/// A parsed polynomial: coefficients indexed by degree, plus the variable
/// name the input used (defaults to "x" for constant polynomials).
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPolynomial {
    pub coefficients: Vec<f64>,
    pub variable: String,
}

pub fn parse_polynomial(source: &str) -> Result<ParsedPolynomial, EquationError> {
    let tokens: Vec<Token> = lexer::lex_strict(source)
        .map_err(|span| EquationError::InvalidCharacter { position: span.start })?;

    let terms = scan_terms(&tokens)?;

    let mut variable: Option<String> = None;
    let mut max_seen = 0;
    for term in &terms {
        if let Some(name) = &term.variable {
            match &variable {
                None => variable = Some(name.clone()),
                Some(seen) if seen != name => {
                    return Err(EquationError::UnknownVariable { name: name.clone() });
                }
                Some(_) => {}
            }
        }
        if term.degree > MAX_DEGREE {
            return Err(EquationError::DegreeTooHigh {
                degree: term.degree,
                max: MAX_DEGREE,
            });
        }
        max_seen = max_seen.max(term.degree);
    }

    let mut coefficients = vec![0.0; max_seen + 1];
    for term in &terms {
        coefficients[term.degree] += term.coefficient;
    }

    Ok(ParsedPolynomial {
        coefficients,
        variable: variable.unwrap_or_else(|| "x".to_string()),
    })
}
