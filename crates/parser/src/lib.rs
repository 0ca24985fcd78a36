pub mod ast;
pub mod equation;
pub mod error;
pub mod parser;
pub mod polynomial;

use chumsky::error::Simple;
use chumsky::{Parser, Stream};
use lexer::token::Token;

/// Lex and parse a complete expression, keeping byte spans so parse
/// errors report against the original text.
pub fn parse_expression(source: &str) -> Result<ast::Expr, Vec<Simple<Token>>> {
    let tokens = match lexer::lex_spanned(source) {
        Ok(tokens) => tokens,
        Err(span) => {
            return Err(vec![Simple::custom(span, "invalid character")]);
        }
    };

    let end = source.len();
    parser::parser().parse(Stream::from_iter(end..end, tokens.into_iter()))
}

#[cfg(test)]
mod tests;
