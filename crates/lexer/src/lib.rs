pub mod token;

use logos::Logos;
use std::ops::Range;
use token::Token;

/// Tokenize a source string and return a Vec of tokens
pub fn lex(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|t| t.ok())
        .collect()
}

/// Tokenize a source string, rejecting any character the lexer cannot match.
/// Returns the byte range of the first invalid character on failure.
pub fn lex_strict(source: &str) -> Result<Vec<Token>, Range<usize>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => return Err(lexer.span()),
        }
    }

    Ok(tokens)
}

/// Tokenize a source string keeping byte spans, for span-aware parsing
/// and error reports. Rejects invalid characters like [`lex_strict`].
pub fn lex_spanned(source: &str) -> Result<Vec<(Token, Range<usize>)>, Range<usize>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => return Err(lexer.span()),
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests;
