// Error reporting with Ariadne
//
// This module renders chumsky parse errors as Ariadne reports.

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::error::Simple;
use lexer::token::Token;

/// Type alias for Chumsky parser errors
pub type ParseError = Simple<Token>;

/// Converts Chumsky errors to Ariadne reports on stderr
pub fn report_errors(filename: &str, source: &str, errors: Vec<ParseError>) {
    for error in errors {
        let span = error.span();
        let msg = format!("{}", error);

        let report = Report::build(ReportKind::Error, filename, span.start)
            .with_code("E001")
            .with_message("Parse Error")
            .with_label(
                Label::new((filename, span))
                    .with_message(msg)
                    .with_color(Color::Red),
            );

        // Add expected tokens if available (limit to 5 to avoid overwhelming output)
        let report = if error.expected().len() > 0 {
            let expected: Vec<String> = error
                .expected()
                .take(5)
                .map(format_expected)
                .collect();

            let help_msg = if error.expected().len() > 5 {
                format!("Expected one of: {}, ...", expected.join(", "))
            } else {
                format!("Expected: {}", expected.join(", "))
            };

            report.with_help(help_msg)
        } else {
            report
        };

        report
            .finish()
            .eprint((filename, Source::from(source)))
            .unwrap();
    }
}

/// Format expected token for human-readable output
fn format_expected(token: &Option<Token>) -> String {
    match token {
        Some(Token::Plus) => "'+'".to_string(),
        Some(Token::Minus) => "'-'".to_string(),
        Some(Token::Star) => "'*'".to_string(),
        Some(Token::Slash) => "'/'".to_string(),
        Some(Token::Percent) => "'%'".to_string(),
        Some(Token::Caret) => "'^'".to_string(),
        Some(Token::Eq) => "'='".to_string(),
        Some(Token::LParen) => "'('".to_string(),
        Some(Token::RParen) => "')'".to_string(),
        Some(Token::Comma) => "','".to_string(),
        Some(Token::Semicolon) => "';'".to_string(),
        Some(Token::Identifier(_)) => "identifier".to_string(),
        Some(Token::Int(_)) => "integer".to_string(),
        Some(Token::Float(_)) => "float".to_string(),
        None => "end of input".to_string(),
    }
}
