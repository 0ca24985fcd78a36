use crate::ast::{BinaryOp, Expr, Literal, UnaryOp};
use chumsky::prelude::*;
use lexer::token::Token;

/// Parser for a complete expression: the whole token stream must be consumed
pub fn parser() -> impl Parser<Token, Expr, Error = Simple<Token>> {
    expr_parser().then_ignore(end())
}

pub fn expr_parser() -> impl Parser<Token, Expr, Error = Simple<Token>> {
    recursive(|expr| {
        let val = select! {
            Token::Int(n) => Expr::Literal(Literal::Int(n)),
            Token::Float(s) => Expr::Literal(Literal::Float(s.parse().unwrap())),
        };

        // Identifier or function call: sin(x) parses as Call, bare x as Identifier
        let call = select! { Token::Identifier(name) => name }
            .then(
                expr.clone()
                    .separated_by(just(Token::Comma))
                    .allow_trailing()
                    .delimited_by(just(Token::LParen), just(Token::RParen))
                    .or_not(),
            )
            .map(|(name, maybe_args)| match maybe_args {
                Some(args) => Expr::Call { name, args },
                None => Expr::Identifier(name),
            })
            .boxed();

        let grouped = expr
            .clone()
            .delimited_by(just(Token::LParen), just(Token::RParen))
            .boxed();

        let atom = val.or(call.clone()).or(grouped.clone()).boxed();

        // Unary minus binds tighter than '^': -2^2 is (-2)^2
        let signed_atom = just(Token::Minus)
            .to(UnaryOp::Negate)
            .repeated()
            .then(atom)
            .foldr(|op, expr| Expr::Unary {
                op,
                expr: Box::new(expr),
            })
            .boxed();

        // Exponentiation is right-associative: 2^3^2 is 2^(3^2)
        let power = recursive(|power| {
            signed_atom
                .then(just(Token::Caret).ignore_then(power).or_not())
                .map(|(base, exponent)| match exponent {
                    Some(exponent) => Expr::Binary {
                        op: BinaryOp::Pow,
                        lhs: Box::new(base),
                        rhs: Box::new(exponent),
                    },
                    None => base,
                })
        })
        .boxed();

        // Implicit multiplication: 2x, 3(x+1), 2sin(x), (x+1)(x-1).
        // A call or parenthesized group juxtaposed after a factor multiplies,
        // at product precedence, so 2x^2 reads as 2*(x^2).
        let juxtaposed_factor = call
            .or(grouped)
            .then(just(Token::Caret).ignore_then(power.clone()).or_not())
            .map(|(base, exponent)| match exponent {
                Some(exponent) => Expr::Binary {
                    op: BinaryOp::Pow,
                    lhs: Box::new(base),
                    rhs: Box::new(exponent),
                },
                None => base,
            })
            .boxed();

        let factor = power
            .then(juxtaposed_factor.repeated())
            .foldl(|lhs, rhs| Expr::Binary {
                op: BinaryOp::Mul,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            })
            .boxed();

        let product = factor
            .clone()
            .then(
                just(Token::Star)
                    .to(BinaryOp::Mul)
                    .or(just(Token::Slash).to(BinaryOp::Div))
                    .or(just(Token::Percent).to(BinaryOp::Mod))
                    .then(factor)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            })
            .boxed();

        let sum = product
            .clone()
            .then(
                just(Token::Plus)
                    .to(BinaryOp::Add)
                    .or(just(Token::Minus).to(BinaryOp::Sub))
                    .then(product)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            })
            .boxed();

        sum
    })
}
