use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative binary operators `+` and `-`, so
/// `1 + 2 - 3` parses as `(1 + 2) - 3`.
///
/// The rule is: `additive := primary (("+" | "-") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first operand.
///
/// # Returns
/// A single operand, or an `Expr::Binary` tree folding all operands.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_primary(tokens)?;

    while let Some(op) = tokens.peek().and_then(|token| token_to_binary_operator(token.kind)) {
        tokens.next();
        let right = parse_primary(tokens)?;
        left = Expr::binary(op, left, right);
    }

    Ok(left)
}

/// Maps a token kind to the binary operator it spells, if any.
const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        _ => None,
    }
}
