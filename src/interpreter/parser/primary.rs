use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, utils::unexpected},
    },
    util::num::literal_to_f64,
};

/// Parses a primary expression: a number literal or an identifier.
///
/// Grammar: `primary := Number | Identifier`
///
/// # Errors
/// - `UnexpectedToken` for any other token, or for a number token whose text
///   is not a digit run.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token.kind {
        TokenKind::Number => {
            let value = literal_to_f64(&token.text).ok_or_else(|| unexpected(token))?;
            Ok(Expr::Number { value })
        },
        TokenKind::Identifier => Ok(Expr::Identifier { name: token.text.clone() }),
        _ => Err(unexpected(token)),
    }
}
