use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// Statements are parsed one after another until the end-of-input token is
/// reached. The first error aborts the parse.
///
/// Grammar: `program := statement* EndOfInput`
///
/// # Parameters
/// - `tokens`: Token iterator, normally the full output of the lexer.
///
/// # Returns
/// The [`Program`] root node.
///
/// # Errors
/// - Any error raised while parsing a statement.
/// - `UnexpectedEndOfInput` if the iterator runs dry before an end-of-input
///   token.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a Token>
{
    let mut body = Vec::new();

    loop {
        match tokens.peek().map(|token| token.kind) {
            Some(TokenKind::EndOfInput) => break,
            Some(_) => body.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }

    debug!(statements = body.len(), "parsed program");
    Ok(Program { body })
}

/// Parses a full expression.
///
/// There is a single precedence level, so this forwards to
/// [`parse_additive`].
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens)
}
