use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Consumes the next token if it has the expected kind.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `kind`: The kind the grammar requires at this position.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// - `ExpectedToken` naming `kind` and the token actually found.
/// - `UnexpectedEndOfInput` if the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next_if(|token| token.kind == kind) {
        Some(token) => Ok(token),
        None => match tokens.peek() {
            Some(token) => Err(ParseError::ExpectedToken { expected: kind,
                                                           found:    token.text.clone(),
                                                           line:     token.line,
                                                           column:   token.column, }),
            None => Err(ParseError::UnexpectedEndOfInput),
        },
    }
}

/// Consumes an identifier and returns its name.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Identifier).map(|token| token.text.clone())
}

/// Builds the error for a token that cannot appear at its position.
pub(in crate::interpreter::parser) fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken { token:  token.text.clone(),
                                  line:   token.line,
                                  column: token.column, }
}
