use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// The statement form is chosen by the current token:
/// - `new` starts a variable declaration,
/// - `print` starts a print statement,
/// - an identifier starts an assignment.
///
/// Any other token is reported as unexpected.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek().copied() {
        Some(token) => match token.kind {
            TokenKind::New => parse_variable_declaration(tokens),
            TokenKind::Print => parse_print(tokens),
            TokenKind::Identifier => parse_assignment(tokens),
            _ => Err(unexpected(token)),
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses `new <identifier> = <expression> ;`.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::New)?;
    let name = parse_identifier(tokens)?;
    expect(tokens, TokenKind::Equals)?;
    let value = parse_expression(tokens)?;
    expect(tokens, TokenKind::Semicolon)?;

    Ok(Statement::VariableDeclaration { name, value })
}

/// Parses `<identifier> = <expression> ;`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let name = parse_identifier(tokens)?;
    expect(tokens, TokenKind::Equals)?;
    let value = parse_expression(tokens)?;
    expect(tokens, TokenKind::Semicolon)?;

    Ok(Statement::Assignment { name, value })
}

/// Parses `print ( <expression> ) ;`.
///
/// The parentheses belong to the statement syntax; they are not a grouping
/// operator inside expressions.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Print)?;
    expect(tokens, TokenKind::LParen)?;
    let value = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen)?;
    expect(tokens, TokenKind::Semicolon)?;

    Ok(Statement::Print { value })
}
