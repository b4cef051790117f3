//! # pushkin
//!
//! pushkin is a tiny scripting language written in Rust. Programs declare
//! numeric variables with `new`, reassign them, combine them with `+` and `-`
//! and `print` the results.
//!
//! The pipeline has three strictly sequential stages: [`tokenize`] turns
//! source text into tokens, [`parse`] builds a [`Program`] from them and
//! [`run`] executes it against a fresh variable environment, sending printed
//! lines to an [`Output`] sink. [`execute`] chains all three.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

pub use crate::{
    ast::Program,
    error::{LexError, ParseError, RuntimeError},
    interpreter::{
        evaluator::output::{Output, Stdout},
        lexer::{Token, TokenKind, tokenize},
    },
};
use crate::interpreter::{evaluator::core::Context, parser::core::parse_program};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The tree is
/// built by the parser and walked once by the evaluator.
pub mod ast;
/// Provides the error types of every pipeline stage.
///
/// One error type per stage: `LexError` for characters that start no token,
/// `ParseError` for unexpected or mismatched tokens and `RuntimeError` for
/// redeclared or undeclared variables. Every stage stops at its first error.
pub mod error;
/// Lexer, parser and evaluator.
///
/// This module holds the three pipeline stages and the types that flow
/// between them.
pub mod interpreter;
/// Helpers for converting number literals and formatting printed values.
pub mod util;

/// Parses a token sequence into a [`Program`].
///
/// The sequence should end with the end-of-input token that [`tokenize`]
/// appends.
///
/// # Examples
/// ```
/// use pushkin::{ast::Statement, parse, tokenize};
///
/// let tokens = tokenize("new x = 1;\nprint(x);").unwrap();
/// let program = parse(&tokens).unwrap();
/// assert_eq!(program.body.len(), 2);
/// assert!(matches!(program.body[1], Statement::Print { .. }));
///
/// let tokens = tokenize("new x = 10").unwrap();
/// let err = parse(&tokens).unwrap_err();
/// assert!(err.to_string().starts_with("Expected Semicolon"));
/// ```
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    parse_program(&mut tokens.iter().peekable())
}

/// Executes a program against a fresh, empty variable environment.
///
/// Statements run in source order and every `print` sends one line to
/// `output`. The first runtime error stops execution; lines already emitted
/// are not taken back.
///
/// # Examples
/// ```
/// use pushkin::{parse, run, tokenize};
///
/// let program = parse(&tokenize("new a = 10;\nprint(a - 25);").unwrap()).unwrap();
/// let mut lines: Vec<String> = Vec::new();
/// run(&program, &mut lines).unwrap();
/// assert_eq!(lines, ["-15"]);
/// ```
pub fn run(program: &Program, output: &mut dyn Output) -> Result<(), RuntimeError> {
    Context::new(output).run(program)
}

/// Tokenizes, parses and runs a source string.
///
/// This is the entry point used by the command line tool. It returns the
/// first error raised by any stage.
///
/// # Errors
/// Returns a [`LexError`], [`ParseError`] or [`RuntimeError`], boxed.
///
/// # Examples
/// ```
/// use pushkin::execute;
///
/// let mut lines: Vec<String> = Vec::new();
/// execute("new x = 10;\nx = x + 5;\nprint(x);", &mut lines).unwrap();
/// assert_eq!(lines, ["15"]);
///
/// // Example with an intentional error (redeclaration).
/// let err = execute("new x = 1;\nnew x = 2;", &mut lines).unwrap_err();
/// assert_eq!(err.to_string(), "Variable 'x' is already declared");
/// ```
pub fn execute(source: &str, output: &mut dyn Output) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    debug!(statements = program.body.len(), "executing source");
    run(&program, output)?;

    Ok(())
}
