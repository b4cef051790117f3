use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that cannot start the construct being parsed.
    UnexpectedToken {
        /// The text of the token encountered.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A specific kind of token was required but another one was found.
    ExpectedToken {
        /// The kind of token the grammar required.
        expected: TokenKind,
        /// The text of the token encountered instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// The token stream ended without an end-of-input token.
    UnexpectedEndOfInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line, column } => {
                write!(f, "Unexpected token '{token}' at line {line}, column {column}")
            },
            Self::ExpectedToken { expected,
                                  found,
                                  line,
                                  column, } => write!(f,
                                                      "Expected {expected} but got '{found}' at line {line}, column {column}"),
            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input"),
        }
    }
}

impl std::error::Error for ParseError {}
