/// Lexing errors.
///
/// Raised by the scanner when it meets a character that cannot start any
/// token. Carries the character and its position.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning the token stream into
/// a syntax tree: unexpected tokens, mismatched expectations and a token
/// stream that stops short of its end marker.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while executing a program. The syntax tree does
/// not keep source positions, so these errors only name the variable involved.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
