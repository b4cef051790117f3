/// Core parsing entry points.
///
/// Holds the program loop and the expression entry point that the other
/// parser modules call back into.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the first token of a statement and parses declarations,
/// assignments and `print` statements.
pub mod statement;

/// Binary expression parsing.
///
/// Folds chains of `+` and `-` into a left-deepening tree.
pub mod binary;

/// Primary expression parsing: number literals and identifiers.
pub mod primary;

/// Shared helpers for consuming expected tokens.
pub mod utils;
