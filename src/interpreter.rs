/// The evaluator module executes the syntax tree.
///
/// The evaluator walks the statements of a program in order, evaluates their
/// expressions, keeps the variable environment and emits printed lines to an
/// output sink. It is the last stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates statements and expressions.
/// - Owns the per-run variable environment.
/// - Reports runtime errors such as redeclared or undeclared variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens for
/// numbers, identifiers, keywords, operators and delimiters, ending with an
/// end-of-input token. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Skips whitespace and `//` comments.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token sequence by recursive descent with one token
/// of lookahead and builds a single `Program` node.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Validates the grammar, reporting errors with line and column.
pub mod parser;
