use std::fmt;

use logos::Logos;
use tracing::debug;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// This is the closed set of token classes the parser dispatches on. The
/// `Display` form is the name used in "Expected ..." parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of decimal digits, such as `42`.
    Number,
    /// A variable name, such as `x` or `total_2`.
    Identifier,
    /// `new`
    New,
    /// `print`
    Print,
    /// `=`
    Equals,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Marks the end of the token stream.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "Number",
            Self::Identifier => "Identifier",
            Self::New => "New",
            Self::Print => "Print",
            Self::Equals => "Equals",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Semicolon => "Semicolon",
            Self::LParen => "LParen",
            Self::RParen => "RParen",
            Self::EndOfInput => "EndOfInput",
        };
        f.write_str(name)
    }
}

/// A classified, positioned lexical unit.
///
/// `line` and `column` are 1-based and point at the first character of the
/// token. The end-of-input token has empty `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token class.
    pub kind:   TokenKind,
    /// The exact source text of the token.
    pub text:   String,
    /// The source line of the token's first character.
    pub line:   usize,
    /// The source column of the token's first character.
    pub column: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind,
               text: text.into(),
               line,
               column }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts, so token
/// columns can be derived from the span of each lexeme.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// Raw lexemes recognised by logos, including the trivia that is skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum Lexeme {
    #[regex(r"[0-9]+")]
    Number,
    #[token("new")]
    New,
    #[token("print")]
    Print,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    #[token("=")]
    Equals,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    #[token("\n", |lex| {
        lex.extras.line      += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

impl Lexeme {
    /// Maps a lexeme to its token kind. Trivia has none; logos never yields it
    /// because every trivia pattern skips.
    const fn kind(self) -> Option<TokenKind> {
        match self {
            Self::Number => Some(TokenKind::Number),
            Self::New => Some(TokenKind::New),
            Self::Print => Some(TokenKind::Print),
            Self::Identifier => Some(TokenKind::Identifier),
            Self::Equals => Some(TokenKind::Equals),
            Self::Plus => Some(TokenKind::Plus),
            Self::Minus => Some(TokenKind::Minus),
            Self::Semicolon => Some(TokenKind::Semicolon),
            Self::LParen => Some(TokenKind::LParen),
            Self::RParen => Some(TokenKind::RParen),
            Self::Comment | Self::NewLine | Self::Ignored => None,
        }
    }
}

/// Scans source text into tokens, terminated by an end-of-input token.
///
/// Whitespace, newlines and `//` comments produce no tokens. `new` and
/// `print` are keywords; any other word is an identifier.
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] for the first character that
/// cannot start a token.
///
/// # Examples
/// ```
/// use pushkin::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("new x = 1;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::New,
///             TokenKind::Identifier,
///             TokenKind::Equals,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::EndOfInput]);
///
/// assert!(tokenize("new x = 1 * 2;").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut columns = ColumnTracker::default();
    let mut lexer = Lexeme::lexer_with_extras(source,
                                              LexerExtras { line:       1,
                                                            line_start: 0, });

    while let Some(lexeme) = lexer.next() {
        let start = lexer.span().start;
        let line = lexer.extras.line;
        let column = columns.column_at(source, lexer.extras.line_start, start);

        let Ok(lexeme) = lexeme else {
            let character = source[start..].chars().next().unwrap_or('\0');
            return Err(LexError::UnexpectedCharacter { character,
                                                       line,
                                                       column });
        };

        if let Some(kind) = lexeme.kind() {
            tokens.push(Token::new(kind, lexer.slice(), line, column));
        }
    }

    let line = lexer.extras.line;
    let column = columns.column_at(source, lexer.extras.line_start, source.len());
    tokens.push(Token::new(TokenKind::EndOfInput, "", line, column));

    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Running character column of the last scanned position.
///
/// Offsets passed to [`ColumnTracker::column_at`] never decrease, so each
/// character of a line is counted once.
struct ColumnTracker {
    line_start: usize,
    offset:     usize,
    column:     usize,
}

impl Default for ColumnTracker {
    fn default() -> Self {
        Self { line_start: 0,
               offset:     0,
               column:     1, }
    }
}

impl ColumnTracker {
    /// Returns the 1-based character column of `offset` on the line that
    /// starts at `line_start`.
    fn column_at(&mut self, source: &str, line_start: usize, offset: usize) -> usize {
        if self.line_start != line_start {
            self.line_start = line_start;
            self.offset = line_start;
            self.column = 1;
        }

        self.column += source[self.offset..offset].chars().count();
        self.offset = offset;
        self.column
    }
}
