//! SEARCH argument token types.

/// Token types produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Atom (unquoted string without special characters).
    Atom(&'a str),
    /// Quoted string.
    QuotedString(String),
    /// Literal string with size prefix {n}.
    Literal(Vec<u8>),
    /// Opening parenthesis.
    LParen,
    /// Closing parenthesis.
    RParen,
    /// Space character.
    Space,
    /// CRLF line ending.
    Crlf,
    /// End of input.
    Eof,
}
