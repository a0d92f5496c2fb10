//! Wire codec for SEARCH arguments.
//!
//! [`read_atoms`] turns the raw argument bytes of a SEARCH command into the
//! [`Atom`] list the criteria parser consumes, and [`write_atoms`] performs
//! the inverse for outgoing commands.
//!
//! ```
//! use mailledger_search::{Criteria, wire};
//!
//! let atoms = wire::read_atoms(b"OR (FROM \"Jane Doe\") (SEEN) 1:*").unwrap();
//! let criteria = Criteria::parse(&atoms).unwrap();
//! assert!(criteria.seq_set.is_some());
//!
//! let mut buf = Vec::new();
//! wire::write_atoms(&mut buf, &criteria.format());
//! assert_eq!(buf, b"1:* OR (FROM \"Jane Doe\") (SEEN)");
//! ```

mod lexer;
mod token;

pub use lexer::{Lexer, is_atom_char};
pub use token::Token;

use crate::atom::Atom;
use crate::config::ParserConfig;
use crate::types::SequenceSet;
use crate::{Error, Result};

/// Reads a space-separated argument list into atoms.
///
/// Parenthesized groups become [`Atom::List`]; atoms, quoted strings and
/// literals all become [`Atom::Text`]. A trailing CRLF ends the input.
/// Nesting is limited to [`DEFAULT_MAX_DEPTH`](crate::DEFAULT_MAX_DEPTH) levels.
///
/// # Errors
///
/// Returns [`Error::Syntax`] on malformed tokens or unbalanced parentheses,
/// and [`Error::NestingTooDeep`] if groups nest too deeply.
pub fn read_atoms(input: &[u8]) -> Result<Vec<Atom>> {
    read_atoms_with(input, &ParserConfig::default())
}

/// Reads a space-separated argument list into atoms, with nesting limited
/// to `config.max_depth` levels.
///
/// The limit counts parentheses the same way the criteria parser counts
/// NOT/OR operands and groups, so anything read here is within reach of
/// [`Criteria::parse_with`](crate::Criteria::parse_with) with the same config.
///
/// # Errors
///
/// Returns [`Error::Syntax`] on malformed tokens or unbalanced parentheses,
/// and [`Error::NestingTooDeep`] if groups nest deeper than `config.max_depth`.
pub fn read_atoms_with(input: &[u8], config: &ParserConfig) -> Result<Vec<Atom>> {
    let mut lexer = Lexer::new(input);
    // Innermost open list is last; the bottom entry is the top level
    let mut stack: Vec<Vec<Atom>> = vec![Vec::new()];

    loop {
        let position = lexer.position();
        let atom = match lexer.next_token()? {
            Token::Space => continue,
            Token::Crlf | Token::Eof => break,
            Token::LParen => {
                if stack.len() > config.max_depth {
                    tracing::debug!(position, max_depth = config.max_depth, "Nesting too deep");
                    return Err(Error::NestingTooDeep(config.max_depth));
                }
                stack.push(Vec::new());
                continue;
            }
            Token::RParen => {
                if stack.len() < 2 {
                    return Err(syntax(position, "Unexpected )"));
                }
                let items = stack.pop().unwrap_or_default();
                Atom::List(items)
            }
            Token::Atom(s) => Atom::text(s),
            Token::QuotedString(s) => Atom::Text(s),
            Token::Literal(data) => Atom::Text(
                String::from_utf8(data).map_err(|_| syntax(position, "Invalid UTF-8 in literal"))?,
            ),
        };
        if let Some(current) = stack.last_mut() {
            current.push(atom);
        }
    }

    if lexer.peek().is_some() {
        return Err(syntax(lexer.position(), "Trailing data after CRLF"));
    }
    if stack.len() != 1 {
        return Err(syntax(lexer.position(), "Unclosed ("));
    }

    Ok(stack.pop().unwrap_or_default())
}

fn syntax(position: usize, message: &str) -> Error {
    Error::Syntax {
        position,
        message: message.to_string(),
    }
}

/// Writes atoms space-separated, lists in parentheses.
pub fn write_atoms(buf: &mut Vec<u8>, atoms: &[Atom]) {
    for (i, atom) in atoms.iter().enumerate() {
        if i > 0 {
            buf.push(b' ');
        }
        write_atom(buf, atom);
    }
}

/// Writes a single atom.
pub fn write_atom(buf: &mut Vec<u8>, atom: &Atom) {
    match atom {
        Atom::Text(s) => write_text(buf, s),
        Atom::Number(n) => buf.extend_from_slice(n.to_string().as_bytes()),
        Atom::List(items) => {
            buf.push(b'(');
            write_atoms(buf, items);
            buf.push(b')');
        }
    }
}

/// Writes text as an atom, quoted string or literal.
///
/// Text is written bare only if every byte is an atom character. `*` is
/// quoted too unless the text is a sequence set. Text with line breaks or
/// non-ASCII bytes becomes a literal.
pub fn write_text(buf: &mut Vec<u8>, s: &str) {
    if s.bytes().any(needs_literal) {
        buf.extend_from_slice(format!("{{{}}}\r\n", s.len()).as_bytes());
        buf.extend_from_slice(s.as_bytes());
    } else if s.is_empty()
        || s.bytes().any(needs_quoting)
        || (s.contains('*') && SequenceSet::parse(s).is_err())
    {
        buf.push(b'"');
        for b in s.bytes() {
            if b == b'"' || b == b'\\' {
                buf.push(b'\\');
            }
            buf.push(b);
        }
        buf.push(b'"');
    } else {
        buf.extend_from_slice(s.as_bytes());
    }
}

/// Returns true if the byte can't appear in an atom.
const fn needs_quoting(b: u8) -> bool {
    !is_atom_char(b)
}

/// Returns true if the byte can't appear in a quoted string.
const fn needs_literal(b: u8) -> bool {
    b < 0x20 || b >= 0x7F
}
