//! Wire-level atoms.
//!
//! An [`Atom`] is one element of a SEARCH argument list: a text token, a
//! number, or a parenthesized sub-list. The criteria parser reads this
//! alphabet and the formatter writes it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One element of a SEARCH argument list.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    /// Text token (atom, quoted string or literal on the wire).
    Text(String),
    /// Numeric token.
    Number(u32),
    /// Parenthesized sub-list.
    List(Vec<Self>),
}

impl Atom {
    /// Creates a text atom.
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Returns a short name for the atom's shape, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::List(_) => "list",
        }
    }

    /// Returns the text if this is a text atom.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the sub-list if this is a list atom.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns true if this is a text atom equal to `keyword`, ignoring case.
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.as_text().is_some_and(|s| s.eq_ignore_ascii_case(keyword))
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Atom {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<u32> for Atom {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

impl From<Vec<Self>> for Atom {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::List(items) => {
                let s: Vec<_> = items.iter().map(ToString::to_string).collect();
                write!(f, "({})", s.join(" "))
            }
        }
    }
}

/// Interprets an atom as an unsigned 32-bit number.
///
/// Accepts both numeric atoms and text atoms made of ASCII digits, since
/// either may reach the parser depending on how the arguments were built.
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] for text that is not a valid `u32` and
/// [`Error::TypeMismatch`] for lists.
pub fn parse_number(atom: &Atom) -> Result<u32> {
    match atom {
        Atom::Number(n) => Ok(*n),
        Atom::Text(s) => {
            if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::InvalidNumber(s.clone()));
            }
            s.parse().map_err(|_| Error::InvalidNumber(s.clone()))
        }
        Atom::List(_) => Err(Error::TypeMismatch {
            expected: "number",
            found: atom.kind(),
        }),
    }
}
