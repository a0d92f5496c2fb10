//! SEARCH command.
//!
//! Wraps [`Criteria`] with the parts of a SEARCH request that aren't search
//! keys: the `UID` prefix and the optional `CHARSET` specification.

use crate::atom::Atom;
use crate::config::ParserConfig;
use crate::criteria::Criteria;
use crate::wire::{read_atoms_with, write_atoms};
use crate::{Error, Result};

/// A SEARCH or UID SEARCH request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCommand {
    /// Charset of string arguments, e.g. `UTF-8`.
    pub charset: Option<String>,
    /// Search criteria.
    pub criteria: Criteria,
    /// Use UIDs (UID SEARCH).
    pub uid: bool,
}

impl SearchCommand {
    /// Creates a SEARCH command for the given criteria.
    #[must_use]
    pub fn new(criteria: Criteria) -> Self {
        Self {
            criteria,
            ..Self::default()
        }
    }

    /// Sets the charset.
    #[must_use]
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Makes this a UID SEARCH.
    #[must_use]
    pub const fn uid(mut self) -> Self {
        self.uid = true;
        self
    }

    /// Builds the command from its argument atoms.
    ///
    /// A leading `CHARSET <name>` is split off before the criteria are parsed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`] or [`Error::TypeMismatch`] for a
    /// malformed charset, otherwise any criteria parse error.
    pub fn from_atoms(atoms: &[Atom], config: &ParserConfig) -> Result<Self> {
        let (charset, rest) = match atoms {
            [first, rest @ ..] if first.is_keyword("CHARSET") => match rest {
                [Atom::Text(name), rest @ ..] => (Some(name.clone()), rest),
                [other, ..] => {
                    return Err(Error::TypeMismatch {
                        expected: "text",
                        found: other.kind(),
                    });
                }
                [] => return Err(Error::MissingArgument("CHARSET")),
            },
            _ => (None, atoms),
        };

        Ok(Self {
            charset,
            criteria: Criteria::parse_with(rest, config)?,
            uid: false,
        })
    }

    /// Parses a command line without its tag, e.g. `UID SEARCH UNSEEN\r\n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] if the line doesn't start with `SEARCH` or
    /// `UID SEARCH`, [`Error::NestingTooDeep`] if parentheses nest deeper
    /// than `config.max_depth`, otherwise any wire or criteria error.
    pub fn parse_line(line: &[u8], config: &ParserConfig) -> Result<Self> {
        let atoms = read_atoms_with(line, config)?;

        let (uid, rest) = match atoms.as_slice() {
            [uid, search, rest @ ..] if uid.is_keyword("UID") && search.is_keyword("SEARCH") => {
                (true, rest)
            }
            [search, rest @ ..] if search.is_keyword("SEARCH") => (false, rest),
            _ => {
                return Err(Error::Syntax {
                    position: 0,
                    message: "Expected SEARCH command".to_string(),
                });
            }
        };

        let mut command = Self::from_atoms(rest, config)?;
        command.uid = uid;
        Ok(command)
    }

    /// Returns the argument atoms: charset (if any) followed by criteria.
    #[must_use]
    pub fn to_atoms(&self) -> Vec<Atom> {
        let mut atoms = Vec::new();
        if let Some(charset) = &self.charset {
            atoms.push(Atom::text("CHARSET"));
            atoms.push(Atom::text(charset.as_str()));
        }
        atoms.extend(self.criteria.format());
        atoms
    }

    /// Serializes the command to bytes with the given tag.
    #[must_use]
    pub fn serialize(&self, tag: &str) -> Vec<u8> {
        let mut buf = Vec::new();

        buf.extend_from_slice(tag.as_bytes());
        buf.push(b' ');
        if self.uid {
            buf.extend_from_slice(b"UID ");
        }
        buf.extend_from_slice(b"SEARCH ");
        write_atoms(&mut buf, &self.to_atoms());
        buf.extend_from_slice(b"\r\n");

        buf
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::SequenceSet;

    #[test]
    fn serialize_all() {
        let cmd = SearchCommand::new(Criteria::all());
        assert_eq!(cmd.serialize("A001"), b"A001 SEARCH ALL\r\n");
    }

    #[test]
    fn serialize_uid_with_charset() {
        let criteria = Criteria {
            subject: "café".to_string(),
            unseen: true,
            ..Criteria::default()
        };
        let cmd = SearchCommand::new(criteria).charset("UTF-8").uid();
        assert_eq!(
            cmd.serialize("A002"),
            b"A002 UID SEARCH CHARSET UTF-8 SUBJECT {5}\r\ncaf\xc3\xa9 UNSEEN\r\n"
        );
    }

    #[test]
    fn parse_line_plain() {
        let cmd = SearchCommand::parse_line(b"search 1:5 deleted\r\n", &ParserConfig::default())
            .unwrap();
        assert!(!cmd.uid);
        assert!(cmd.charset.is_none());
        assert!(cmd.criteria.deleted);
        assert_eq!(cmd.criteria.seq_set, SequenceSet::range(1, 5));
    }

    #[test]
    fn parse_line_uid_charset() {
        let cmd = SearchCommand::parse_line(
            b"UID SEARCH CHARSET UTF-8 TEXT \"hello world\"",
            &ParserConfig::default(),
        )
        .unwrap();
        assert!(cmd.uid);
        assert_eq!(cmd.charset.as_deref(), Some("UTF-8"));
        assert_eq!(cmd.criteria.text, "hello world");
    }

    #[test]
    fn parse_line_rejects_other_commands() {
        assert!(matches!(
            SearchCommand::parse_line(b"FETCH 1 FLAGS", &ParserConfig::default()),
            Err(Error::Syntax { .. })
        ));
    }

    #[test]
    fn parse_line_bounds_nesting_while_reading() {
        let mut line = b"SEARCH ".to_vec();
        line.extend(std::iter::repeat_n(b'(', 100_000));
        assert_eq!(
            SearchCommand::parse_line(&line, &ParserConfig::default()),
            Err(Error::NestingTooDeep(crate::DEFAULT_MAX_DEPTH))
        );

        let config = ParserConfig::builder().max_depth(2).build();
        assert!(SearchCommand::parse_line(b"SEARCH NOT (NOT (SEEN))", &config).is_ok());
        assert_eq!(
            SearchCommand::parse_line(b"SEARCH NOT (NOT ((SEEN)))", &config),
            Err(Error::NestingTooDeep(2))
        );
    }

    #[test]
    fn charset_without_name() {
        assert_eq!(
            SearchCommand::from_atoms(&[Atom::text("CHARSET")], &ParserConfig::default()),
            Err(Error::MissingArgument("CHARSET"))
        );
    }

    #[test]
    fn serialized_command_parses_back() {
        let criteria = Criteria {
            from: "Jane Doe".to_string(),
            larger: 5000,
            ..Criteria::either(
                Criteria {
                    seen: true,
                    ..Criteria::default()
                },
                Criteria::all(),
            )
        };
        let cmd = SearchCommand::new(criteria).uid();

        let bytes = cmd.serialize("T1");
        let line = bytes.strip_prefix(b"T1 ".as_slice()).unwrap();
        assert_eq!(
            SearchCommand::parse_line(line, &ParserConfig::default()).unwrap(),
            cmd
        );
    }
}
