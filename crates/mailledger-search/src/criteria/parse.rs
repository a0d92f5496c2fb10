//! Atom list to criteria parser.

use chrono::NaiveDate;

use super::{Criteria, Header, SearchKey};
use crate::atom::{Atom, parse_number};
use crate::config::ParserConfig;
use crate::date::parse_search_date;
use crate::types::{SequenceSet, UidSet};
use crate::{Error, Result};

/// Bounds-checked cursor over an atom list.
struct Cursor<'a> {
    atoms: &'a [Atom],
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(atoms: &'a [Atom]) -> Self {
        Self { atoms, pos: 0 }
    }

    /// Advances by one atom and returns it.
    fn advance(&mut self) -> Option<&'a Atom> {
        let atom = self.atoms.get(self.pos)?;
        self.pos += 1;
        Some(atom)
    }

    /// Takes the next argument of `key`.
    fn argument(&mut self, key: SearchKey) -> Result<&'a Atom> {
        self.advance().ok_or(Error::MissingArgument(key.as_str()))
    }

    /// Takes the next argument of `key` as text.
    fn text(&mut self, key: SearchKey) -> Result<&'a str> {
        match self.argument(key)? {
            Atom::Text(s) => Ok(s),
            other => Err(mismatch("text", other)),
        }
    }

    /// Takes the next argument of `key` as a nested list.
    fn list(&mut self, key: SearchKey) -> Result<&'a [Atom]> {
        match self.argument(key)? {
            Atom::List(items) => Ok(items),
            other => Err(mismatch("list", other)),
        }
    }

    /// Takes the next argument of `key` as a search date.
    fn date(&mut self, key: SearchKey) -> Result<NaiveDate> {
        parse_search_date(self.text(key)?)
    }

    /// Takes the next argument of `key` as an unsigned number.
    fn number(&mut self, key: SearchKey) -> Result<u32> {
        parse_number(self.argument(key)?)
    }

    /// Takes the next argument of `key` as sequence-set text.
    fn sequence_text(&mut self, key: SearchKey) -> Result<String> {
        sequence_text(self.argument(key)?)
    }
}

const fn mismatch(expected: &'static str, found: &Atom) -> Error {
    Error::TypeMismatch {
        expected,
        found: found.kind(),
    }
}

/// Returns the text of an atom standing for a sequence set.
fn sequence_text(atom: &Atom) -> Result<String> {
    match atom {
        Atom::Text(s) => Ok(s.clone()),
        Atom::Number(n) => Ok(n.to_string()),
        Atom::List(_) => Err(mismatch("sequence set", atom)),
    }
}

impl Criteria {
    /// Parses criteria from a SEARCH argument list with default limits.
    ///
    /// # Errors
    ///
    /// See [`Criteria::parse_with`].
    pub fn parse(atoms: &[Atom]) -> Result<Self> {
        Self::parse_with(atoms, &ParserConfig::default())
    }

    /// Parses criteria from a SEARCH argument list.
    ///
    /// Keywords are matched case-insensitively; any other token is read as a
    /// message sequence set. A key given twice keeps the last value.
    ///
    /// # Errors
    ///
    /// - [`Error::TypeMismatch`] if an argument has the wrong shape
    /// - [`Error::MissingArgument`] if a key's arguments run past the end
    /// - [`Error::InvalidSequenceSet`], [`Error::InvalidNumber`] or
    ///   [`Error::InvalidDate`] if an argument doesn't parse
    /// - [`Error::NestingTooDeep`] if NOT/OR nesting exceeds `config.max_depth`
    pub fn parse_with(atoms: &[Atom], config: &ParserConfig) -> Result<Self> {
        let mut criteria = Self::default();
        criteria
            .parse_into(atoms, config.max_depth, 0)
            .inspect_err(|e| tracing::debug!(error = %e, "Failed to parse search criteria"))?;
        Ok(criteria)
    }

    /// Parses `atoms` into a fresh criteria one level below `depth`.
    fn parse_nested(atoms: &[Atom], max_depth: usize, depth: usize) -> Result<Self> {
        let depth = depth + 1;
        if depth > max_depth {
            return Err(Error::NestingTooDeep(max_depth));
        }
        let mut criteria = Self::default();
        criteria.parse_into(atoms, max_depth, depth)?;
        Ok(criteria)
    }

    #[allow(clippy::too_many_lines)]
    fn parse_into(&mut self, atoms: &[Atom], max_depth: usize, depth: usize) -> Result<()> {
        let mut cursor = Cursor::new(atoms);

        while let Some(atom) = cursor.advance() {
            let token = match atom {
                Atom::Text(s) => s.as_str(),
                Atom::Number(_) => {
                    self.seq_set = Some(SequenceSet::parse(&sequence_text(atom)?)?);
                    continue;
                }
                // Parenthesized group: its keys are ANDed into this level
                Atom::List(items) => {
                    if depth + 1 > max_depth {
                        return Err(Error::NestingTooDeep(max_depth));
                    }
                    self.parse_into(items, max_depth, depth + 1)?;
                    continue;
                }
            };

            let Some(key) = SearchKey::parse(token) else {
                self.seq_set = Some(SequenceSet::parse(token)?);
                continue;
            };
            tracing::trace!(key = key.as_str(), depth, "search key");

            match key {
                SearchKey::All => {}
                SearchKey::Answered => self.answered = true,
                SearchKey::Deleted => self.deleted = true,
                SearchKey::Draft => self.draft = true,
                SearchKey::Flagged => self.flagged = true,
                SearchKey::New => self.new = true,
                SearchKey::Old => self.old = true,
                SearchKey::Recent => self.recent = true,
                SearchKey::Seen => self.seen = true,
                SearchKey::Unanswered => self.unanswered = true,
                SearchKey::Undeleted => self.undeleted = true,
                SearchKey::Undraft => self.undraft = true,
                SearchKey::Unflagged => self.unflagged = true,
                SearchKey::Unseen => self.unseen = true,

                SearchKey::Bcc => self.bcc = cursor.text(key)?.to_string(),
                SearchKey::Body => self.body = cursor.text(key)?.to_string(),
                SearchKey::Cc => self.cc = cursor.text(key)?.to_string(),
                SearchKey::From => self.from = cursor.text(key)?.to_string(),
                SearchKey::Keyword => self.keyword = cursor.text(key)?.to_string(),
                SearchKey::Subject => self.subject = cursor.text(key)?.to_string(),
                SearchKey::Text => self.text = cursor.text(key)?.to_string(),
                SearchKey::To => self.to = cursor.text(key)?.to_string(),
                SearchKey::Unkeyword => self.unkeyword = cursor.text(key)?.to_string(),

                SearchKey::Header => {
                    let name = cursor.text(key)?;
                    let value = cursor.text(key)?;
                    // Half a header is no predicate at all
                    self.header = Some(Header::new(name, value)).filter(Header::is_complete);
                }

                SearchKey::Larger => self.larger = cursor.number(key)?,
                SearchKey::Smaller => self.smaller = cursor.number(key)?,

                SearchKey::Before => self.before = Some(cursor.date(key)?),
                SearchKey::On => self.on = Some(cursor.date(key)?),
                SearchKey::Since => self.since = Some(cursor.date(key)?),
                SearchKey::SentBefore => self.sent_before = Some(cursor.date(key)?),
                SearchKey::SentOn => self.sent_on = Some(cursor.date(key)?),
                SearchKey::SentSince => self.sent_since = Some(cursor.date(key)?),

                SearchKey::Uid => self.uid = Some(UidSet::parse(&cursor.sequence_text(key)?)?),

                SearchKey::Not => {
                    let inner = cursor.list(key)?;
                    self.not = Some(Box::new(Self::parse_nested(inner, max_depth, depth)?));
                }
                SearchKey::Or => {
                    let left = cursor.list(key)?;
                    let right = cursor.list(key)?;
                    let left = Self::parse_nested(left, max_depth, depth)?;
                    let right = Self::parse_nested(right, max_depth, depth)?;
                    self.or = Some(Box::new((left, right)));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::similar_names)]
mod tests {
    use super::*;
    use crate::types::{SeqNum, Uid};

    fn atoms(tokens: &[&str]) -> Vec<Atom> {
        tokens.iter().map(|t| Atom::text(*t)).collect()
    }

    fn list(tokens: &[&str]) -> Atom {
        Atom::List(atoms(tokens))
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_is_all() {
        assert!(Criteria::parse(&[]).unwrap().is_all());
        assert!(Criteria::parse(&atoms(&["ALL"])).unwrap().is_all());
    }

    #[test]
    fn flags_set_only_their_field() {
        let cases: [(&str, fn(&Criteria) -> bool); 13] = [
            ("ANSWERED", |c| c.answered),
            ("DELETED", |c| c.deleted),
            ("DRAFT", |c| c.draft),
            ("FLAGGED", |c| c.flagged),
            ("NEW", |c| c.new),
            ("OLD", |c| c.old),
            ("RECENT", |c| c.recent),
            ("SEEN", |c| c.seen),
            ("UNANSWERED", |c| c.unanswered),
            ("UNDELETED", |c| c.undeleted),
            ("UNDRAFT", |c| c.undraft),
            ("UNFLAGGED", |c| c.unflagged),
            ("UNSEEN", |c| c.unseen),
        ];

        for (keyword, field) in cases {
            let criteria = Criteria::parse(&atoms(&[keyword])).unwrap();
            assert!(field(&criteria), "{keyword} not set");
            let lower = keyword.to_lowercase();
            assert_eq!(Criteria::parse(&atoms(&[lower.as_str()])).unwrap(), criteria);
            // Nothing else is set, so only the keyword comes back out
            assert_eq!(criteria.format(), atoms(&[keyword]));
        }
    }

    #[test]
    fn string_fields() {
        let criteria = Criteria::parse(&atoms(&[
            "BCC", "a", "BODY", "b", "CC", "c", "FROM", "d", "KEYWORD", "e", "SUBJECT", "f",
            "TEXT", "g", "TO", "h", "UNKEYWORD", "i",
        ]))
        .unwrap();

        assert_eq!(criteria.bcc, "a");
        assert_eq!(criteria.body, "b");
        assert_eq!(criteria.cc, "c");
        assert_eq!(criteria.from, "d");
        assert_eq!(criteria.keyword, "e");
        assert_eq!(criteria.subject, "f");
        assert_eq!(criteria.text, "g");
        assert_eq!(criteria.to, "h");
        assert_eq!(criteria.unkeyword, "i");
    }

    #[test]
    fn last_assignment_wins() {
        let criteria = Criteria::parse(&atoms(&["BCC", "mickey", "BCC", "mouse"])).unwrap();
        assert_eq!(criteria.bcc, "mouse");
    }

    #[test]
    fn header() {
        let criteria = Criteria::parse(&atoms(&["HEADER", "X-Mailer", "Foo"])).unwrap();
        assert_eq!(criteria.header, Some(Header::new("X-Mailer", "Foo")));
    }

    #[test]
    fn incomplete_header_is_absent() {
        for args in [["X-Mailer", ""], ["", "Foo"], ["", ""]] {
            let parsed = Criteria::parse(&atoms(&["HEADER", args[0], args[1]])).unwrap();
            assert_eq!(parsed.header, None);
            assert!(parsed.is_all());
            assert_eq!(Criteria::parse(&parsed.format()).unwrap(), parsed);
        }

        // A later incomplete header clears an earlier one
        let parsed =
            Criteria::parse(&atoms(&["HEADER", "X-Mailer", "Foo", "HEADER", "X-Mailer", ""]))
                .unwrap();
        assert_eq!(parsed.header, None);
    }

    #[test]
    fn empty_string_value_is_absent() {
        let parsed = Criteria::parse(&atoms(&["SUBJECT", ""])).unwrap();
        assert!(parsed.is_all());
        assert_eq!(parsed.format(), atoms(&["ALL"]));
        assert_eq!(Criteria::parse(&parsed.format()).unwrap(), parsed);
    }

    #[test]
    fn sizes() {
        let criteria = Criteria::parse(&[
            Atom::text("LARGER"),
            Atom::Number(1024),
            Atom::text("SMALLER"),
            Atom::text("4096"),
        ])
        .unwrap();
        assert_eq!(criteria.larger, 1024);
        assert_eq!(criteria.smaller, 4096);
    }

    #[test]
    fn dates() {
        let criteria = Criteria::parse(&atoms(&[
            "BEFORE",
            "2-Jan-2006",
            "ON",
            "3-Feb-2007",
            "SINCE",
            "4-Mar-2008",
            "SENTBEFORE",
            "5-Apr-2009",
            "SENTON",
            "6-May-2010",
            "SENTSINCE",
            "7-Jun-2011",
        ]))
        .unwrap();

        assert_eq!(criteria.before, Some(ymd(2006, 1, 2)));
        assert_eq!(criteria.on, Some(ymd(2007, 2, 3)));
        assert_eq!(criteria.since, Some(ymd(2008, 3, 4)));
        assert_eq!(criteria.sent_before, Some(ymd(2009, 4, 5)));
        assert_eq!(criteria.sent_on, Some(ymd(2010, 5, 6)));
        assert_eq!(criteria.sent_since, Some(ymd(2011, 6, 7)));
    }

    #[test]
    fn bad_date_fails() {
        assert_eq!(
            Criteria::parse(&atoms(&["SINCE", "2006-01-02"])),
            Err(Error::InvalidDate("2006-01-02".to_string()))
        );
    }

    #[test]
    fn bare_sequence_set() {
        let criteria = Criteria::parse(&atoms(&["99:101"])).unwrap();
        assert_eq!(criteria.seq_set, SequenceSet::range(99, 101));
        assert_eq!(
            Criteria {
                seq_set: None,
                ..criteria
            },
            Criteria::default()
        );
    }

    #[test]
    fn numeric_sequence_set() {
        let criteria = Criteria::parse(&[Atom::Number(7)]).unwrap();
        assert_eq!(criteria.seq_set, Some(SequenceSet::Single(SeqNum::new(7).unwrap())));
    }

    #[test]
    fn uid_set() {
        let criteria = Criteria::parse(&atoms(&["UID", "1:*"])).unwrap();
        assert_eq!(criteria.uid, Some(UidSet::RangeFrom(Uid::new(1).unwrap())));
        assert!(criteria.seq_set.is_none());
    }

    #[test]
    fn not() {
        let criteria = Criteria::parse(&[Atom::text("NOT"), list(&["DELETED"])]).unwrap();
        let not = criteria.not.as_deref().unwrap();
        assert!(not.deleted);
        assert!(!criteria.deleted);
    }

    #[test]
    fn or() {
        let criteria =
            Criteria::parse(&[Atom::text("OR"), list(&["SEEN"]), list(&["FLAGGED"])]).unwrap();
        let (left, right) = criteria.or.as_deref().unwrap();
        assert!(left.seen && !left.flagged);
        assert!(right.flagged && !right.seen);
        assert_eq!(
            Criteria {
                or: None,
                ..criteria.clone()
            },
            Criteria::default()
        );
    }

    #[test]
    fn nested_or_inside_not() {
        let criteria = Criteria::parse(&[
            Atom::text("NOT"),
            Atom::List(vec![
                Atom::text("OR"),
                list(&["FROM", "alice"]),
                list(&["TO", "bob"]),
            ]),
        ])
        .unwrap();
        let (left, right) = criteria.not.as_deref().unwrap().or.as_deref().unwrap();
        assert_eq!(left.from, "alice");
        assert_eq!(right.to, "bob");
    }

    #[test]
    fn group_is_anded() {
        let criteria =
            Criteria::parse(&[list(&["SEEN", "SUBJECT", "hi"]), Atom::text("FLAGGED")]).unwrap();
        assert!(criteria.seen && criteria.flagged);
        assert_eq!(criteria.subject, "hi");
    }

    #[test]
    fn missing_arguments() {
        for input in [
            atoms(&["BCC"]),
            atoms(&["HEADER", "X-Mailer"]),
            atoms(&["LARGER"]),
            atoms(&["SINCE"]),
            atoms(&["UID"]),
            atoms(&["NOT"]),
            vec![Atom::text("OR"), list(&["SEEN"])],
        ] {
            assert!(
                matches!(Criteria::parse(&input), Err(Error::MissingArgument(_))),
                "input {input:?}"
            );
        }
        assert_eq!(
            Criteria::parse(&atoms(&["SEEN", "bcc"])),
            Err(Error::MissingArgument("BCC"))
        );
    }

    #[test]
    fn type_mismatches() {
        assert_eq!(
            Criteria::parse(&[Atom::text("SUBJECT"), Atom::Number(3)]),
            Err(Error::TypeMismatch {
                expected: "text",
                found: "number",
            })
        );
        assert_eq!(
            Criteria::parse(&atoms(&["NOT", "SEEN"])),
            Err(Error::TypeMismatch {
                expected: "list",
                found: "text",
            })
        );
        assert!(matches!(
            Criteria::parse(&[Atom::text("BEFORE"), list(&["1-Jan-2000"])]),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            Criteria::parse(&[Atom::text("UID"), list(&["1"])]),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn unknown_token_is_sequence_set() {
        assert_eq!(
            Criteria::parse(&atoms(&["SEEN", "BOGUS"])),
            Err(Error::InvalidSequenceSet("BOGUS".to_string()))
        );
    }

    #[test]
    fn invalid_number() {
        assert_eq!(
            Criteria::parse(&atoms(&["LARGER", "big"])),
            Err(Error::InvalidNumber("big".to_string()))
        );
    }

    #[test]
    fn nested_error_propagates() {
        let input = [
            Atom::text("OR"),
            list(&["SEEN"]),
            Atom::List(vec![Atom::text("NOT"), list(&["SUBJECT"])]),
        ];
        assert_eq!(Criteria::parse(&input), Err(Error::MissingArgument("SUBJECT")));
    }

    #[test]
    fn depth_limit() {
        let mut nested = list(&["SEEN"]);
        for _ in 0..4 {
            nested = Atom::List(vec![Atom::text("NOT"), nested]);
        }
        // NOT (NOT (NOT (NOT (SEEN)))) after unwrapping the outermost list
        let Atom::List(input) = nested else {
            unreachable!()
        };

        let config = ParserConfig::builder().max_depth(4).build();
        assert!(Criteria::parse_with(&input, &config).is_ok());

        let config = ParserConfig::builder().max_depth(3).build();
        assert_eq!(
            Criteria::parse_with(&input, &config),
            Err(Error::NestingTooDeep(3))
        );
    }
}
