//! Sequence sets for message ranges.

use std::num::NonZeroU32;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{SeqNum, Uid};
use crate::{Error, Result};

/// Sequence set for specifying message ranges.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceSet {
    /// Single sequence number.
    Single(SeqNum),
    /// Range of sequence numbers (inclusive).
    Range(SeqNum, SeqNum),
    /// Range from start to end of mailbox.
    RangeFrom(SeqNum),
    /// All messages (*).
    All,
    /// Multiple sequence specifications.
    Set(Vec<Self>),
}

impl SequenceSet {
    /// Creates a sequence set from a single number.
    #[must_use]
    pub fn single(n: u32) -> Option<Self> {
        SeqNum::new(n).map(Self::Single)
    }

    /// Creates a range sequence set.
    #[must_use]
    pub fn range(start: u32, end: u32) -> Option<Self> {
        Some(Self::Range(SeqNum::new(start)?, SeqNum::new(end)?))
    }

    /// Parses a sequence set such as `1`, `2:4`, `10:*` or `1,3:5,*`.
    ///
    /// `*` on either side of a range means "largest number in use", so
    /// `*:5` is normalized to `5:*`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSequenceSet`] for empty input, zero values,
    /// non-numeric parts or empty list items.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidSequenceSet(s.to_string());

        if s.is_empty() {
            return Err(invalid());
        }

        let mut items = Vec::new();
        for part in s.split(',') {
            let item = match part.split_once(':') {
                None => parse_bound(part)
                    .ok_or_else(invalid)?
                    .map_or(Self::All, |n| Self::Single(SeqNum(n))),
                Some((start, end)) => {
                    let start = parse_bound(start).ok_or_else(invalid)?;
                    let end = parse_bound(end).ok_or_else(invalid)?;
                    match (start, end) {
                        (Some(a), Some(b)) => Self::Range(SeqNum(a), SeqNum(b)),
                        (Some(n), None) | (None, Some(n)) => Self::RangeFrom(SeqNum(n)),
                        (None, None) => Self::All,
                    }
                }
            };
            items.push(item);
        }

        if items.len() == 1 {
            Ok(items.remove(0))
        } else {
            Ok(Self::Set(items))
        }
    }
}

/// Parses one side of a range: `None` inside the option means `*`.
fn parse_bound(s: &str) -> Option<Option<NonZeroU32>> {
    if s == "*" {
        return Some(None);
    }
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().and_then(NonZeroU32::new).map(Some)
}

impl FromStr for SequenceSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SequenceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(n) => write!(f, "{n}"),
            Self::Range(start, end) => write!(f, "{start}:{end}"),
            Self::RangeFrom(start) => write!(f, "{start}:*"),
            Self::All => write!(f, "*"),
            Self::Set(items) => {
                let s: Vec<_> = items.iter().map(ToString::to_string).collect();
                write!(f, "{}", s.join(","))
            }
        }
    }
}

/// UID-based sequence set.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UidSet {
    /// Single UID.
    Single(Uid),
    /// Range of UIDs (inclusive).
    Range(Uid, Uid),
    /// Range from start to highest UID.
    RangeFrom(Uid),
    /// All messages.
    All,
    /// Multiple UID specifications.
    Set(Vec<Self>),
}

impl UidSet {
    /// Parses a UID set using the same notation as [`SequenceSet::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSequenceSet`] if the text is not a valid set.
    pub fn parse(s: &str) -> Result<Self> {
        SequenceSet::parse(s).map(|set| Self::from_sequence_set(&set))
    }

    /// Reinterprets a sequence set's numbers as UIDs.
    #[must_use]
    pub fn from_sequence_set(set: &SequenceSet) -> Self {
        // Both Uid and SeqNum wrap NonZeroU32, so this conversion is infallible
        match set {
            SequenceSet::Single(n) => Self::Single(Uid(n.0)),
            SequenceSet::Range(start, end) => Self::Range(Uid(start.0), Uid(end.0)),
            SequenceSet::RangeFrom(start) => Self::RangeFrom(Uid(start.0)),
            SequenceSet::All => Self::All,
            SequenceSet::Set(items) => {
                Self::Set(items.iter().map(Self::from_sequence_set).collect())
            }
        }
    }
}

impl FromStr for UidSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for UidSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(n) => write!(f, "{n}"),
            Self::Range(start, end) => write!(f, "{start}:{end}"),
            Self::RangeFrom(start) => write!(f, "{start}:*"),
            Self::All => write!(f, "*"),
            Self::Set(items) => {
                let s: Vec<_> = items.iter().map(ToString::to_string).collect();
                write!(f, "{}", s.join(","))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod sequence_set_tests {
        use super::*;

        #[test]
        fn single_zero_returns_none() {
            assert!(SequenceSet::single(0).is_none());
            assert!(SequenceSet::range(1, 0).is_none());
        }

        #[test]
        fn parse_single() {
            assert_eq!(
                SequenceSet::parse("42").unwrap(),
                SequenceSet::single(42).unwrap()
            );
        }

        #[test]
        fn parse_range() {
            assert_eq!(
                SequenceSet::parse("99:101").unwrap(),
                SequenceSet::range(99, 101).unwrap()
            );
        }

        #[test]
        fn parse_open_ranges() {
            let start = SeqNum::new(50).unwrap();
            assert_eq!(
                SequenceSet::parse("50:*").unwrap(),
                SequenceSet::RangeFrom(start)
            );
            assert_eq!(
                SequenceSet::parse("*:50").unwrap(),
                SequenceSet::RangeFrom(start)
            );
            assert_eq!(SequenceSet::parse("*").unwrap(), SequenceSet::All);
            assert_eq!(SequenceSet::parse("*:*").unwrap(), SequenceSet::All);
        }

        #[test]
        fn parse_list() {
            let seq = SequenceSet::parse("1,5:10,20:*").unwrap();
            assert_eq!(
                seq,
                SequenceSet::Set(vec![
                    SequenceSet::single(1).unwrap(),
                    SequenceSet::range(5, 10).unwrap(),
                    SequenceSet::RangeFrom(SeqNum::new(20).unwrap()),
                ])
            );
            assert_eq!(seq.to_string(), "1,5:10,20:*");
        }

        #[test]
        fn parse_rejects_malformed() {
            for input in ["", "0", "1:0", "abc", "1,", ",1", "1::2", "1:2:3", "+1", "FOO"] {
                assert_eq!(
                    SequenceSet::parse(input),
                    Err(Error::InvalidSequenceSet(input.to_string())),
                    "input {input:?}"
                );
            }
        }

        #[test]
        fn display_range() {
            let seq = SequenceSet::range(1, 100).unwrap();
            assert_eq!(format!("{seq}"), "1:100");
        }
    }

    mod uid_set_tests {
        use super::*;

        #[test]
        fn parse_matches_sequence_notation() {
            let set = UidSet::parse("1:999").unwrap();
            assert_eq!(
                set,
                UidSet::Range(Uid::new(1).unwrap(), Uid::new(999).unwrap())
            );
            assert_eq!(set.to_string(), "1:999");
        }

        #[test]
        fn parse_rejects_zero() {
            assert!(matches!(
                UidSet::parse("0:4"),
                Err(Error::InvalidSequenceSet(_))
            ));
        }

        #[test]
        fn from_sequence_set_keeps_shape() {
            let seq = SequenceSet::parse("4,7:*").unwrap();
            assert_eq!(
                UidSet::from_sequence_set(&seq),
                UidSet::Set(vec![
                    UidSet::Single(Uid::new(4).unwrap()),
                    UidSet::RangeFrom(Uid::new(7).unwrap()),
                ])
            );
        }
    }
}
