//! SEARCH criteria tree.
//!
//! [`Criteria`] is the structured form of a SEARCH command's key list
//! (RFC 3501 section 6.4.4). Every field is independently optional; a
//! criteria with nothing set matches all messages. Keys listed side by side
//! are ANDed, `not` negates a nested criteria and `or` holds a pair of
//! alternatives.
//!
//! # Example
//!
//! ```
//! use mailledger_search::{Atom, Criteria};
//!
//! let atoms = vec![
//!     Atom::text("OR"),
//!     Atom::List(vec![Atom::text("SEEN")]),
//!     Atom::List(vec![Atom::text("FLAGGED")]),
//! ];
//! let criteria = Criteria::parse(&atoms).unwrap();
//! let (left, right) = criteria.or.as_deref().unwrap();
//! assert!(left.seen && right.flagged);
//! assert_eq!(criteria.format(), atoms);
//! ```

mod format;
mod keyword;
mod parse;

use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{SequenceSet, UidSet};

pub use keyword::SearchKey;

/// `HEADER` predicate: a header field name and the text to look for in it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    /// Header field name, e.g. `X-Mailer`.
    pub name: String,
    /// Text the field value must contain.
    pub value: String,
}

impl Header {
    /// Creates a header predicate.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns true if both name and value are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.value.is_empty()
    }
}

/// Structured SEARCH criteria.
///
/// String fields are absent when empty, `larger`/`smaller` when zero.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Message sequence numbers to match.
    pub seq_set: Option<SequenceSet>,

    /// Messages with the `\Answered` flag.
    pub answered: bool,
    /// Messages with the `\Deleted` flag.
    pub deleted: bool,
    /// Messages with the `\Draft` flag.
    pub draft: bool,
    /// Messages with the `\Flagged` flag.
    pub flagged: bool,
    /// Messages that are recent but not seen.
    pub new: bool,
    /// Messages without the `\Recent` flag.
    pub old: bool,
    /// Messages with the `\Recent` flag.
    pub recent: bool,
    /// Messages with the `\Seen` flag.
    pub seen: bool,
    /// Messages without the `\Answered` flag.
    pub unanswered: bool,
    /// Messages without the `\Deleted` flag.
    pub undeleted: bool,
    /// Messages without the `\Draft` flag.
    pub undraft: bool,
    /// Messages without the `\Flagged` flag.
    pub unflagged: bool,
    /// Messages without the `\Seen` flag.
    pub unseen: bool,

    /// BCC field contains.
    pub bcc: String,
    /// Body contains.
    pub body: String,
    /// CC field contains.
    pub cc: String,
    /// FROM field contains.
    pub from: String,
    /// Keyword flag set.
    pub keyword: String,
    /// Subject contains.
    pub subject: String,
    /// Header or body contains.
    pub text: String,
    /// TO field contains.
    pub to: String,
    /// Keyword flag not set.
    pub unkeyword: String,

    /// Header field contains.
    pub header: Option<Header>,

    /// Size larger than this many octets.
    pub larger: u32,
    /// Size smaller than this many octets.
    pub smaller: u32,

    /// Internal date earlier than.
    pub before: Option<NaiveDate>,
    /// Internal date within.
    pub on: Option<NaiveDate>,
    /// Internal date within or later than.
    pub since: Option<NaiveDate>,
    /// `Date:` header earlier than.
    pub sent_before: Option<NaiveDate>,
    /// `Date:` header within.
    pub sent_on: Option<NaiveDate>,
    /// `Date:` header within or later than.
    pub sent_since: Option<NaiveDate>,

    /// UIDs to match.
    pub uid: Option<UidSet>,

    /// Negated sub-criteria.
    pub not: Option<Box<Self>>,
    /// Pair of alternatives; either may match.
    pub or: Option<Box<(Self, Self)>>,
}

impl Criteria {
    /// Creates criteria matching every message.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Returns true if no field is set, i.e. the criteria is `ALL`.
    #[must_use]
    pub fn is_all(&self) -> bool {
        *self == Self::default()
    }

    /// Creates criteria matching messages that don't match `criteria`.
    #[must_use]
    pub fn negate(criteria: Self) -> Self {
        Self {
            not: Some(Box::new(criteria)),
            ..Self::default()
        }
    }

    /// Creates criteria matching messages that match `left` or `right`.
    #[must_use]
    pub fn either(left: Self, right: Self) -> Self {
        Self {
            or: Some(Box::new((left, right))),
            ..Self::default()
        }
    }

    /// Returns the header predicate if both parts are present.
    #[must_use]
    pub fn complete_header(&self) -> Option<&Header> {
        self.header.as_ref().filter(|h| h.is_complete())
    }

    // Builder-style setters

    /// Restricts the search to a message sequence set.
    #[must_use]
    pub fn with_sequence_set(mut self, set: SequenceSet) -> Self {
        self.seq_set = Some(set);
        self
    }

    /// Matches messages with the `\Answered` flag.
    #[must_use]
    pub const fn with_answered(mut self) -> Self {
        self.answered = true;
        self
    }

    /// Matches messages with the `\Deleted` flag.
    #[must_use]
    pub const fn with_deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Matches messages with the `\Draft` flag.
    #[must_use]
    pub const fn with_draft(mut self) -> Self {
        self.draft = true;
        self
    }

    /// Matches messages with the `\Flagged` flag.
    #[must_use]
    pub const fn with_flagged(mut self) -> Self {
        self.flagged = true;
        self
    }

    /// Matches recent, unseen messages.
    #[must_use]
    pub const fn with_new(mut self) -> Self {
        self.new = true;
        self
    }

    /// Matches messages without the `\Recent` flag.
    #[must_use]
    pub const fn with_old(mut self) -> Self {
        self.old = true;
        self
    }

    /// Matches messages with the `\Recent` flag.
    #[must_use]
    pub const fn with_recent(mut self) -> Self {
        self.recent = true;
        self
    }

    /// Matches messages with the `\Seen` flag.
    #[must_use]
    pub const fn with_seen(mut self) -> Self {
        self.seen = true;
        self
    }

    /// Matches messages without the `\Answered` flag.
    #[must_use]
    pub const fn with_unanswered(mut self) -> Self {
        self.unanswered = true;
        self
    }

    /// Matches messages without the `\Deleted` flag.
    #[must_use]
    pub const fn with_undeleted(mut self) -> Self {
        self.undeleted = true;
        self
    }

    /// Matches messages without the `\Draft` flag.
    #[must_use]
    pub const fn with_undraft(mut self) -> Self {
        self.undraft = true;
        self
    }

    /// Matches messages without the `\Flagged` flag.
    #[must_use]
    pub const fn with_unflagged(mut self) -> Self {
        self.unflagged = true;
        self
    }

    /// Matches messages without the `\Seen` flag.
    #[must_use]
    pub const fn with_unseen(mut self) -> Self {
        self.unseen = true;
        self
    }

    /// Sets the `BCC` text.
    #[must_use]
    pub fn with_bcc(mut self, bcc: impl Into<String>) -> Self {
        self.bcc = bcc.into();
        self
    }

    /// Sets the `BODY` text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the `CC` text.
    #[must_use]
    pub fn with_cc(mut self, cc: impl Into<String>) -> Self {
        self.cc = cc.into();
        self
    }

    /// Sets the `FROM` text.
    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    /// Sets the keyword flag that must be present.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Sets the `SUBJECT` text.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the `TEXT` text (header or body).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the `TO` text.
    #[must_use]
    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = to.into();
        self
    }

    /// Sets the keyword flag that must be absent.
    #[must_use]
    pub fn with_unkeyword(mut self, keyword: impl Into<String>) -> Self {
        self.unkeyword = keyword.into();
        self
    }

    /// Sets the `HEADER` predicate.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.header = Some(Header::new(name, value));
        self
    }

    /// Matches messages larger than `size` octets.
    #[must_use]
    pub const fn with_larger(mut self, size: u32) -> Self {
        self.larger = size;
        self
    }

    /// Matches messages smaller than `size` octets.
    #[must_use]
    pub const fn with_smaller(mut self, size: u32) -> Self {
        self.smaller = size;
        self
    }

    /// Matches messages received before `date`.
    #[must_use]
    pub const fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Matches messages received on `date`.
    #[must_use]
    pub const fn with_on(mut self, date: NaiveDate) -> Self {
        self.on = Some(date);
        self
    }

    /// Matches messages received on or after `date`.
    #[must_use]
    pub const fn with_since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    /// Matches messages whose `Date:` header is before `date`.
    #[must_use]
    pub const fn with_sent_before(mut self, date: NaiveDate) -> Self {
        self.sent_before = Some(date);
        self
    }

    /// Matches messages whose `Date:` header is `date`.
    #[must_use]
    pub const fn with_sent_on(mut self, date: NaiveDate) -> Self {
        self.sent_on = Some(date);
        self
    }

    /// Matches messages whose `Date:` header is on or after `date`.
    #[must_use]
    pub const fn with_sent_since(mut self, date: NaiveDate) -> Self {
        self.sent_since = Some(date);
        self
    }

    /// Restricts the search to a UID set.
    #[must_use]
    pub fn with_uid(mut self, uids: UidSet) -> Self {
        self.uid = Some(uids);
        self
    }

    /// Adds a negated sub-criteria.
    #[must_use]
    pub fn with_not(mut self, criteria: Self) -> Self {
        self.not = Some(Box::new(criteria));
        self
    }

    /// Adds a pair of alternatives.
    #[must_use]
    pub fn with_or(mut self, left: Self, right: Self) -> Self {
        self.or = Some(Box::new((left, right)));
        self
    }
}
