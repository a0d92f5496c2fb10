//! Search key vocabulary.

/// A search key keyword recognized by the criteria parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKey {
    /// `ALL`
    All,
    /// `ANSWERED`
    Answered,
    /// `BCC <string>`
    Bcc,
    /// `BEFORE <date>`
    Before,
    /// `BODY <string>`
    Body,
    /// `CC <string>`
    Cc,
    /// `DELETED`
    Deleted,
    /// `DRAFT`
    Draft,
    /// `FLAGGED`
    Flagged,
    /// `FROM <string>`
    From,
    /// `HEADER <field-name> <string>`
    Header,
    /// `KEYWORD <flag>`
    Keyword,
    /// `LARGER <n>`
    Larger,
    /// `NEW`
    New,
    /// `NOT <search-key>`
    Not,
    /// `OLD`
    Old,
    /// `ON <date>`
    On,
    /// `OR <search-key> <search-key>`
    Or,
    /// `RECENT`
    Recent,
    /// `SEEN`
    Seen,
    /// `SENTBEFORE <date>`
    SentBefore,
    /// `SENTON <date>`
    SentOn,
    /// `SENTSINCE <date>`
    SentSince,
    /// `SINCE <date>`
    Since,
    /// `SMALLER <n>`
    Smaller,
    /// `SUBJECT <string>`
    Subject,
    /// `TEXT <string>`
    Text,
    /// `TO <string>`
    To,
    /// `UID <sequence-set>`
    Uid,
    /// `UNANSWERED`
    Unanswered,
    /// `UNDELETED`
    Undeleted,
    /// `UNDRAFT`
    Undraft,
    /// `UNFLAGGED`
    Unflagged,
    /// `UNKEYWORD <flag>`
    Unkeyword,
    /// `UNSEEN`
    Unseen,
}

impl SearchKey {
    /// Looks up a keyword, ignoring case.
    ///
    /// Returns `None` for anything outside the vocabulary; the parser then
    /// treats the token as a sequence set.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let key = match s.to_ascii_uppercase().as_str() {
            "ALL" => Self::All,
            "ANSWERED" => Self::Answered,
            "BCC" => Self::Bcc,
            "BEFORE" => Self::Before,
            "BODY" => Self::Body,
            "CC" => Self::Cc,
            "DELETED" => Self::Deleted,
            "DRAFT" => Self::Draft,
            "FLAGGED" => Self::Flagged,
            "FROM" => Self::From,
            "HEADER" => Self::Header,
            "KEYWORD" => Self::Keyword,
            "LARGER" => Self::Larger,
            "NEW" => Self::New,
            "NOT" => Self::Not,
            "OLD" => Self::Old,
            "ON" => Self::On,
            "OR" => Self::Or,
            "RECENT" => Self::Recent,
            "SEEN" => Self::Seen,
            "SENTBEFORE" => Self::SentBefore,
            "SENTON" => Self::SentOn,
            "SENTSINCE" => Self::SentSince,
            "SINCE" => Self::Since,
            "SMALLER" => Self::Smaller,
            "SUBJECT" => Self::Subject,
            "TEXT" => Self::Text,
            "TO" => Self::To,
            "UID" => Self::Uid,
            "UNANSWERED" => Self::Unanswered,
            "UNDELETED" => Self::Undeleted,
            "UNDRAFT" => Self::Undraft,
            "UNFLAGGED" => Self::Unflagged,
            "UNKEYWORD" => Self::Unkeyword,
            "UNSEEN" => Self::Unseen,
            _ => return None,
        };
        Some(key)
    }

    /// Returns the keyword as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Answered => "ANSWERED",
            Self::Bcc => "BCC",
            Self::Before => "BEFORE",
            Self::Body => "BODY",
            Self::Cc => "CC",
            Self::Deleted => "DELETED",
            Self::Draft => "DRAFT",
            Self::Flagged => "FLAGGED",
            Self::From => "FROM",
            Self::Header => "HEADER",
            Self::Keyword => "KEYWORD",
            Self::Larger => "LARGER",
            Self::New => "NEW",
            Self::Not => "NOT",
            Self::Old => "OLD",
            Self::On => "ON",
            Self::Or => "OR",
            Self::Recent => "RECENT",
            Self::Seen => "SEEN",
            Self::SentBefore => "SENTBEFORE",
            Self::SentOn => "SENTON",
            Self::SentSince => "SENTSINCE",
            Self::Since => "SINCE",
            Self::Smaller => "SMALLER",
            Self::Subject => "SUBJECT",
            Self::Text => "TEXT",
            Self::To => "TO",
            Self::Uid => "UID",
            Self::Unanswered => "UNANSWERED",
            Self::Undeleted => "UNDELETED",
            Self::Undraft => "UNDRAFT",
            Self::Unflagged => "UNFLAGGED",
            Self::Unkeyword => "UNKEYWORD",
            Self::Unseen => "UNSEEN",
        }
    }
}

impl std::fmt::Display for SearchKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
