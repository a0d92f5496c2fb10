//! Criteria to atom list formatter.

use chrono::NaiveDate;

use super::{Criteria, SearchKey};
use crate::atom::Atom;
use crate::date::format_search_date;

/// Accumulates formatted search keys.
struct Writer {
    atoms: Vec<Atom>,
}

impl Writer {
    fn key(&mut self, key: SearchKey) {
        self.atoms.push(Atom::text(key.as_str()));
    }

    fn flag(&mut self, key: SearchKey, set: bool) {
        if set {
            self.key(key);
        }
    }

    fn string(&mut self, key: SearchKey, value: &str) {
        if !value.is_empty() {
            self.key(key);
            self.atoms.push(Atom::text(value));
        }
    }

    fn number(&mut self, key: SearchKey, value: u32) {
        if value != 0 {
            self.key(key);
            self.atoms.push(Atom::Number(value));
        }
    }

    fn date(&mut self, key: SearchKey, value: Option<NaiveDate>) {
        if let Some(date) = value {
            self.key(key);
            self.atoms.push(Atom::Text(format_search_date(date)));
        }
    }
}

impl Criteria {
    /// Formats the criteria as a SEARCH argument list.
    ///
    /// Keys are written in a fixed order regardless of how the criteria was
    /// built, so the output re-parses to an equal value but not necessarily
    /// to the original atom order. Empty criteria format as `ALL`.
    #[must_use]
    pub fn format(&self) -> Vec<Atom> {
        let mut w = Writer { atoms: Vec::new() };

        if let Some(set) = &self.seq_set {
            w.atoms.push(Atom::Text(set.to_string()));
        }

        w.flag(SearchKey::Answered, self.answered);
        w.string(SearchKey::Bcc, &self.bcc);
        w.date(SearchKey::Before, self.before);
        w.string(SearchKey::Body, &self.body);
        w.string(SearchKey::Cc, &self.cc);
        w.flag(SearchKey::Deleted, self.deleted);
        w.flag(SearchKey::Draft, self.draft);
        w.flag(SearchKey::Flagged, self.flagged);
        w.string(SearchKey::From, &self.from);
        if let Some(header) = self.complete_header() {
            w.key(SearchKey::Header);
            w.atoms.push(Atom::text(header.name.as_str()));
            w.atoms.push(Atom::text(header.value.as_str()));
        }
        w.string(SearchKey::Keyword, &self.keyword);
        w.number(SearchKey::Larger, self.larger);
        w.flag(SearchKey::New, self.new);
        if let Some(not) = &self.not {
            w.key(SearchKey::Not);
            w.atoms.push(Atom::List(not.format()));
        }
        w.flag(SearchKey::Old, self.old);
        w.date(SearchKey::On, self.on);
        if let Some(or) = &self.or {
            w.key(SearchKey::Or);
            w.atoms.push(Atom::List(or.0.format()));
            w.atoms.push(Atom::List(or.1.format()));
        }
        w.flag(SearchKey::Recent, self.recent);
        w.flag(SearchKey::Seen, self.seen);
        w.date(SearchKey::SentBefore, self.sent_before);
        w.date(SearchKey::SentOn, self.sent_on);
        w.date(SearchKey::SentSince, self.sent_since);
        w.date(SearchKey::Since, self.since);
        w.number(SearchKey::Smaller, self.smaller);
        w.string(SearchKey::Subject, &self.subject);
        w.string(SearchKey::Text, &self.text);
        w.string(SearchKey::To, &self.to);
        if let Some(uid) = &self.uid {
            w.key(SearchKey::Uid);
            w.atoms.push(Atom::Text(uid.to_string()));
        }
        w.flag(SearchKey::Unanswered, self.unanswered);
        w.flag(SearchKey::Undeleted, self.undeleted);
        w.flag(SearchKey::Undraft, self.undraft);
        w.flag(SearchKey::Unflagged, self.unflagged);
        w.string(SearchKey::Unkeyword, &self.unkeyword);
        w.flag(SearchKey::Unseen, self.unseen);

        if w.atoms.is_empty() {
            w.key(SearchKey::All);
        }

        w.atoms
    }
}
