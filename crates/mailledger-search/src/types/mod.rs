//! Core IMAP types used by search criteria.
//!
//! Sequence numbers, UIDs and the set notation (`1,3:5,10:*`) that selects
//! messages by either of them.

#![allow(clippy::missing_const_for_fn)]

mod identifiers;
mod sequence;

pub use identifiers::{SeqNum, Uid};
pub use sequence::{SequenceSet, UidSet};
