//! # mailledger-search
//!
//! IMAP SEARCH criteria engine: converts between the argument list of a
//! SEARCH command (RFC 3501 section 6.4.4) and a typed criteria tree.
//!
//! ## Features
//!
//! - **Parser**: atom list → [`Criteria`], with bounds-checked argument
//!   handling and a configurable NOT/OR nesting limit
//! - **Formatter**: [`Criteria`] → atom list in a fixed canonical order
//! - **Wire codec**: raw SEARCH argument bytes ↔ atoms, including quoted
//!   strings, literals and parenthesized groups
//! - **Commands**: `[UID] SEARCH [CHARSET x] ...` request building and parsing
//!
//! ## Quick Start
//!
//! ```
//! use mailledger_search::{Criteria, SearchCommand, wire};
//!
//! // Server side: interpret a client's request
//! let atoms = wire::read_atoms(b"NOT (SEEN) SINCE 1-Feb-2024 FROM boss").unwrap();
//! let criteria = Criteria::parse(&atoms).unwrap();
//! assert!(criteria.not.as_ref().is_some_and(|c| c.seen));
//! assert_eq!(criteria.from, "boss");
//!
//! // Client side: build a request
//! let cmd = SearchCommand::new(Criteria::all().with_flagged().with_subject("a}b")).uid();
//! assert_eq!(cmd.serialize("A1"), b"A1 UID SEARCH FLAGGED SUBJECT \"a}b\"\r\n");
//! ```
//!
//! ## Cargo Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`Atom`], [`Criteria`],
//!   [`Header`] and the sequence types
//!
//! ## Modules
//!
//! - [`atom`]: the atom alphabet and number helper
//! - [`criteria`]: criteria tree, parser and formatter
//! - [`date`]: `D-Mon-YYYY` search date codec
//! - [`types`]: sequence numbers, UIDs and sequence sets
//! - [`wire`]: byte-level tokenizer and writer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod atom;
mod command;
mod config;
pub mod criteria;
pub mod date;
mod error;
pub mod types;
pub mod wire;

pub use atom::Atom;
pub use command::SearchCommand;
pub use config::{DEFAULT_MAX_DEPTH, ParserConfig, ParserConfigBuilder};
pub use criteria::{Criteria, Header, SearchKey};
pub use error::{Error, Result};
pub use types::{SeqNum, SequenceSet, Uid, UidSet};
