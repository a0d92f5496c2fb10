//! Search date codec.
//!
//! SEARCH date arguments use the RFC 3501 `date` production, `D-Mon-YYYY`,
//! with a three-letter English month abbreviation and no time component.

use chrono::NaiveDate;

use crate::{Error, Result};

/// `strftime` layout used when parsing search dates.
const PARSE_LAYOUT: &str = "%d-%b-%Y";

/// `strftime` layout used when formatting search dates (day not zero-padded).
const FORMAT_LAYOUT: &str = "%-d-%b-%Y";

/// Parses a search date such as `2-Jan-2006` or `02-jan-2006`.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the text does not match the layout or
/// names a day that doesn't exist.
pub fn parse_search_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, PARSE_LAYOUT).map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Formats a date in the search layout, e.g. `2-Jan-2006`.
#[must_use]
pub fn format_search_date(date: NaiveDate) -> String {
    date.format(FORMAT_LAYOUT).to_string()
}
