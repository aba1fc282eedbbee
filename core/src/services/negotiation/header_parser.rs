//! Parsing of raw `Accept-Language` header values.
//!
//! Browsers send this header, so don't trust it. Parsing is all-or-nothing:
//! a single bad entry discards the whole header.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{LanguageRange, PreferenceList};
use crate::errors::{LanguageError, LanguageResult};

static ENTRY_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*,\s*").unwrap()
});

/// Split a header into its range entries.
///
/// Empty entries left by trailing commas are dropped; empty entries anywhere
/// else are kept and fail tag validation.
fn split_entries(header: &str) -> Vec<&str> {
    let mut entries: Vec<&str> = ENTRY_SEPARATOR_REGEX.split(header).collect();
    while entries.last().is_some_and(|entry| entry.is_empty()) {
        entries.pop();
    }
    entries
}

/// Parse every entry of a header, in header order.
pub fn parse_language_ranges(header: &str) -> LanguageResult<Vec<LanguageRange>> {
    split_entries(header)
        .into_iter()
        .map(str::parse::<LanguageRange>)
        .collect()
}

/// Parse a header into a preference list, reporting why it was rejected.
///
/// # Errors
///
/// - `MissingHeader` when `header` is `None`
/// - `MalformedRange` or `InvalidTag` for the first bad entry
pub fn try_parse_accept_language(header: Option<&str>) -> LanguageResult<PreferenceList> {
    let header = header.ok_or(LanguageError::MissingHeader)?;
    let ranges = parse_language_ranges(header)?;
    Ok(PreferenceList::from_ranges(ranges))
}

/// Parse a header into a preference list.
///
/// Never fails: a missing or malformed header yields an empty list.
///
/// # Example
///
/// ```
/// use hal_core::parse_accept_language;
///
/// let languages = parse_accept_language(Some("da, en-gb;q=0.8, en;q=0.7"));
/// assert_eq!(languages.into_vec(), vec!["da", "en-GB", "en"]);
/// ```
pub fn parse_accept_language(header: Option<&str>) -> PreferenceList {
    match try_parse_accept_language(header) {
        Ok(languages) => languages,
        Err(error) if error.is_missing() => {
            tracing::trace!("No Accept-Language header present");
            PreferenceList::new()
        }
        Err(error) => {
            tracing::debug!(
                header = header.unwrap_or_default(),
                %error,
                "Discarding malformed Accept-Language header"
            );
            PreferenceList::new()
        }
    }
}
