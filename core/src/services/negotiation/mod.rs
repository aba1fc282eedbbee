//! Language negotiation module
//!
//! - `header_parser` - `Accept-Language` value to ranked, normalized tags
//! - `locale_matcher` - exact and region-agnostic selection of a supported locale
//! - `request_languages` - per-request memo of the parsed preferences

mod header_parser;
mod locale_matcher;
mod request_languages;

#[cfg(test)]
mod tests;

pub use header_parser::{parse_accept_language, parse_language_ranges, try_parse_accept_language};
pub use locale_matcher::{compatible_select, exact_select, expand_candidates, LocaleMatcher};
pub use request_languages::{AcceptLanguageSource, RequestLanguages, HTTP_ACCEPT_LANGUAGE};
