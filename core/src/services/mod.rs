//! Services implementing header parsing and locale negotiation.

pub mod negotiation;

// Re-export commonly used types
pub use negotiation::{
    compatible_select, exact_select, expand_candidates, parse_accept_language,
    parse_language_ranges, try_parse_accept_language, AcceptLanguageSource, LocaleMatcher,
    RequestLanguages, HTTP_ACCEPT_LANGUAGE,
};
