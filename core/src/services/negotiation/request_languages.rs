//! Per-request language preferences.
//!
//! A `RequestLanguages` value belongs to exactly one request. It parses the
//! header at most once and lets the caller override the result, e.g. to force
//! a locale chosen by the user.

use once_cell::unsync::OnceCell;
use std::collections::HashMap;
use std::hash::BuildHasher;

use super::header_parser::parse_accept_language;
use super::locale_matcher::{compatible_select, exact_select, LocaleMatcher};
use crate::domain::PreferenceList;

/// CGI-style environment key carrying the `Accept-Language` header
pub const HTTP_ACCEPT_LANGUAGE: &str = "HTTP_ACCEPT_LANGUAGE";

/// Anything that can hand out the raw `Accept-Language` header of a request
pub trait AcceptLanguageSource {
    fn accept_language(&self) -> Option<&str>;
}

impl AcceptLanguageSource for str {
    fn accept_language(&self) -> Option<&str> {
        Some(self)
    }
}

impl<S: BuildHasher> AcceptLanguageSource for HashMap<String, String, S> {
    fn accept_language(&self) -> Option<&str> {
        self.get(HTTP_ACCEPT_LANGUAGE).map(String::as_str)
    }
}

/// Language preferences of a single request
#[derive(Debug, Clone, Default)]
pub struct RequestLanguages {
    header: Option<String>,
    preferred: OnceCell<PreferenceList>,
    overridden: bool,
}

impl RequestLanguages {
    /// Create the context from a raw header value
    pub fn new(header: Option<&str>) -> Self {
        Self {
            header: header.map(String::from),
            ..Default::default()
        }
    }

    /// Create the context from a request-like source
    pub fn from_source<R: AcceptLanguageSource + ?Sized>(source: &R) -> Self {
        Self::new(source.accept_language())
    }

    pub fn raw_header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// The user's preferred languages, most preferred first.
    ///
    /// Parsed on first access and memoized; an override set through
    /// [`set_preferred_languages`](Self::set_preferred_languages) is returned
    /// as is.
    pub fn preferred_languages(&self) -> &PreferenceList {
        self.preferred
            .get_or_init(|| parse_accept_language(self.header.as_deref()))
    }

    /// Replace the browser preferences for the rest of the request.
    pub fn set_preferred_languages(&mut self, languages: impl Into<PreferenceList>) {
        let languages = languages.into();
        tracing::debug!(%languages, "Overriding preferred languages");
        self.preferred = OnceCell::with_value(languages);
        self.overridden = true;
    }

    /// Whether the preferences have been computed or set
    pub fn is_parsed(&self) -> bool {
        self.preferred.get().is_some()
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden
    }

    /// First preferred language that is available verbatim
    pub fn select_preferred<T: ToString>(&self, available: &[T]) -> Option<String> {
        exact_select(self.preferred_languages(), available)
    }

    /// First available locale compatible with the preferences, ignoring region
    pub fn select_compatible<'a, T: ToString>(&self, available: &'a [T]) -> Option<&'a T> {
        compatible_select(self.preferred_languages(), available)
    }

    /// Locale chosen by `matcher`, or its default locale
    pub fn negotiate(&self, matcher: &LocaleMatcher) -> String {
        matcher.negotiate(self.preferred_languages())
    }
}
