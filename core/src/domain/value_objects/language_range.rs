//! A single `language-range [;q=qvalue]` entry of an `Accept-Language` header.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::str::FromStr;

use crate::errors::{LanguageError, LanguageResult};

// `1*8ALPHA *("-" 1*8alphanum)` with `*` allowed anywhere
static LANGUAGE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z*]{1,8}(-[a-z0-9*]{1,8})*$").unwrap()
});

// Only qvalues with a fractional part are recognised
static QUALITY_SUFFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r";q=[0-9]+\.[0-9]+$").unwrap()
});

static TRAILING_SUBTAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)-[a-z]+$").unwrap()
});

const QUALITY_SEPARATOR: &str = ";q=";

const DEFAULT_QUALITY: f64 = 1.0;

/// Suffix appended to entries that carry no recognisable quality value
pub const DEFAULT_QUALITY_SUFFIX: &str = ";q=1.0";

/// A language tag with its quality weight.
///
/// The quality is kept as written: values outside `[0, 1]` are neither
/// clamped nor rejected, they simply sort as literal floats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageRange {
    tag: String,
    quality: f64,
}

impl LanguageRange {
    /// Create a range from an already separated tag and quality
    pub fn new(tag: impl Into<String>, quality: f64) -> LanguageResult<Self> {
        let tag = tag.into();
        if !is_valid_tag(&tag) {
            return Err(LanguageError::InvalidTag { tag });
        }
        Ok(Self { tag, quality })
    }

    /// The tag exactly as it appeared in the header
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn quality(&self) -> f64 {
        self.quality
    }

    pub fn primary_subtag(&self) -> &str {
        primary_subtag(&self.tag)
    }

    /// The tag in the case form used by preference lists
    pub fn normalized_tag(&self) -> String {
        normalize_tag(&self.tag)
    }
}

impl FromStr for LanguageRange {
    type Err = LanguageError;

    fn from_str(entry: &str) -> LanguageResult<Self> {
        let weighted: Cow<'_, str> = if QUALITY_SUFFIX_REGEX.is_match(entry) {
            Cow::Borrowed(entry)
        } else {
            Cow::Owned(format!("{entry}{DEFAULT_QUALITY_SUFFIX}"))
        };

        // `en;q=1` becomes `en;q=1;q=1.0` here and is rejected
        let mut parts = weighted.split(QUALITY_SEPARATOR);
        let (tag, quality) = match (parts.next(), parts.next(), parts.next()) {
            (Some(tag), Some(quality), None) => (tag, quality),
            _ => {
                return Err(LanguageError::MalformedRange {
                    entry: entry.to_string(),
                })
            }
        };

        // The suffix check leaves `digits.digits` here, which always parses
        let quality = quality.parse::<f64>().unwrap_or(DEFAULT_QUALITY);

        Self::new(tag, quality)
    }
}

/// Check a tag against the language-range grammar (case-insensitive)
pub fn is_valid_tag(tag: &str) -> bool {
    LANGUAGE_TAG_REGEX.is_match(tag)
}

/// Lowercase a tag, then uppercase its final subtag when that subtag is
/// purely alphabetic: `nl-nl` -> `nl-NL`, `zh-Hans-CN` -> `zh-hans-CN`,
/// `es-419` -> `es-419`.
pub fn normalize_tag(tag: &str) -> String {
    let lowered = tag.to_lowercase();
    TRAILING_SUBTAG_REGEX
        .replace(&lowered, |caps: &regex::Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}

/// The portion of a tag before the first hyphen
pub fn primary_subtag(tag: &str) -> &str {
    tag.split_once('-').map_or(tag, |(primary, _)| primary)
}
