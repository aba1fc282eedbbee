//! Ordered list of normalized language tags, most preferred first.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::language_range::LanguageRange;

/// The user's language preferences in descending order of quality.
///
/// Built from parsed ranges via [`PreferenceList::from_ranges`], or directly
/// from caller-supplied tags when the browser preferences are overridden.
/// Tags supplied directly are stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceList(Vec<String>);

impl PreferenceList {
    /// Create an empty preference list
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank ranges by quality and normalize their tags.
    ///
    /// The sort is stable, so ranges of equal quality keep header order.
    pub fn from_ranges(mut ranges: Vec<LanguageRange>) -> Self {
        ranges.sort_by(|a, b| b.quality().total_cmp(&a.quality()));
        Self(ranges.iter().map(LanguageRange::normalized_tag).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The most preferred tag
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> From<Vec<S>> for PreferenceList {
    fn from(tags: Vec<S>) -> Self {
        tags.into_iter().collect()
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for PreferenceList {
    fn from(tags: [S; N]) -> Self {
        tags.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for PreferenceList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for PreferenceList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PreferenceList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PreferenceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}
