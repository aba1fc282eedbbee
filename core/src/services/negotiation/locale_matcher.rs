//! Selection of a supported locale from the user's preferences.

use hal_shared::{LocaleConfig, MatchPolicy};

use crate::domain::{primary_subtag, PreferenceList};

/// Find the locale specifically requested by the user.
///
/// Returns the first preference, in preference order, whose tag equals the
/// string form of an available locale. `en-US` does not match `en`.
pub fn exact_select<T: ToString>(preferences: &PreferenceList, available: &[T]) -> Option<String> {
    let available: Vec<String> = available.iter().map(ToString::to_string).collect();
    let selected = preferences
        .iter()
        .find(|preferred| available.contains(preferred))
        .cloned();
    tracing::trace!(%preferences, ?selected, "Exact locale selection");
    selected
}

/// Each preference followed by its primary subtag when it has one:
/// `[nl-NL, en-US]` expands to `[nl-NL, nl, en-US, en]`.
pub fn expand_candidates(preferences: &PreferenceList) -> Vec<&str> {
    let mut candidates = Vec::with_capacity(preferences.len() * 2);
    for preferred in preferences {
        candidates.push(preferred.as_str());
        if preferred.contains('-') {
            candidates.push(primary_subtag(preferred));
        }
    }
    candidates
}

/// Find the first available locale compatible with the user's preferences,
/// ignoring region.
///
/// A candidate matches an available locale that equals it or extends it with
/// further subtags, so candidate `en` selects available `en-GB`. The match is
/// anchored on the available side: available `en` is only reached through the
/// bare `en` candidate that `en-US` expands to.
pub fn compatible_select<'a, T: ToString>(
    preferences: &PreferenceList,
    available: &'a [T],
) -> Option<&'a T> {
    let labelled: Vec<(String, &'a T)> = available
        .iter()
        .map(|locale| (locale.to_string(), locale))
        .collect();

    for candidate in expand_candidates(preferences) {
        let found = labelled
            .iter()
            .find(|(label, _)| matches_candidate(label, candidate));
        if let Some((label, locale)) = found {
            tracing::trace!(candidate, selected = %label, "Compatible locale selection");
            return Some(*locale);
        }
    }

    tracing::trace!(%preferences, "No compatible locale available");
    None
}

// Equivalent to `^<escaped candidate>(-|$)`
fn matches_candidate(available: &str, candidate: &str) -> bool {
    available
        .strip_prefix(candidate)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('-'))
}

/// Locales supported by an application together with the policy used to
/// pick one of them and the locale to fall back on.
#[derive(Debug, Clone)]
pub struct LocaleMatcher {
    available_locales: Vec<String>,
    default_locale: String,
    policy: MatchPolicy,
}

impl LocaleMatcher {
    pub fn new<I, S>(available_locales: I, default_locale: impl Into<String>, policy: MatchPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available_locales: available_locales.into_iter().map(Into::into).collect(),
            default_locale: default_locale.into(),
            policy,
        }
    }

    pub fn from_config(config: &LocaleConfig) -> Self {
        Self::new(
            config.available_locales.iter().cloned(),
            config.default_locale.clone(),
            config.policy,
        )
    }

    pub fn available_locales(&self) -> &[String] {
        &self.available_locales
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Select a locale under the configured policy
    pub fn select(&self, preferences: &PreferenceList) -> Option<String> {
        match self.policy {
            MatchPolicy::Exact => exact_select(preferences, &self.available_locales),
            MatchPolicy::Compatible => {
                compatible_select(preferences, &self.available_locales).cloned()
            }
        }
    }

    /// Select a locale, falling back to the default locale when nothing matches
    pub fn negotiate(&self, preferences: &PreferenceList) -> String {
        self.select(preferences)
            .unwrap_or_else(|| self.default_locale.clone())
    }
}

impl From<&LocaleConfig> for LocaleMatcher {
    fn from(config: &LocaleConfig) -> Self {
        Self::from_config(config)
    }
}
