//! Locale negotiation configuration

use serde::{Deserialize, Serialize};
use std::env;

use crate::types::MatchPolicy;

/// Supported locales and how requests are matched against them
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocaleConfig {
    /// Locales the application can serve, in priority order
    #[serde(default = "default_available_locales")]
    pub available_locales: Vec<String>,

    /// Locale used when nothing in the request matches
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Matching policy applied by the negotiation middleware
    #[serde(default)]
    pub policy: MatchPolicy,

    /// Cookie whose value overrides the browser preferences
    #[serde(default = "default_override_cookie")]
    pub override_cookie: Option<String>,

    /// Emit a `Content-Language` response header
    #[serde(default = "default_content_language")]
    pub content_language: bool,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            available_locales: default_available_locales(),
            default_locale: default_locale(),
            policy: MatchPolicy::default(),
            override_cookie: default_override_cookie(),
            content_language: default_content_language(),
        }
    }
}

impl LocaleConfig {
    /// Create a locale configuration for the given locales
    pub fn new<I, S>(available_locales: I, default_locale: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available_locales: available_locales.into_iter().map(Into::into).collect(),
            default_locale: default_locale.into(),
            ..Default::default()
        }
    }

    /// Set the matching policy
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set or disable the override cookie
    pub fn with_override_cookie(mut self, cookie: Option<&str>) -> Self {
        self.override_cookie = cookie.map(String::from);
        self
    }

    /// Override fields from `AVAILABLE_LOCALES`, `DEFAULT_LOCALE` and `LOCALE_POLICY`
    pub fn merge_env(mut self) -> Self {
        if let Ok(locales) = env::var("AVAILABLE_LOCALES") {
            let locales: Vec<String> = locales
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !locales.is_empty() {
                self.available_locales = locales;
            }
        }
        if let Ok(default_locale) = env::var("DEFAULT_LOCALE") {
            self.default_locale = default_locale;
        }
        if let Some(policy) = env::var("LOCALE_POLICY").ok().and_then(|p| p.parse().ok()) {
            self.policy = policy;
        }
        self
    }
}

fn default_available_locales() -> Vec<String> {
    vec![String::from("en")]
}

fn default_locale() -> String {
    String::from("en")
}

fn default_override_cookie() -> Option<String> {
    Some(String::from("locale"))
}

fn default_content_language() -> bool {
    true
}
