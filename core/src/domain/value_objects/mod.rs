//! Value objects representing parsed header data.

pub mod language_range;
pub mod preference_list;

// Re-export commonly used types
pub use language_range::{is_valid_tag, normalize_tag, primary_subtag, LanguageRange};
pub use preference_list::PreferenceList;
