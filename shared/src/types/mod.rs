//! Type definitions shared across crates
//!
//! - `language` - Locale matching policy

pub mod language;

pub use language::MatchPolicy;
