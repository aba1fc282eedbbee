//! Shared configuration and common types for the Accept-Language workspace
//!
//! This crate provides functionality used by both the core library and the
//! web integration layer:
//! - Configuration types (environment, server, locale negotiation, logging)
//! - The JSON error body returned by the HTTP layer
//! - The locale matching policy shared between configuration and matcher

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LocaleConfig, LogFormat, LoggingConfig, ServerConfig};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use types::MatchPolicy;
