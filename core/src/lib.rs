//! # HttpAcceptLanguage Core
//!
//! Parses the HTTP `Accept-Language` header into an ordered list of language
//! tags and selects the best supported locale from it.
//!
//! The crate is split into value objects (`domain`), the negotiation services
//! (`services`) and the error taxonomy (`errors`).

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
