//! actix-web integration for Accept-Language negotiation
//!
//! Exposes the negotiation middleware, request extension trait and
//! extractors, plus the routes and configuration loader used by the demo
//! server binary.

pub mod config;
pub mod dto;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use middleware::{AcceptLanguage, AcceptLanguageExt, NegotiatedLocale, PreferredLanguages};
