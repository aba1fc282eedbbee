//! Domain layer containing the value objects of language negotiation.

pub mod value_objects;

// Re-export commonly used domain types
pub use value_objects::*;
