pub mod accept_language;

pub use accept_language::*;
