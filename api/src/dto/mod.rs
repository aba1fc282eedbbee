pub mod locale;

pub use locale::{LocaleQuery, LocaleResponse};
