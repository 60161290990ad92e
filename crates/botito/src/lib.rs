//! Bot-ito - Text Utilities API
//!
//! A small HTTP service exposing echo, slugify and lexicon-based Spanish
//! sentiment scoring behind an optional API key and a per-key usage quota.
//!
//! The scorer in [`sentiment`] is a pure function and usable on its own:
//!
//! ```
//! let result = botito::sentiment::analyze("estoy muy feliz hoy");
//! assert_eq!(result.sentimiento, botito::sentiment::Label::Positivo);
//! ```

pub mod config;
pub mod sentiment;
pub mod server;
pub mod text;
