//! Word frequencies over a fixed set of web pages, filtered down to a
//! vocabulary and translated word by word.
//!
//! fetch -> html -> count -> rank -> translate -> record, glued together in
//! [`pipeline::run`].

pub mod config;
pub mod count;
pub mod error;
pub mod fetch;
pub mod html;
pub mod logger;
pub mod pipeline;
pub mod rank;
pub mod record;
pub mod translate;

pub use config::Config;
pub use count::{count_words, WordCount};
pub use error::{Error, Result};
pub use fetch::{Fetch, HttpFetcher};
pub use rank::Ranked;
pub use record::TranslationRecord;
pub use translate::{GoogleTranslator, Translate};
