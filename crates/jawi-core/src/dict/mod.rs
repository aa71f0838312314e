//! Dictionary store: roots, phrases, prefixes and suffixes.
//!
//! `Dictionary` is built once from structured data (never executable
//! source) and is read-only afterwards. Every index answers lookups
//! longest key first.

mod entry;
mod index;
mod phrase;
mod source;
mod store;
#[cfg(test)]
mod tests;

pub use entry::DictEntry;
pub use index::{KeyMatch, LengthIndex};
pub use phrase::{Phrase, PhraseIndex};
pub use source::{normalize_key, parse_dictionary_json, DictionarySource};
pub use store::{Dictionary, DictionaryStats};

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dictionary data must be a JSON object")]
    NotAnObject,
}
