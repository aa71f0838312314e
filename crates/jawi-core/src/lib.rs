//! Rumi (Latin-script Malay) to Jawi transliteration engine.
//!
//! The engine is pure and synchronous: given a built [`dict::Dictionary`],
//! a [`script::ScriptTables`] and [`settings::Settings`], conversion is a
//! deterministic function of the input text.

pub mod cache;
pub mod converter;
pub mod dict;
pub mod numeric;
pub mod script;
pub mod settings;
pub mod tokenizer;
pub mod unicode;

pub use cache::ConversionCache;
pub use converter::{convert, ChunkedConverter, Converter, Resolution, TokenTrace};
pub use dict::{DictError, Dictionary};
