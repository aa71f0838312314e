//! Rumi letter tables and the intermediate code representation.
//!
//! Letters and digraphs are first mapped to opaque intermediate codes so
//! that several spellings converge on one Jawi glyph, then a single
//! code → glyph pass renders the final text. Tables are loaded from TOML.

mod config;
mod table;
mod tables;

pub use config::{parse_script_toml, ScriptConfigError};
pub use table::DEFAULT_SCRIPT_TOML;
pub use tables::{IntermediateCode, ScriptTables};
