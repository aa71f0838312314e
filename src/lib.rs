//! Host-facing facade for the Rumi→Jawi engine.
//!
//! Wraps `jawi_core` with what a long-lived host needs: a dictionary that
//! is loaded once (single-flight) and shared across threads, an engine that
//! rejects conversions until that dictionary is ready, a bounded cache, and
//! optional tracing to a JSON log file.

mod engine;
mod loader;
pub mod trace_init;

pub use engine::{EngineError, JawiEngine};
pub use loader::{DictionaryCell, LoadState};

pub use jawi_core::cache::ConversionCache;
pub use jawi_core::converter::{Converter, Resolution, TokenTrace};
pub use jawi_core::dict::{DictError, Dictionary, DictionaryStats};
pub use jawi_core::script::ScriptTables;
pub use jawi_core::settings::Settings;

pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
