use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jawi_core::cache::ConversionCache;
use jawi_core::converter::{Converter, TokenTrace, DEFAULT_MODE};
use jawi_core::dict::{Dictionary, DictionaryStats};
use jawi_core::script::ScriptTables;
use jawi_core::settings::{settings, Settings};

use crate::loader::DictionaryCell;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("dictionary not loaded")]
    NotReady,
    #[error("dictionary load in progress")]
    LoadInProgress,
}

/// A shareable converter: one dictionary cell, one configuration, one cache.
///
/// Conversions issued before the dictionary is ready are rejected with
/// [`EngineError::NotReady`]; after that the engine is safe to call from
/// any number of threads.
pub struct JawiEngine {
    cell: DictionaryCell,
    tables: ScriptTables,
    settings: Settings,
    mode: String,
    cache: Mutex<ConversionCache>,
}

impl Default for JawiEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl JawiEngine {
    /// Global script tables and settings.
    pub fn new() -> Self {
        Self::with_config(ScriptTables::global().clone(), settings().clone())
    }

    pub fn with_config(tables: ScriptTables, settings: Settings) -> Self {
        let cache = ConversionCache::from_settings(&settings);
        Self {
            cell: DictionaryCell::new(),
            tables,
            settings,
            mode: DEFAULT_MODE.to_string(),
            cache: Mutex::new(cache),
        }
    }

    /// Cache label for this configuration.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn tables(&self) -> &ScriptTables {
        &self.tables
    }

    pub fn cell(&self) -> &DictionaryCell {
        &self.cell
    }

    /// Load the dictionary once; see [`DictionaryCell::get_or_load`].
    pub fn load_with<F>(&self, load: F) -> Arc<Dictionary>
    where
        F: FnOnce() -> Result<Dictionary, jawi_core::dict::DictError>,
    {
        self.cell.get_or_load(load)
    }

    pub fn load_json(&self, json: &str) -> Arc<Dictionary> {
        self.load_with(|| Dictionary::from_json_str(json))
    }

    pub fn load_file(&self, path: &Path) -> Arc<Dictionary> {
        self.load_with(|| Dictionary::open(path))
    }

    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn stats(&self) -> Option<DictionaryStats> {
        self.cell.get().map(|dict| dict.stats())
    }

    pub fn convert(&self, text: &str) -> Result<String, EngineError> {
        let dict = self.dictionary()?;
        Ok(self.convert_with(&dict, text))
    }

    /// Convert many independent spans against one dictionary snapshot,
    /// e.g. the text nodes of a document. Output order matches input order.
    pub fn convert_batch<I, S>(&self, spans: I) -> Result<Vec<String>, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dict = self.dictionary()?;
        Ok(spans
            .into_iter()
            .map(|span| self.convert_with(&dict, span.as_ref()))
            .collect())
    }

    pub fn explain(&self, text: &str) -> Result<Vec<TokenTrace>, EngineError> {
        self.with_converter(|conv| conv.explain(text))
    }

    /// Run `f` with a converter bound to the loaded dictionary, for callers
    /// that need more than one-shot conversion (e.g. chunked input). The
    /// engine cache is not consulted.
    pub fn with_converter<R>(
        &self,
        f: impl FnOnce(&Converter<'_>) -> R,
    ) -> Result<R, EngineError> {
        let dict = self.dictionary()?;
        Ok(f(&self.converter(&dict)))
    }

    pub fn cache_len(&self) -> usize {
        self.cache().len()
    }

    pub fn clear_cache(&self) {
        self.cache().clear();
    }

    fn dictionary(&self) -> Result<Arc<Dictionary>, EngineError> {
        self.cell.get().ok_or(EngineError::NotReady)
    }

    fn converter<'a>(&'a self, dict: &'a Dictionary) -> Converter<'a> {
        Converter::new(dict, &self.tables, &self.settings).with_mode(self.mode.as_str())
    }

    fn convert_with(&self, dict: &Dictionary, text: &str) -> String {
        if let Some(hit) = self.cache().get(&self.mode, text) {
            return hit.to_string();
        }
        // Convert outside the lock; a racing thread may insert the same
        // key, which only refreshes an identical value.
        let output = self.converter(dict).convert(text);
        self.cache().insert(&self.mode, text, output.clone());
        output
    }

    fn cache(&self) -> MutexGuard<'_, ConversionCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
