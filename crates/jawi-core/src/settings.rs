//! Engine settings loaded from TOML, following the same OnceLock pattern as the script tables.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub resolver: ResolverSettings,
    pub cache: CacheSettings,
    pub numerals: NumeralSettings,
    pub shaping: ShapingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResolverSettings {
    pub root_search: RootSearch,
}

/// How a root is located inside a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootSearch {
    /// Longest key occurring anywhere in the word; if its remainders are not
    /// affixes the word goes to fallback.
    FirstMatch,
    /// Try every occurrence of every key, longest first, until one leaves
    /// remainders that decompose into affixes.
    Backtrack,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NumeralSettings {
    /// Wrap numerals in LRI … PDI.
    pub isolate: bool,
    /// Keep a letter run glued to a numeral (`3.5kg`) as-is.
    pub attach_units: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShapingSettings {
    #[serde(default)]
    pub reduplication_mark: String,
    pub hamza: HamzaSettings,
    pub contraction: ContractionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HamzaSettings {
    pub letter: char,
    /// Written instead of the letter when set; the letter is kept otherwise.
    #[serde(default)]
    pub replacement: Option<String>,
    #[serde(default)]
    pub open: String,
    #[serde(default)]
    pub close: String,
    #[serde(default)]
    pub exceptions: Vec<String>,
    #[serde(default)]
    pub always: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContractionSettings {
    /// Converted words that attach to a following vowel-initial word.
    #[serde(default)]
    pub letters: Vec<String>,
    /// Rewrites for the start of the attached word, longest `from` wins.
    #[serde(default)]
    pub carriers: Vec<CarrierRewrite>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarrierRewrite {
    pub from: String,
    pub to: String,
}

impl HamzaSettings {
    /// What a shaped hamza becomes: the replacement (or the letter itself)
    /// between the open and close markers.
    pub fn shaped(&self) -> String {
        let mut out = self.open.clone();
        match &self.replacement {
            Some(r) => out.push_str(r),
            None => out.push(self.letter),
        }
        out.push_str(&self.close);
        out
    }
}

impl ContractionSettings {
    /// Rewrite for the longest carrier `word` starts with.
    pub fn carrier_for(&self, word: &str) -> Option<&CarrierRewrite> {
        self.carriers
            .iter()
            .filter(|c| word.starts_with(c.from.as_str()))
            .max_by_key(|c| c.from.chars().count())
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(cache.capacity);

    if s.shaping.hamza.replacement.as_deref() == Some("") {
        return Err(SettingsError::InvalidValue {
            field: "shaping.hamza.replacement".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    for (i, carrier) in s.shaping.contraction.carriers.iter().enumerate() {
        if carrier.from.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: format!("shaping.contraction.carriers[{i}].from"),
                reason: "must not be empty".to_string(),
            });
        }
    }
    if s.shaping.contraction.letters.iter().any(String::is_empty) {
        return Err(SettingsError::InvalidValue {
            field: "shaping.contraction.letters".to_string(),
            reason: "entries must not be empty".to_string(),
        });
    }

    Ok(())
}
