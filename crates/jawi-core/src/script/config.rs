use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::tables::{IntermediateCode, ScriptTables, MAX_CODES};

#[derive(Deserialize)]
struct ScriptConfig {
    codes: BTreeMap<String, String>,
    letters: BTreeMap<String, String>,
    #[serde(default)]
    digraphs: BTreeMap<String, String>,
    #[serde(default)]
    initial: InitialConfig,
    #[serde(default, rename = "final")]
    finals: BTreeMap<String, String>,
    #[serde(default)]
    punctuation: BTreeMap<String, String>,
}

#[derive(Deserialize, Default)]
struct InitialConfig {
    #[serde(default)]
    front: Vec<String>,
    #[serde(default)]
    front_codes: String,
    #[serde(default)]
    back: Vec<String>,
    #[serde(default)]
    back_codes: String,
    /// Let a digraph open a word instead of mapping the first letter alone.
    #[serde(default)]
    digraphs: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[letters] table is empty")]
    Empty,
    #[error("not a single lowercase letter: {0}")]
    InvalidLetter(String),
    #[error("digraph must be two or more lowercase letters: {0}")]
    InvalidDigraph(String),
    #[error("unknown code `{code}` referenced by {key}")]
    UnknownCode { key: String, code: String },
    #[error("empty glyph for code: {0}")]
    EmptyGlyph(String),
    #[error("punctuation key must be one non-alphanumeric character: {0}")]
    InvalidPunctuation(String),
    #[error("too many codes: {0}")]
    TooManyCodes(usize),
    #[error("script tables already initialized")]
    AlreadyInitialized,
}

/// Parse and validate TOML text into ready-to-use `ScriptTables`.
pub fn parse_script_toml(toml_str: &str) -> Result<ScriptTables, ScriptConfigError> {
    let config: ScriptConfig =
        toml::from_str(toml_str).map_err(|e| ScriptConfigError::Parse(e.to_string()))?;

    if config.letters.is_empty() {
        return Err(ScriptConfigError::Empty);
    }

    if config.codes.len() > MAX_CODES {
        return Err(ScriptConfigError::TooManyCodes(config.codes.len()));
    }

    // Codes are numbered in BTreeMap order, so the assignment is stable
    // for a given table.
    let mut code_ids: HashMap<&str, IntermediateCode> = HashMap::new();
    let mut codes = Vec::with_capacity(config.codes.len());
    for (index, (name, glyph)) in config.codes.iter().enumerate() {
        if glyph.is_empty() {
            return Err(ScriptConfigError::EmptyGlyph(name.clone()));
        }
        code_ids.insert(name.as_str(), IntermediateCode::from_index(index));
        codes.push((name.clone(), glyph.clone()));
    }

    let resolve = |key: &str, value: &str| -> Result<Vec<IntermediateCode>, ScriptConfigError> {
        value
            .split_whitespace()
            .map(|name| {
                code_ids
                    .get(name)
                    .copied()
                    .ok_or_else(|| ScriptConfigError::UnknownCode {
                        key: key.to_string(),
                        code: name.to_string(),
                    })
            })
            .collect()
    };

    let mut letters = HashMap::new();
    for (key, value) in &config.letters {
        let letter =
            single_letter(key).ok_or_else(|| ScriptConfigError::InvalidLetter(key.clone()))?;
        letters.insert(letter, resolve(&format!("letters.{key}"), value)?);
    }

    let mut digraphs = Vec::with_capacity(config.digraphs.len());
    for (key, value) in &config.digraphs {
        let chars: Vec<char> = key.chars().collect();
        if chars.len() < 2 || !chars.iter().all(|&c| is_lowercase_letter(c)) {
            return Err(ScriptConfigError::InvalidDigraph(key.clone()));
        }
        digraphs.push((chars, resolve(&format!("digraphs.{key}"), value)?));
    }

    let vowel_class = |keys: &[String]| -> Result<Vec<char>, ScriptConfigError> {
        keys.iter()
            .map(|k| {
                single_letter(k).ok_or_else(|| ScriptConfigError::InvalidLetter(k.clone()))
            })
            .collect()
    };
    let front_vowels = vowel_class(&config.initial.front)?;
    let back_vowels = vowel_class(&config.initial.back)?;
    let front_codes = resolve("initial.front_codes", &config.initial.front_codes)?;
    let back_codes = resolve("initial.back_codes", &config.initial.back_codes)?;

    let mut finals = HashMap::new();
    for (key, value) in &config.finals {
        let letter =
            single_letter(key).ok_or_else(|| ScriptConfigError::InvalidLetter(key.clone()))?;
        finals.insert(letter, resolve(&format!("final.{key}"), value)?);
    }

    let mut punctuation = HashMap::new();
    for (key, value) in &config.punctuation {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_alphanumeric() => {
                punctuation.insert(c, value.clone());
            }
            _ => return Err(ScriptConfigError::InvalidPunctuation(key.clone())),
        }
    }

    Ok(ScriptTables::from_parts(
        codes,
        letters,
        digraphs,
        (front_vowels, front_codes),
        (back_vowels, back_codes),
        finals,
        punctuation,
    )
    .with_initial_digraphs(config.initial.digraphs))
}

fn is_lowercase_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_uppercase()
}

fn single_letter(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_lowercase_letter(c) => Some(c),
        _ => None,
    }
}
