use serde::Deserialize;
use serde_json::{Map, Value};

use super::{DictEntry, DictError};

/// Normalized, not yet indexed dictionary data.
#[derive(Debug, Default, Clone)]
pub struct DictionarySource {
    pub roots: Vec<(String, DictEntry)>,
    pub phrases: Vec<(String, DictEntry)>,
    pub prefixes: Vec<(String, DictEntry)>,
    pub suffixes: Vec<(String, DictEntry)>,
    /// Entries skipped for a missing key or value.
    pub malformed: usize,
}

#[derive(Deserialize)]
struct RawDictionary {
    #[serde(default, alias = "kamus")]
    roots: Map<String, Value>,
    #[serde(default, alias = "frasa")]
    phrases: Map<String, Value>,
    #[serde(default, alias = "awalan")]
    prefixes: Map<String, Value>,
    #[serde(default, alias = "akhiran")]
    suffixes: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Plain(String),
    Tagged {
        jawi: String,
        #[serde(default)]
        tag: Option<String>,
    },
}

/// Trim, lowercase and collapse inner whitespace. `None` for blank keys.
pub fn normalize_key(key: &str) -> Option<String> {
    let normalized = key
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ");
    (!normalized.is_empty()).then_some(normalized)
}

/// Parse the JSON dictionary format.
///
/// The top level is an object holding up to four collections (`roots`,
/// `phrases`, `prefixes`, `suffixes`, or their Malay names). Each value is
/// either a Jawi string or `{ "jawi": ..., "tag": ... }`; anything else is
/// counted as malformed and skipped.
pub fn parse_dictionary_json(json: &str) -> Result<DictionarySource, DictError> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(DictError::NotAnObject);
    }
    let raw: RawDictionary = serde_json::from_value(value)?;

    let mut malformed = 0;
    let roots = collect_entries(raw.roots, &mut malformed);
    let phrases = collect_entries(raw.phrases, &mut malformed);
    let prefixes = collect_entries(raw.prefixes, &mut malformed);
    let suffixes = collect_entries(raw.suffixes, &mut malformed);
    Ok(DictionarySource {
        roots,
        phrases,
        prefixes,
        suffixes,
        malformed,
    })
}

fn collect_entries(map: Map<String, Value>, malformed: &mut usize) -> Vec<(String, DictEntry)> {
    let mut out = Vec::with_capacity(map.len());
    for (key, value) in map {
        let entry = match serde_json::from_value::<RawEntry>(value) {
            Ok(RawEntry::Plain(target)) => DictEntry { target, tag: None },
            Ok(RawEntry::Tagged { jawi, tag }) => DictEntry { target: jawi, tag },
            Err(_) => {
                *malformed += 1;
                continue;
            }
        };
        out.push((key, entry));
    }
    out
}
