use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, debug_span, warn};

use super::index::{KeyMatch, LengthIndex};
use super::phrase::PhraseIndex;
use super::source::{normalize_key, parse_dictionary_json, DictionarySource};
use super::{DictEntry, DictError};

/// Root, phrase, prefix and suffix indexes. Read-only once built.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    roots: LengthIndex,
    phrases: PhraseIndex,
    prefixes: LengthIndex,
    suffixes: LengthIndex,
    dropped: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DictionaryStats {
    pub roots: usize,
    pub phrases: usize,
    pub prefixes: usize,
    pub suffixes: usize,
    /// Malformed or duplicate entries skipped during build.
    pub dropped: usize,
}

impl Dictionary {
    /// A store on which every lookup misses; conversion then runs purely
    /// through the fallback transliterator.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn build(
        roots: impl IntoIterator<Item = (String, DictEntry)>,
        prefixes: impl IntoIterator<Item = (String, DictEntry)>,
        suffixes: impl IntoIterator<Item = (String, DictEntry)>,
    ) -> Self {
        Self::from_source(DictionarySource {
            roots: roots.into_iter().collect(),
            prefixes: prefixes.into_iter().collect(),
            suffixes: suffixes.into_iter().collect(),
            ..Default::default()
        })
    }

    /// Normalize keys, drop malformed and duplicate entries, and index.
    ///
    /// Root keys containing whitespace are phrases; single-word phrase keys
    /// are roots. Affix keys must be single words.
    pub fn from_source(source: DictionarySource) -> Self {
        let _span = debug_span!("build_dictionary").entered();

        let mut dropped = source.malformed;
        let mut roots = Vec::with_capacity(source.roots.len());
        let mut phrases = Vec::with_capacity(source.phrases.len());
        for (key, entry) in source.roots.into_iter().chain(source.phrases) {
            match normalize_key(&key) {
                Some(key) if !entry.target.is_empty() => {
                    if key.contains(' ') {
                        phrases.push((key, entry));
                    } else {
                        roots.push((key, entry));
                    }
                }
                _ => dropped += 1,
            }
        }
        let prefixes = normalize_affixes(source.prefixes, &mut dropped);
        let suffixes = normalize_affixes(source.suffixes, &mut dropped);

        let (roots, d1) = LengthIndex::build(roots);
        let (phrases, d2) = PhraseIndex::build(phrases);
        let (prefixes, d3) = LengthIndex::build(prefixes);
        let (suffixes, d4) = LengthIndex::build(suffixes);
        dropped += d1 + d2 + d3 + d4;

        debug!(
            roots = roots.len(),
            phrases = phrases.len(),
            prefixes = prefixes.len(),
            suffixes = suffixes.len(),
            dropped
        );

        Self {
            roots,
            phrases,
            prefixes,
            suffixes,
            dropped,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DictError> {
        parse_dictionary_json(json).map(Self::from_source)
    }

    /// Like `from_json_str`, but an unusable document yields the empty store.
    pub fn from_json_or_empty(json: &str) -> Self {
        Self::from_json_str(json).unwrap_or_else(|e| {
            warn!("dictionary unavailable, converting by letters only: {e}");
            Self::empty()
        })
    }

    pub fn open(path: &Path) -> Result<Self, DictError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Exact root lookup.
    pub fn lookup_root(&self, key: &str) -> Option<&DictEntry> {
        self.roots.get(key)
    }

    /// The first root key, longest first, that occurs anywhere in `word`.
    ///
    /// This is substring search, not whole-word matching: a root may be
    /// found inside an unrelated longer word. The resolver only accepts it
    /// when the remainders decompose into affixes.
    pub fn find_root<'a>(&'a self, word: &'a str) -> Option<KeyMatch<'a>> {
        self.roots.occurrences(word).next()
    }

    /// Every root occurrence in `word`, in `find_root` order.
    pub fn root_candidates<'a>(&'a self, word: &'a str) -> impl Iterator<Item = KeyMatch<'a>> {
        self.roots.occurrences(word)
    }

    /// Longest prefix key that `remainder` ends with.
    pub fn find_prefix<'a>(&'a self, remainder: &'a str) -> Option<KeyMatch<'a>> {
        self.prefixes.longest_suffix_of(remainder)
    }

    /// Longest suffix key that `remainder` starts with.
    pub fn find_suffix<'a>(&'a self, remainder: &'a str) -> Option<KeyMatch<'a>> {
        self.suffixes.longest_prefix_of(remainder)
    }

    pub fn roots(&self) -> &LengthIndex {
        &self.roots
    }

    pub fn phrases(&self) -> &PhraseIndex {
        &self.phrases
    }

    pub fn prefixes(&self) -> &LengthIndex {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &LengthIndex {
        &self.suffixes
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
            && self.phrases.is_empty()
            && self.prefixes.is_empty()
            && self.suffixes.is_empty()
    }

    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            roots: self.roots.len(),
            phrases: self.phrases.len(),
            prefixes: self.prefixes.len(),
            suffixes: self.suffixes.len(),
            dropped: self.dropped,
        }
    }
}

fn normalize_affixes(
    pairs: Vec<(String, DictEntry)>,
    dropped: &mut usize,
) -> Vec<(String, DictEntry)> {
    let mut out = Vec::with_capacity(pairs.len());
    for (key, entry) in pairs {
        match normalize_key(&key) {
            Some(key) if !key.contains(' ') && !entry.target.is_empty() => out.push((key, entry)),
            _ => *dropped += 1,
        }
    }
    out
}
