use std::collections::HashMap;

use super::DictEntry;

/// A multi-word dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    /// Normalized key, words joined by single spaces.
    pub key: String,
    pub words: Vec<String>,
    pub entry: DictEntry,
}

/// Phrases keyed by their first word, most words first.
#[derive(Debug, Default, Clone)]
pub struct PhraseIndex {
    by_first_word: HashMap<String, Vec<Phrase>>,
    len: usize,
}

impl PhraseIndex {
    /// Keys must already be normalized. First occurrence of a key wins;
    /// returns the index and the number of duplicates dropped.
    pub(super) fn build(pairs: impl IntoIterator<Item = (String, DictEntry)>) -> (Self, usize) {
        let mut by_first_word: HashMap<String, Vec<Phrase>> = HashMap::new();
        let mut len = 0;
        let mut duplicates = 0;
        for (key, entry) in pairs {
            let words: Vec<String> = key.split(' ').map(str::to_string).collect();
            let bucket = by_first_word.entry(words[0].clone()).or_default();
            if bucket.iter().any(|p| p.key == key) {
                duplicates += 1;
                continue;
            }
            bucket.push(Phrase { key, words, entry });
            len += 1;
        }
        for bucket in by_first_word.values_mut() {
            bucket.sort_by(|a, b| {
                b.words
                    .len()
                    .cmp(&a.words.len())
                    .then_with(|| b.key.len().cmp(&a.key.len()))
                    .then_with(|| a.key.cmp(&b.key))
            });
        }
        (Self { by_first_word, len }, duplicates)
    }

    /// Candidate phrases whose first word is `word`, longest first.
    pub fn starting_with(&self, word: &str) -> &[Phrase] {
        self.by_first_word
            .get(word)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Phrase> {
        self.by_first_word.values().flatten()
    }
}
