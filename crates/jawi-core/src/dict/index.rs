use std::collections::HashMap;
use std::ops::Range;

use super::DictEntry;

/// Key → entry map bucketed by key length so that every lookup can walk
/// candidate lengths longest first.
#[derive(Debug, Default, Clone)]
pub struct LengthIndex {
    entries: HashMap<String, DictEntry>,
    /// Distinct key lengths in chars, descending.
    lengths: Vec<usize>,
}

/// A key found inside a larger string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch<'a> {
    pub key: &'a str,
    pub entry: &'a DictEntry,
    /// Byte range of the key in the searched string.
    pub span: Range<usize>,
}

impl LengthIndex {
    /// Build from normalized keys. The first occurrence of a key wins;
    /// returns the index and the number of duplicates dropped.
    pub(super) fn build(pairs: impl IntoIterator<Item = (String, DictEntry)>) -> (Self, usize) {
        let mut entries = HashMap::new();
        let mut duplicates = 0;
        for (key, entry) in pairs {
            if entries.contains_key(&key) {
                duplicates += 1;
                continue;
            }
            entries.insert(key, entry);
        }

        let mut lengths: Vec<usize> = entries.keys().map(|k| k.chars().count()).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        lengths.dedup();

        (Self { entries, lengths }, duplicates)
    }

    pub fn get(&self, key: &str) -> Option<&DictEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All `(key, entry)` pairs, longest key first, then alphabetical.
    pub fn iter_longest_first(&self) -> impl Iterator<Item = (&str, &DictEntry)> {
        let mut pairs: Vec<(&str, &DictEntry)> =
            self.entries.iter().map(|(k, e)| (k.as_str(), e)).collect();
        pairs.sort_by(|a, b| {
            b.0.chars()
                .count()
                .cmp(&a.0.chars().count())
                .then_with(|| a.0.cmp(b.0))
        });
        pairs.into_iter()
    }

    /// Every occurrence of every key inside `text`: longer keys first,
    /// leftmost first among equal lengths.
    pub fn occurrences<'a>(&'a self, text: &'a str) -> impl Iterator<Item = KeyMatch<'a>> + 'a {
        let bounds = char_bounds(text);
        let n = bounds.len() - 1;
        self.lengths
            .iter()
            .copied()
            .filter(move |&len| len <= n)
            .flat_map(move |len| {
                let bounds = bounds.clone();
                (0..=n - len).filter_map(move |start| {
                    let span = bounds[start]..bounds[start + len];
                    self.entry_at(text, span)
                })
            })
    }

    /// Longest key that `text` ends with.
    pub fn longest_suffix_of<'a>(&'a self, text: &'a str) -> Option<KeyMatch<'a>> {
        let bounds = char_bounds(text);
        let n = bounds.len() - 1;
        self.lengths
            .iter()
            .filter(|&&len| len <= n)
            .find_map(|&len| self.entry_at(text, bounds[n - len]..text.len()))
    }

    /// Longest key that `text` starts with.
    pub fn longest_prefix_of<'a>(&'a self, text: &'a str) -> Option<KeyMatch<'a>> {
        let bounds = char_bounds(text);
        let n = bounds.len() - 1;
        self.lengths
            .iter()
            .filter(|&&len| len <= n)
            .find_map(|&len| self.entry_at(text, 0..bounds[len]))
    }

    fn entry_at<'a>(&'a self, text: &str, span: Range<usize>) -> Option<KeyMatch<'a>> {
        self.entries
            .get_key_value(&text[span.clone()])
            .map(|(key, entry)| KeyMatch {
                key: key.as_str(),
                entry,
                span,
            })
    }
}

/// Byte offsets of every char boundary, including the end.
fn char_bounds(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(text.len()))
        .collect()
}
