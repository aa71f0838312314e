use serde::Serialize;
use tracing::debug;

use crate::dict::{Dictionary, KeyMatch};
use crate::script::ScriptTables;
use crate::settings::RootSearch;

use super::fallback::transliterate;

/// How a piece of output was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resolution {
    /// A multi-word dictionary entry.
    Phrase { key: String },
    /// Root plus affixes, all in reading order.
    Dictionary {
        prefixes: Vec<String>,
        root: String,
        suffixes: Vec<String>,
    },
    /// Letter-by-letter transliteration.
    Fallback,
    /// A letter run glued to a numeral, kept verbatim.
    Unit,
}

/// Resolve one word token: dictionary decomposition first, fallback on any
/// miss. Returns the rendered Jawi text.
pub(crate) fn resolve_word(
    dict: &Dictionary,
    tables: &ScriptTables,
    search: RootSearch,
    word: &str,
) -> (String, Resolution) {
    let lower = word.to_lowercase();

    let decomposed = match search {
        RootSearch::FirstMatch => dict
            .find_root(&lower)
            .and_then(|root| decompose(dict, &lower, root)),
        RootSearch::Backtrack => dict
            .root_candidates(&lower)
            .find_map(|root| decompose(dict, &lower, root)),
    };

    match decomposed {
        Some(parts) => {
            let mut intermediate = String::new();
            let pieces = parts
                .prefixes
                .iter()
                .chain([&parts.root])
                .chain(&parts.suffixes);
            for m in pieces {
                intermediate.push_str(&m.entry.target);
            }
            let resolution = Resolution::Dictionary {
                prefixes: keys(&parts.prefixes),
                root: parts.root.key.to_string(),
                suffixes: keys(&parts.suffixes),
            };
            debug!(word = %lower, ?resolution);
            (tables.render(&intermediate), resolution)
        }
        None => {
            debug!(word = %lower, "fallback");
            (transliterate(tables, &lower), Resolution::Fallback)
        }
    }
}

struct Decomposition<'a> {
    prefixes: Vec<KeyMatch<'a>>,
    root: KeyMatch<'a>,
    suffixes: Vec<KeyMatch<'a>>,
}

/// Accept `root` only when the text before it is entirely prefixes and the
/// text after it entirely suffixes.
fn decompose<'a>(
    dict: &'a Dictionary,
    word: &'a str,
    root: KeyMatch<'a>,
) -> Option<Decomposition<'a>> {
    let prefixes = split_prefixes(dict, &word[..root.span.start])?;
    let suffixes = split_suffixes(dict, &word[root.span.end..])?;
    Some(Decomposition {
        prefixes,
        root,
        suffixes,
    })
}

/// Peel prefixes off the right end, longest first; reading order on return.
fn split_prefixes<'a>(dict: &'a Dictionary, mut rest: &'a str) -> Option<Vec<KeyMatch<'a>>> {
    let mut found = Vec::new();
    while !rest.is_empty() {
        let m = dict.find_prefix(rest)?;
        rest = &rest[..m.span.start];
        found.push(m);
    }
    found.reverse();
    Some(found)
}

/// Peel suffixes off the left end, longest first.
fn split_suffixes<'a>(dict: &'a Dictionary, mut rest: &'a str) -> Option<Vec<KeyMatch<'a>>> {
    let mut found = Vec::new();
    while !rest.is_empty() {
        let m = dict.find_suffix(rest)?;
        rest = &rest[m.span.end..];
        found.push(m);
    }
    Some(found)
}

fn keys(matches: &[KeyMatch<'_>]) -> Vec<String> {
    matches.iter().map(|m| m.key.to_string()).collect()
}
