use std::fmt::Write;

use serde::Serialize;

use jawi_core::dict::{Dictionary, DictionaryStats, LengthIndex};

use super::{die, open_dictionary};

#[derive(Debug, Serialize)]
pub struct DictReport<'a> {
    pub file: &'a str,
    #[serde(flatten)]
    pub stats: DictionaryStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affixes: Option<AffixTables<'a>>,
}

/// Affix tables in the order the resolver tries them.
#[derive(Debug, Serialize)]
pub struct AffixTables<'a> {
    pub prefixes: Vec<AffixRow<'a>>,
    pub suffixes: Vec<AffixRow<'a>>,
}

#[derive(Debug, Serialize)]
pub struct AffixRow<'a> {
    pub key: &'a str,
    pub jawi: &'a str,
}

impl<'a> AffixTables<'a> {
    pub fn from_dictionary(dict: &'a Dictionary) -> Self {
        Self {
            prefixes: rows(dict.prefixes()),
            suffixes: rows(dict.suffixes()),
        }
    }
}

fn rows(index: &LengthIndex) -> Vec<AffixRow<'_>> {
    index
        .iter_longest_first()
        .map(|(key, entry)| AffixRow {
            key,
            jawi: &entry.target,
        })
        .collect()
}

pub fn stats_cmd(file: &str, json: bool, affixes: bool) {
    let dict = die!(open_dictionary(file), "Error opening dictionary: {}");
    let report = DictReport {
        file,
        stats: dict.stats(),
        affixes: affixes.then(|| AffixTables::from_dictionary(&dict)),
    };
    if json {
        let rendered = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{rendered}");
    } else {
        print!("{}", format_report(&report));
    }
}

pub fn format_report(report: &DictReport<'_>) -> String {
    let s = &report.stats;
    let mut out = format!(
        "{}\n  roots:    {}\n  phrases:  {}\n  prefixes: {}\n  suffixes: {}\n  dropped:  {}\n",
        report.file, s.roots, s.phrases, s.prefixes, s.suffixes, s.dropped
    );
    if let Some(affixes) = &report.affixes {
        for (title, rows) in [("prefixes", &affixes.prefixes), ("suffixes", &affixes.suffixes)] {
            let _ = writeln!(out, "{title}:");
            for row in rows {
                let _ = writeln!(out, "  {:<10} {}", row.key, row.jawi);
            }
        }
    }
    out
}
