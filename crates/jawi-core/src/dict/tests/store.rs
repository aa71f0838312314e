use std::io::Write;

use crate::dict::{DictEntry, DictError, Dictionary};

fn pairs(items: &[(&str, &str)]) -> Vec<(String, DictEntry)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), DictEntry::new(*v)))
        .collect()
}

fn sample_dict() -> Dictionary {
    Dictionary::build(
        pairs(&[
            ("luar", "لوار"),
            ("keluar", "کلوار"),
            ("makan", "ماکن"),
            ("Kuala  Lumpur", "کوالا لومڤور"),
        ]),
        pairs(&[("mem", "مم"), ("menge", "مڠ"), ("di", "د"), ("per", "ڤر")]),
        pairs(&[("kan", "کن"), ("an", "ن"), ("nya", "ڽ")]),
    )
}

#[test]
fn test_build_splits_phrases() {
    let dict = sample_dict();
    let stats = dict.stats();
    assert_eq!(stats.roots, 3);
    assert_eq!(stats.phrases, 1);
    assert_eq!(stats.prefixes, 4);
    assert_eq!(stats.suffixes, 3);
    assert_eq!(stats.dropped, 0);
    assert_eq!(dict.phrases().starting_with("kuala")[0].key, "kuala lumpur");
}

#[test]
fn test_find_root_longest_first() {
    let dict = sample_dict();
    let m = dict.find_root("dikeluarkan").unwrap();
    assert_eq!(m.key, "keluar");
    assert_eq!(m.entry.target, "کلوار");
    assert_eq!(m.span, 2..8);
}

#[test]
fn test_find_root_is_substring_search() {
    let dict = sample_dict();
    // "luar" sits inside an unrelated word; the store still reports it.
    let m = dict.find_root("pluarx").unwrap();
    assert_eq!(m.key, "luar");
    assert_eq!(m.span, 1..5);
    assert!(dict.find_root("minum").is_none());
}

#[test]
fn test_find_prefix_prefers_longer() {
    let dict = sample_dict();
    assert_eq!(dict.find_prefix("menge").unwrap().key, "menge");
    assert_eq!(dict.find_prefix("memper").unwrap().key, "per");
    assert!(dict.find_prefix("ber").is_none());
}

#[test]
fn test_find_suffix_prefers_longer() {
    let dict = sample_dict();
    assert_eq!(dict.find_suffix("kannya").unwrap().key, "kan");
    assert_eq!(dict.find_suffix("an").unwrap().key, "an");
    assert!(dict.find_suffix("lah").is_none());
}

#[test]
fn test_keys_are_normalized() {
    let dict = Dictionary::build(pairs(&[("  MAKAN ", "ماکن")]), vec![], vec![]);
    assert_eq!(dict.lookup_root("makan").unwrap().target, "ماکن");
}

#[test]
fn test_malformed_and_duplicates_dropped() {
    let dict = Dictionary::build(
        pairs(&[("makan", "ماکن"), ("Makan", "X"), ("", "Y"), ("nasi", "")]),
        pairs(&[("ter lalu", "ترلالو")]),
        vec![],
    );
    let stats = dict.stats();
    assert_eq!(stats.roots, 1);
    assert_eq!(stats.prefixes, 0);
    assert_eq!(stats.dropped, 4);
    assert_eq!(dict.lookup_root("makan").unwrap().target, "ماکن");
}

#[test]
fn test_empty_store_misses_everything() {
    let dict = Dictionary::empty();
    assert!(dict.is_empty());
    assert!(dict.find_root("makan").is_none());
    assert!(dict.find_prefix("di").is_none());
    assert!(dict.find_suffix("kan").is_none());
    assert!(dict.phrases().starting_with("kuala").is_empty());
}

#[test]
fn test_from_json_with_tags() {
    let json = r#"{
        "kamus": {"makan": {"jawi": "ماکن", "tag": "kk"}, "terima kasih": "تريما کاسيه"},
        "awalan": {"di": "د"},
        "akhiran": {"kan": "کن", "bad": 7}
    }"#;
    let dict = Dictionary::from_json_str(json).unwrap();
    let entry = dict.lookup_root("makan").unwrap();
    assert_eq!(entry.tag.as_deref(), Some("kk"));
    let stats = dict.stats();
    assert_eq!(stats.phrases, 1);
    assert_eq!(stats.dropped, 1);
}

#[test]
fn test_from_json_or_empty_on_garbage() {
    let dict = Dictionary::from_json_or_empty("window.kamus = {makan: 'x'};");
    assert!(dict.is_empty());
}

#[test]
fn test_open_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"roots": {{"nasi": "نسي"}}}}"#).unwrap();
    let dict = Dictionary::open(file.path()).unwrap();
    assert_eq!(dict.lookup_root("nasi").unwrap().target, "نسي");
}

#[test]
fn test_open_missing_file() {
    let err = Dictionary::open(std::path::Path::new("/nonexistent/kamus.json")).unwrap_err();
    assert!(matches!(err, DictError::Io(_)));
}
