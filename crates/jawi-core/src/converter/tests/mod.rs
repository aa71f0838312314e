mod basic;

use crate::dict::{DictEntry, Dictionary};
use crate::settings::{parse_settings_toml, Settings, DEFAULT_SETTINGS_TOML};

fn pairs(items: &[(&str, &str)]) -> Vec<(String, DictEntry)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), DictEntry::new(*v)))
        .collect()
}

fn roots(items: &[(&str, &str)]) -> Dictionary {
    Dictionary::build(pairs(items), vec![], vec![])
}

fn default_settings() -> Settings {
    parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap()
}

/// Numerals without directional isolates, for readable assertions.
fn plain_settings() -> Settings {
    let mut s = default_settings();
    s.numerals.isolate = false;
    s
}

/// Hamza wrapped in a raised-span tag pair.
fn marked_settings() -> Settings {
    let mut s = default_settings();
    s.shaping.hamza.open = "<sup>".to_string();
    s.shaping.hamza.close = "</sup>".to_string();
    s
}

fn sample_dict() -> Dictionary {
    Dictionary::build(
        pairs(&[
            ("makan", "ماکن"),
            ("nasi", "نسي"),
            ("luar", "لوار"),
            ("main", "ماٴين"),
            ("ke", "ک"),
            ("di", "د"),
            ("atas", "اتس"),
            ("orang", "اورڠ"),
            ("ibu", "ايبو"),
            ("kanak", "کانق"),
            ("doa", "دوءا"),
            ("kuala lumpur", "کوالا لومڤور"),
        ]),
        pairs(&[("menge", "مڠ"), ("mem", "مم"), ("per", "ڤر"), ("di", "د")]),
        pairs(&[("kan", "کن"), ("nya", "ڽ"), ("an", "ن")]),
    )
}
