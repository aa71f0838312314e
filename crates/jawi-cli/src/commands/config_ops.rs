use std::fs;

use super::die;

pub fn script_export() {
    print!("{}", jawi_core::script::DEFAULT_SCRIPT_TOML);
}

pub fn script_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let tables = die!(jawi_core::script::parse_script_toml(&content), "Error: {}");
    println!(
        "OK: punctuation ',' -> {:?}, letter 'a' -> {:?}",
        tables.map_punctuation(","),
        tables.letter('a').map(|codes| tables.render_codes(codes))
    );
}

pub fn settings_export() {
    print!("{}", jawi_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        jawi_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: resolver.root_search={:?}, cache.capacity={}, numerals.isolate={}",
        s.resolver.root_search, s.cache.capacity, s.numerals.isolate
    );
}
