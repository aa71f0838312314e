const EMBEDDED: &[(&str, &str, &[&str])] = &[
    (
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
        &["resolver", "cache", "numerals", "shaping"],
    ),
    (
        "src/script/default_script.toml",
        include_str!("src/script/default_script.toml"),
        &["codes", "letters", "digraphs", "initial", "final", "punctuation"],
    ),
];

fn main() {
    for (path, content, sections) in EMBEDDED {
        println!("cargo:rerun-if-changed={path}");
        check_sections(path, content, sections);
    }
}

/// Embedded defaults must parse and carry every top-level table.
fn check_sections(path: &str, content: &str, sections: &[&str]) {
    let doc: toml::Table = match content.parse() {
        Ok(doc) => doc,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    for section in sections {
        if !doc.get(*section).is_some_and(toml::Value::is_table) {
            panic!("{path} is missing the [{section}] table");
        }
    }
}
