/// Embedded default Rumi → Jawi tables.
pub const DEFAULT_SCRIPT_TOML: &str = include_str!("default_script.toml");
