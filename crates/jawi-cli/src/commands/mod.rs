pub mod config_ops;
pub mod convert_ops;
pub mod dict_ops;

use std::fs;
use std::path::{Path, PathBuf};

use jawi_core::dict::{DictError, Dictionary};
use jawi_core::script::{parse_script_toml, ScriptConfigError, ScriptTables};
use jawi_core::settings::{parse_settings_toml, settings, Settings, SettingsError};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
pub(crate) use die;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Dict { path: PathBuf, source: DictError },
    #[error("{}: {source}", path.display())]
    Script {
        path: PathBuf,
        source: ScriptConfigError,
    },
    #[error("{}: {source}", path.display())]
    Settings { path: PathBuf, source: SettingsError },
}

/// Optional override files shared by the conversion commands.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResourcePaths<'a> {
    pub dict: Option<&'a str>,
    pub script: Option<&'a str>,
    pub settings: Option<&'a str>,
}

/// Script tables and settings from the given files, or the embedded
/// defaults.
pub fn load_config(paths: &ResourcePaths<'_>) -> Result<(ScriptTables, Settings), CliError> {
    let tables = match paths.script {
        Some(path) => {
            let content = read(path)?;
            parse_script_toml(&content).map_err(|source| CliError::Script {
                path: path.into(),
                source,
            })?
        }
        None => ScriptTables::global().clone(),
    };
    let settings = match paths.settings {
        Some(path) => {
            let content = read(path)?;
            parse_settings_toml(&content).map_err(|source| CliError::Settings {
                path: path.into(),
                source,
            })?
        }
        None => settings().clone(),
    };
    Ok((tables, settings))
}

pub fn open_dictionary(path: &str) -> Result<Dictionary, CliError> {
    Dictionary::open(Path::new(path)).map_err(|source| CliError::Dict {
        path: path.into(),
        source,
    })
}

fn read(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.into(),
        source,
    })
}
