use std::path::Path;

use clap::{Parser, Subcommand};

use jawi_cli::commands::{config_ops, convert_ops, dict_ops, ResourcePaths};

#[derive(Parser)]
#[command(name = "jawitool", about = "Rumi to Jawi conversion tool")]
struct Cli {
    /// Write a JSON trace log into this directory (needs --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text (arguments, or stdin line by line when none are given)
    Convert {
        /// Rumi text; each argument is converted separately
        text: Vec<String>,
        /// JSON dictionary file (optional; letters only without it)
        #[arg(long)]
        dict: Option<String>,
        /// Custom script table TOML
        #[arg(long)]
        script: Option<String>,
        /// Custom settings TOML
        #[arg(long)]
        settings: Option<String>,
    },
    /// Show how each token of the text was converted
    Explain {
        /// Rumi text
        text: String,
        /// JSON dictionary file (optional)
        #[arg(long)]
        dict: Option<String>,
        /// Custom script table TOML
        #[arg(long)]
        script: Option<String>,
        /// Custom settings TOML
        #[arg(long)]
        settings: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show entry counts of a JSON dictionary
    DictStats {
        /// JSON dictionary file
        file: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also list prefixes and suffixes in matching order
        #[arg(long)]
        affixes: bool,
    },
    /// Print the embedded default configuration, or validate a custom one
    Config {
        #[command(subcommand)]
        which: ConfigKind,
    },
}

#[derive(Subcommand)]
enum ConfigKind {
    /// Script tables (letters, digraphs, glyphs, punctuation)
    Script {
        /// Validate this TOML file instead of printing the default
        #[arg(long)]
        validate: Option<String>,
    },
    /// Engine settings (resolver, cache, numerals, shaping)
    Settings {
        /// Validate this TOML file instead of printing the default
        #[arg(long)]
        validate: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        if let Err(e) = jawi_engine::trace_init::init_tracing(Path::new(dir)) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    match cli.command {
        Command::Convert {
            text,
            dict,
            script,
            settings,
        } => {
            let paths = ResourcePaths {
                dict: dict.as_deref(),
                script: script.as_deref(),
                settings: settings.as_deref(),
            };
            convert_ops::convert_cmd(&text, &paths);
        }
        Command::Explain {
            text,
            dict,
            script,
            settings,
            json,
        } => {
            let paths = ResourcePaths {
                dict: dict.as_deref(),
                script: script.as_deref(),
                settings: settings.as_deref(),
            };
            convert_ops::explain_cmd(&text, &paths, json);
        }
        Command::DictStats {
            file,
            json,
            affixes,
        } => dict_ops::stats_cmd(&file, json, affixes),
        Command::Config { which } => match which {
            ConfigKind::Script { validate: Some(file) } => config_ops::script_validate(&file),
            ConfigKind::Script { validate: None } => config_ops::script_export(),
            ConfigKind::Settings { validate: Some(file) } => config_ops::settings_validate(&file),
            ConfigKind::Settings { validate: None } => config_ops::settings_export(),
        },
    }
}
