use std::path::PathBuf;

use clap::{Parser, Subcommand};

use termtable_cli::commands::{config_ops, table_ops};

#[derive(Parser)]
#[command(
    name = "termtool",
    about = "Terminology table tool",
    version = termtable::api::version()
)]
struct Cli {
    /// Settings TOML replacing the embedded defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Character-map TOML merged over the embedded maps
    #[arg(long, global = true)]
    charmaps: Option<String>,
    /// Write JSON traces to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a table, report its size and reading warnings
    Check {
        /// Source YAML file
        file: String,
    },
    /// Print every word with its romanization
    Romanize {
        /// Source YAML file
        file: String,
        /// Only this locale
        #[arg(long)]
        locale: Option<String>,
    },
    /// Print the reading of every eastern term in another locale
    Read {
        /// Source YAML file
        file: String,
        /// Target locale
        #[arg(long)]
        to: String,
    },
    /// Dump the row layout as JSON
    Layout {
        /// Source YAML file
        file: String,
        /// Display locale
        #[arg(long)]
        display: String,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the settings TOML file
        file: String,
    },
    /// Validate a character-map TOML file
    CharmapsValidate {
        /// Path to the character-map TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _trace = cli.trace_dir.as_deref().map(termtable::init_tracing);
    let overrides = table_ops::Overrides {
        settings: cli.settings.as_deref(),
        charmaps: cli.charmaps.as_deref(),
    };

    match cli.command {
        Command::Check { file } => table_ops::check(&file, overrides),
        Command::Romanize { file, locale } => {
            table_ops::romanize(&file, locale.as_deref(), overrides)
        }
        Command::Read { file, to } => table_ops::read(&file, &to, overrides),
        Command::Layout {
            file,
            display,
            pretty,
        } => table_ops::layout(&file, &display, pretty, overrides),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::CharmapsValidate { file } => config_ops::charmaps_validate(&file),
    }
}
