//! pokedex CLI
//!
//! Command-line interface for browsing and editing a CSV-backed Pokemon
//! catalog.

mod commands;
mod error;
mod render;
mod settings;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pokedex_db::{Limit, ListQuery, PokemonStore};

use commands::records::FieldArgs;
pub(crate) use error::CliError;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse and edit a CSV-backed Pokemon catalog", long_about = None)]
struct Cli {
    /// Path to the pokemon CSV file (overrides POKEDEX_DATA and settings)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Field values for create and update.
#[derive(Args, Clone)]
struct RecordFields {
    /// Name (whitespace is collapsed to underscores)
    #[arg(long)]
    name: Option<String>,

    /// Weight, a positive integer
    #[arg(long)]
    weight: Option<String>,

    /// Height, a positive integer
    #[arg(long)]
    height: Option<String>,

    /// Type description (e.g., grass, fire)
    #[arg(long)]
    types: Option<String>,

    /// Absolute URL of the sprite image
    #[arg(long)]
    sprite: Option<String>,
}

impl From<RecordFields> for FieldArgs {
    fn from(fields: RecordFields) -> Self {
        FieldArgs {
            name: fields.name,
            weight: fields.weight,
            height: fields.height,
            types: fields.types,
            sprite: fields.sprite,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty data file containing only the header row
    Init {
        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },

    /// List pokemon, optionally filtered by a name pattern
    List {
        /// Regular expression matched against names
        #[arg(short = 'p', long = "pattern", alias = "q")]
        pattern: Option<String>,

        /// Maximum number of results, or "all"
        #[arg(short, long, default_value_t = Limit::default())]
        limit: Limit,

        /// Number of matching results to skip
        #[arg(short, long, default_value_t = 0)]
        offset: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single pokemon
    Get {
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Add a custom pokemon
    Create {
        #[command(flatten)]
        fields: RecordFields,

        #[arg(long)]
        json: bool,
    },

    /// Edit a custom pokemon; omitted fields keep their current values
    Update {
        id: String,

        #[command(flatten)]
        fields: RecordFields,

        #[arg(long)]
        json: bool,
    },

    /// Remove a custom pokemon
    Delete {
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the resolved data file and settings
    Show,

    /// Print the settings file path
    Path,

    /// Save the data file location in the settings file
    SetData { path: PathBuf },

    /// Remove the saved data file location
    ClearData,
}

/// How a command ended when it did not hit an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    Done,
    /// The store refused the operation (validation or business rule).
    Rejected,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let code = match run(cli) {
        Ok(Status::Done) => 0,
        Ok(Status::Rejected) => 1,
        Err(e) => {
            log::error!("{e}");
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(cli: Cli) -> Result<Status, CliError> {
    let Cli { data, command, .. } = cli;

    let command = match command {
        Commands::Config { action } => {
            return match action {
                ConfigAction::Show => commands::config::run_config_show(data),
                ConfigAction::Path => commands::config::run_config_path(),
                ConfigAction::SetData { path } => commands::config::run_config_set_data(&path),
                ConfigAction::ClearData => commands::config::run_config_clear_data(),
            };
        }
        other => other,
    };

    let (data_path, source) = settings::resolve_data_path(data);
    log::debug!("data file {} ({})", data_path.display(), source.describe());

    let store = PokemonStore::open(&data_path);
    match command {
        Commands::Init { force } => commands::records::run_init(&data_path, force),
        Commands::List {
            pattern,
            limit,
            offset,
            json,
        } => {
            let query = ListQuery {
                pattern,
                limit,
                offset,
            };
            commands::records::run_list(&store, &query, json)
        }
        Commands::Get { id, json } => commands::records::run_get(&store, &id, json),
        Commands::Create { fields, json } => {
            commands::records::run_create(&store, &fields.into(), json)
        }
        Commands::Update { id, fields, json } => {
            commands::records::run_update(&store, &id, &fields.into(), json)
        }
        Commands::Delete { id, json } => commands::records::run_delete(&store, &id, json),
        Commands::Config { .. } => Ok(Status::Done),
    }
}
