//! Command-line front end for the Hexwarden table and travel engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "hw",
    about = "Hexwarden: random tables, wandering encounters and hex-crawl travel",
    version,
    propagate_version = true
)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered tables
    Tables {
        /// Only show one category (e.g. reaction, encounter_regional)
        #[arg(short, long)]
        category: Option<String>,

        /// Extra JSON table pack to load
        #[arg(short, long)]
        pack: Option<PathBuf>,
    },

    /// Roll a table by id
    Roll {
        /// Table id (see `hw tables`)
        table: String,

        /// Modifier added to the dice total
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        modifier: i32,

        /// Number of rolls to make
        #[arg(short = 'n', long, default_value = "1")]
        times: u32,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Extra JSON table pack to load
        #[arg(short, long)]
        pack: Option<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Select an encounter table for a situation and roll it
    Encounter(commands::encounter::EncounterArgs),

    /// Walk a route across a hex atlas, day by day
    Travel(commands::travel::TravelArgs),

    /// Check a table pack or hex atlas file
    Validate {
        /// JSON file to check
        file: PathBuf,
    },

    /// Show the tables embedded in a hex atlas
    HexTables {
        /// Hex atlas JSON file
        atlas: PathBuf,

        /// Only show one hex
        #[arg(long)]
        hex: Option<String>,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "warn,hw=info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("HW_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Tables { category, pack } => {
            commands::tables::run(category.as_deref(), pack.as_deref())
        }
        Commands::Roll {
            table,
            modifier,
            times,
            seed,
            pack,
            json,
        } => commands::roll::run(&table, modifier, times, seed, pack.as_deref(), json),
        Commands::Encounter(args) => commands::encounter::run(&args),
        Commands::Travel(args) => commands::travel::run(&args),
        Commands::Validate { file } => commands::validate::run(&file),
        Commands::HexTables { atlas, hex } => commands::hex_tables::run(&atlas, hex.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
