//! CLI frontend for the Zhouyi casting engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "zy",
    about = "Zhouyi — cast and read I Ching hexagrams",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a hexagram and print the reading
    Cast {
        /// Divination method: yarrow or coins
        #[arg(short, long, default_value = "yarrow")]
        method: String,

        /// RNG seed for a reproducible cast
        #[arg(short, long)]
        seed: Option<u64>,

        /// Question to attach to the reading
        #[arg(short, long)]
        question: Option<String>,

        /// Print the raw cast result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a hexagram by King Wen number
    Show {
        /// King Wen number (1-64)
        number: u8,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all 64 hexagrams
    List,

    /// Start an interactive divination session
    Session {
        /// RNG seed for reproducible casts
        #[arg(short, long)]
        seed: Option<u64>,

        /// Default divination method: yarrow or coins
        #[arg(short, long, default_value = "yarrow")]
        method: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cast {
            method,
            seed,
            question,
            json,
        } => commands::cast::run(&method, seed, question.as_deref(), json),
        Commands::Show { number, json } => commands::show::run(number, json),
        Commands::List => commands::list::run(),
        Commands::Session { seed, method } => commands::session::run(seed, &method),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
