//! CLI frontend for the monte weighted-dice simulator.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

use commands::{DieArgs, GameArgs, Stat};

#[derive(Parser)]
#[command(
    name = "mc",
    about = "monte — Monte Carlo runs of weighted dice",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a die's weights and face probabilities
    Die {
        #[command(flatten)]
        die: DieArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Roll an ensemble of identical dice and print every round
    Play {
        #[command(flatten)]
        game: GameArgs,

        /// Table layout: wide or narrow
        #[arg(long, default_value = "wide")]
        form: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Roll an ensemble of identical dice and print statistics
    Analyze {
        #[command(flatten)]
        game: GameArgs,

        /// Which statistic to show
        #[arg(long, value_enum, default_value = "all")]
        stat: Stat,

        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Die { die, json } => commands::die::run(&die, json),
        Commands::Play { game, form, json } => commands::play::run(&game, &form, json),
        Commands::Analyze { game, stat, json } => commands::analyze::run(&game, stat, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
