//! VIS CLI — free-fall example driver.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vis")]
#[command(version, about = "VIS — point-mass free-fall example")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drop a body from rest and report its position.
    Fall {
        /// Path to simulation config (TOML). Defaults apply when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Override the fixed timestep (seconds).
        #[arg(long)]
        timestep: Option<f32>,

        /// Override the simulated duration (seconds).
        #[arg(long)]
        end_time: Option<f32>,

        /// Print every N-th step.
        #[arg(long, default_value_t = 60)]
        every: usize,
    },

    /// Parse a number and echo it back.
    Value {
        /// Any floating-point literal.
        value: String,
    },

    /// Validate a simulation config file.
    Validate {
        /// Path to config file.
        path: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fall {
            config,
            timestep,
            end_time,
            every,
        } => commands::fall(config.as_deref(), timestep, end_time, every),
        Commands::Value { value } => commands::value(&value),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
