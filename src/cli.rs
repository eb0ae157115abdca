//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use attendance::config::Config;
use attendance::output::OutputMode;

use crate::commands::{self, SubmitArgs};

/// attendance - Employee check-in with GPS and photo integrity checks
#[derive(Parser, Debug)]
#[command(
    name = "attendance",
    version,
    about = "Employee check-in with GPS and photo integrity checks",
    long_about = "Record employee check-ins and flag suspicious ones.\n\n\
                  Each check-in carries a claimed GPS reading and a photo. The photo's\n\
                  embedded location is compared with the claimed one and mismatches\n\
                  are recorded with their reasons."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit a check-in
    Submit(SubmitArgs),

    /// List an employee's recent check-ins
    History {
        /// Employee to list
        #[arg(short, long)]
        employee: i64,

        /// Maximum number of records (defaults to history.limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show a single check-in
    Show {
        /// Record id
        id: i64,

        /// Requesting employee (must own the record)
        #[arg(short, long)]
        employee: i64,
    },

    /// Print the GPS position and capture time embedded in a photo
    Inspect {
        /// Photo to inspect
        photo: PathBuf,
    },

    /// Print the effective configuration
    Config,
}

/// Parse arguments, set up logging and dispatch
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = OutputMode::from_flag(cli.json);

    let load_config = || Config::load(cli.config.as_deref());

    match cli.command {
        Command::Submit(args) => commands::submit(&load_config()?, &args, output_mode),
        Command::History { employee, limit } => {
            commands::history(&load_config()?, employee, limit, output_mode)
        },
        Command::Show { id, employee } => {
            commands::show(&load_config()?, id, employee, output_mode)
        },
        Command::Inspect { photo } => commands::inspect(&photo, output_mode),
        Command::Config => commands::config(&load_config()?, output_mode),
    }
}
