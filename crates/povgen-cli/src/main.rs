//! `povgen`: generate, check and inspect the class catalog.

mod commands;
mod logging;

use clap::{Parser, Subcommand};
use commands::CliError;
use povgen_config::Config;
use std::{io, path::PathBuf, process::ExitCode};

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "povgen", version, about = "POV-Ray class generator")]
struct Cli {
    /// Config file; defaults to ./povgen.toml when present.
    #[arg(long, global = true, env = "POVGEN_CONFIG")]
    config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the generated classes.
    Generate {
        /// Output file, overriding the config.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Skip the syntax check of the generated source.
        #[arg(long)]
        no_check: bool,
    },

    /// Validate the schema catalog.
    Check,

    /// List every class in the catalog.
    List,

    /// Show the attributes of one class.
    Describe {
        class: String,

        #[arg(long)]
        json: bool,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover()?,
    };
    logging::init(&config.log, cli.verbose);
    tracing::debug!(?config, "loaded config");

    let mut out = io::stdout().lock();

    match cli.command {
        Command::Generate { out: path, no_check } => {
            commands::generate(&config.generator, path.as_deref(), no_check, &mut out)?;
        }
        Command::Check => commands::check(&mut out)?,
        Command::List => commands::list(&mut out)?,
        Command::Describe { class, json } => commands::describe(&class, json, &mut out)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
