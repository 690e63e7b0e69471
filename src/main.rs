//! `coderun`: run a source file with the interpreter or compiler for its language.

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use code_runner::{logging, Config};
use commands::config::{cmd_config, ConfigAction};
use commands::languages::cmd_languages;
use commands::run::{cmd_resolve, cmd_run};

#[derive(Parser)]
#[command(name = "coderun", about = "Run a source file with the interpreter or compiler for its language")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the command for a file and run it in a shell
    Run {
        file: PathBuf,

        /// File type name, used as the language key when the file has no extension
        #[arg(long = "type", value_name = "NAME")]
        type_name: Option<String>,

        /// Print the command instead of running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the command that would run a file
    Resolve {
        file: PathBuf,

        /// File type name, used as the language key when the file has no extension
        #[arg(long = "type", value_name = "NAME")]
        type_name: Option<String>,
    },

    /// List every known language and its command template
    Languages,

    /// Manage code-runner configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Run { file, type_name, dry_run } => {
            let config = Config::load()?;
            cmd_run(&config, &config.registry(), &file, type_name.as_deref(), dry_run)
        }
        Commands::Resolve { file, type_name } => {
            let registry = Config::load()?.registry();
            cmd_resolve(&registry, &file, type_name.as_deref())
        }
        Commands::Languages => {
            cmd_languages(&Config::load()?.registry());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config { action } => {
            cmd_config(action)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
