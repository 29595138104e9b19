//! MATLAB Bridge CLI
//!
//! A terminal host for the MATLAB extension: exports the bundled scripts,
//! links the MATLAB engine into an extensions directory and lists samples.

mod cli;
mod commands;
mod context;
mod error;
mod host;
mod logging;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::{Cli, Commands};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let Some(command) = cli.command.clone() else {
        println!("{} MATLAB Bridge CLI", "matlab-bridge".green().bold());
        println!();
        println!("Run {} for available commands.", "matlab-bridge --help".cyan());
        return Ok(());
    };

    if let Commands::Completions { shell } = command {
        clap_complete::generate(shell, &mut Cli::command(), "matlab-bridge", &mut std::io::stdout());
        return Ok(());
    }

    let context = Context::from_cli(&cli)?;
    tracing::debug!(?context, "Resolved context");
    commands::execute(command, &context)
}
