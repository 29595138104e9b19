//! Engine path commands

use std::path::Path;

use bridge_extension::CommandOutcome;
use bridge_resources::LinkInstallationResult;
use colored::Colorize;

use crate::context::Context;
use crate::error::{CliError, Result};

use super::{load_extension, terminal};

/// Store the MATLAB engine path and link it into the extensions directory
pub fn run_set_engine(context: &Context, file: Option<&Path>, assume_yes: bool) -> Result<()> {
    let mut extension = load_extension(context)?;
    let (mut host, mut dialogs) = terminal(context, assume_yes);

    extension.preference_mut().subscribe(|path| match path {
        Some(path) => println!("{} {}", "Engine path:".dimmed(), path.display()),
        None => println!("{}", "Engine path cleared".dimmed()),
    });

    let mut command = extension.set_engine_path();
    let outcome = match file {
        Some(file) => command.set_engine(file, &mut host, &mut dialogs)?,
        None => command.run(&mut host, &mut dialogs)?,
    };

    match outcome {
        CommandOutcome::EngineSet(Some(result)) => report_installation(&result),
        CommandOutcome::EngineSet(None) => Ok(()),
        _ => {
            println!("{}", "MATLAB engine not changed".yellow());
            Ok(())
        }
    }
}

fn report_installation(result: &LinkInstallationResult) -> Result<()> {
    match result {
        LinkInstallationResult::Linked(path) => {
            println!("{} {}", "Linked".green().bold(), path.display());
            Ok(())
        }
        LinkInstallationResult::Copied { path, checksum } => {
            println!("{} {}", "Copied".green().bold(), path.display());
            println!("  {} {}", "checksum:".dimmed(), checksum);
            Ok(())
        }
        LinkInstallationResult::Failed(_) => Err(CliError::user(
            "MATLAB engine could not be added to the extensions directory",
        )),
    }
}

/// Forget the stored engine path; installed links are left in place
pub fn run_clear_engine(context: &Context) -> Result<()> {
    let mut extension = load_extension(context)?;
    if extension.preference_mut().clear()? {
        println!("{}", "MATLAB engine path cleared".green());
    } else {
        println!("{}", "No MATLAB engine path set".dimmed());
    }
    Ok(())
}

/// Show the stored engine path
pub fn run_engine(context: &Context) -> Result<()> {
    let extension = load_extension(context)?;
    match extension.preference().get() {
        Some(path) => {
            let state = if path.is_file() {
                "found".green()
            } else {
                "missing".red()
            };
            println!("{} ({})", path.display(), state);
        }
        None => {
            println!("{}", "No MATLAB engine path set".dimmed());
            println!();
            println!("Run {} to set one.", "matlab-bridge set-engine".cyan());
        }
    }
    Ok(())
}
