//! Export command implementation

use std::path::Path;

use bridge_extension::CommandOutcome;
use bridge_resources::{EntryOutcome, EntryStatus};
use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

use super::{load_extension, terminal};

/// Export the bundled MATLAB scripts to `dir`, or to a prompted directory
pub fn run_export_scripts(context: &Context, dir: Option<&Path>) -> Result<()> {
    let extension = load_extension(context)?;
    let command = extension.export_scripts();

    let outcomes = match dir {
        Some(dir) => command.export_to(dir),
        None => {
            let (_, mut dialogs) = terminal(context, false);
            match command.run(&mut dialogs) {
                CommandOutcome::Exported(outcomes) => outcomes,
                _ => {
                    println!("{}", "Export cancelled".yellow());
                    return Ok(());
                }
            }
        }
    };

    print_outcomes(&outcomes);
    Ok(())
}

fn print_outcomes(outcomes: &[EntryOutcome]) {
    if outcomes.is_empty() {
        println!("{}", "No MATLAB scripts found to export".yellow());
        return;
    }

    let mut written = 0;
    for outcome in outcomes {
        match &outcome.status {
            EntryStatus::Written(path) => {
                written += 1;
                println!("  {} {}", "+".green(), path.display());
            }
            EntryStatus::Skipped(reason) => {
                println!("  {} {} ({})", "!".yellow(), outcome.name, reason.dimmed());
            }
            EntryStatus::Read => {}
        }
    }

    println!();
    println!(
        "{} {} of {} scripts",
        "Exported".green().bold(),
        written,
        outcomes.len()
    );
}
