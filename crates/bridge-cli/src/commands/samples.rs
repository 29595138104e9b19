//! Groovy sample and helper script commands

use bridge_extension::{ExtensionHost, MenuAction, MenuItem};
use colored::Colorize;

use crate::context::Context;
use crate::error::{CliError, Result};

use super::{load_extension, terminal};

/// List the bundled Groovy samples by menu label
pub fn run_samples(context: &Context) -> Result<()> {
    let extension = load_extension(context)?;
    let samples = extension.groovy_samples();

    if samples.is_empty() {
        println!("{}", "No Groovy samples found".dimmed());
        return Ok(());
    }

    println!("{}", "Groovy MATLAB samples".bold());
    for item in &samples {
        if let MenuItem::Action {
            label,
            action: MenuAction::ShowScript { name, .. },
        } = item
        {
            println!("  {} {} {}", "+".green(), label.cyan(), format!("({name})").dimmed());
        }
    }
    Ok(())
}

/// Print the sample whose label matches `label`, ignoring case
pub fn run_sample(context: &Context, label: &str) -> Result<()> {
    let mut extension = load_extension(context)?;
    let wanted = label.trim();

    let action = extension
        .groovy_samples()
        .into_iter()
        .find_map(|item| match item {
            MenuItem::Action { label, action } if label.trim().eq_ignore_ascii_case(wanted) => {
                Some(action)
            }
            _ => None,
        })
        .ok_or_else(|| CliError::user(format!("No Groovy sample labelled '{label}'")))?;

    let (mut host, mut dialogs) = terminal(context, false);
    extension.dispatch(&action, &mut host, &mut dialogs)?;
    Ok(())
}

/// Print the Groovy helper script
pub fn run_helper(context: &Context) -> Result<()> {
    let extension = load_extension(context)?;
    let script = extension
        .helper_script()
        .ok_or_else(|| CliError::user("The Groovy helper script is missing from the bundle"))?;

    let (mut host, _) = terminal(context, false);
    host.show_script("QuPathMATLAB.groovy", &script);
    Ok(())
}
