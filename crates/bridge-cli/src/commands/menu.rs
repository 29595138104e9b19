//! Menu command implementation

use bridge_extension::MenuItem;
use colored::Colorize;

use crate::context::Context;
use crate::error::Result;

use super::{load_extension, terminal};

/// Install the extension into a terminal host and print its menus
pub fn run_menu(context: &Context) -> Result<()> {
    let mut extension = load_extension(context)?;
    let (mut host, mut dialogs) = terminal(context, false);

    extension.install(&mut host, &mut dialogs);

    println!("{} {}", extension.name().bold(), format!("- {}", extension.description()).dimmed());
    println!();
    for (path, items) in host.menus() {
        println!("{}", path.cyan().bold());
        for item in items {
            match item {
                MenuItem::Separator => println!("  {}", "---".dimmed()),
                MenuItem::Action { label, .. } => println!("  {} {}", "+".green(), label),
            }
        }
    }

    Ok(())
}
