//! Command implementations for bridge-cli

pub mod engine;
pub mod export;
pub mod menu;
pub mod samples;

use bridge_extension::{EnginePathPreference, MatlabExtension};
use bridge_resources::ResourceCatalog;

use crate::cli::Commands;
use crate::context::Context;
use crate::error::Result;
use crate::host::{TerminalDialogs, TerminalHost};

pub use engine::{run_clear_engine, run_engine, run_set_engine};
pub use export::run_export_scripts;
pub use menu::run_menu;
pub use samples::{run_helper, run_sample, run_samples};

/// Run a parsed command against the resolved context
pub fn execute(command: Commands, context: &Context) -> Result<()> {
    match command {
        Commands::Menu => run_menu(context),
        Commands::ExportScripts { dir } => run_export_scripts(context, dir.as_deref()),
        Commands::SetEngine { file, yes } => run_set_engine(context, file.as_deref(), yes),
        Commands::ClearEngine => run_clear_engine(context),
        Commands::Engine => run_engine(context),
        Commands::Samples => run_samples(context),
        Commands::Sample { label } => run_sample(context, &label),
        Commands::Helper => run_helper(context),
        // Handled before a context is resolved
        Commands::Completions { .. } => Ok(()),
    }
}

/// Open the bundle and the stored preferences
pub(crate) fn load_extension(context: &Context) -> Result<MatlabExtension> {
    let catalog = ResourceCatalog::open(&context.bundle);
    let preference = EnginePathPreference::load(context.prefs.as_path())?;
    Ok(MatlabExtension::new(catalog, preference))
}

pub(crate) fn terminal(context: &Context, assume_yes: bool) -> (TerminalHost, TerminalDialogs) {
    (
        TerminalHost::new(&context.extensions_dir),
        TerminalDialogs { assume_yes },
    )
}
