//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// MATLAB Bridge - export MATLAB scripts and link the MATLAB engine
#[derive(Parser, Debug)]
#[command(name = "matlab-bridge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Resource bundle: a zip archive or a directory of scripts
    #[arg(long, global = true, env = "MATLAB_BRIDGE_BUNDLE")]
    pub bundle: Option<PathBuf>,

    /// Directory the host scans for extension libraries
    #[arg(long, global = true, env = "MATLAB_BRIDGE_EXTENSIONS")]
    pub extensions_dir: Option<PathBuf>,

    /// Preferences file (.toml or .json)
    #[arg(long, global = true, env = "MATLAB_BRIDGE_PREFS")]
    pub prefs: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the menus the extension registers
    Menu,

    /// Export the bundled MATLAB scripts
    ///
    /// Examples:
    ///   matlab-bridge export-scripts ~/MATLAB/qupath
    ///   matlab-bridge export-scripts        # prompts for a directory
    ExportScripts {
        /// Destination directory (prompted for when omitted)
        dir: Option<PathBuf>,
    },

    /// Set the path to the MATLAB engine and link it into the extensions directory
    ///
    /// The engine usually lives at <matlabroot>/extern/engines/java/jar/engine.jar.
    SetEngine {
        /// Path to engine.jar (prompted for when omitted)
        file: Option<PathBuf>,

        /// Accept a file not named engine.jar without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Forget the stored MATLAB engine path
    ClearEngine,

    /// Show the stored MATLAB engine path
    Engine,

    /// List the bundled Groovy samples
    Samples,

    /// Print one Groovy sample
    Sample {
        /// Sample label as shown by `samples`
        label: String,
    },

    /// Print the Groovy helper script
    Helper,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
