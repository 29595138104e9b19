//! Conventional names used when provisioning scripts and the engine library.

use std::path::Path;

/// Well-known file names and logical resource prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgePath {
    /// The file name MATLAB ships its Java engine under
    EngineJar,
    /// Symbolic link installed into the host's extensions directory
    EngineLink,
    /// Byte copy installed when a link cannot be created
    EngineCopy,
    /// Logical prefix of the bundled MATLAB scripts
    MatlabScripts,
    /// Logical prefix of the bundled Groovy scripts
    GroovyScripts,
    /// The Groovy helper script exposed to host scripts
    HelperScript,
}

impl BridgePath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EngineJar => "engine.jar",
            Self::EngineLink => "matlab_engine",
            Self::EngineCopy => "matlab_engine.jar",
            Self::MatlabScripts => "matlab-qupath/",
            Self::GroovyScripts => "groovy/",
            Self::HelperScript => "groovy/QuPathMATLAB.groovy",
        }
    }
}

impl AsRef<Path> for BridgePath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for BridgePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for BridgePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
