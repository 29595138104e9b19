use std::path::PathBuf;

/// Errors that can occur while running extension commands.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing the preferences file failed.
    #[error(transparent)]
    Fs(#[from] bridge_fs::Error),

    /// The selected engine path could not be resolved.
    #[error("cannot resolve MATLAB engine path {path}: {source}")]
    EnginePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
