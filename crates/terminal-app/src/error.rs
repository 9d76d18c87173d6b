// File: crates/terminal-app/src/error.rs
// Summary: Error type for the glue layer (fetching, decoding, release log and config I/O).

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("i/o on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("headline catalogue is empty")]
    EmptyCatalogue,

    #[error("invalid episode: {0}")]
    InvalidEpisode(String),

    #[error(transparent)]
    InvalidColor(#[from] terminal_chart::theme::ParseColorError),
}

impl FeedError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T, E = FeedError> = std::result::Result<T, E>;
