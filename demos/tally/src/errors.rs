use std::path::PathBuf;

use anyerror::AnyError;

/// Error variants related to configuration.
#[derive(Debug, thiserror::Error)]
#[derive(PartialEq, Eq)]
pub enum ConfigError {
    #[error("ParseError: {source} while parsing ({args:?})")]
    ParseError { source: AnyError, args: Vec<String> },

    #[error("log level can not be empty")]
    EmptyLogLevel,

    #[error("snapshot path can not be empty")]
    EmptySnapshotPath,
}

/// Failure to load a cluster snapshot.
#[derive(Debug, thiserror::Error)]
#[derive(PartialEq, Eq)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path:?}: {source}")]
    Io { path: PathBuf, source: AnyError },

    #[error("failed to decode snapshot {path:?}: {source}")]
    Decode { path: PathBuf, source: AnyError },
}
