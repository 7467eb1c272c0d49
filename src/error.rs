use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The invocation did not name a known verb. Raised before any I/O.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing command")]
    MissingVerb,
    #[error("unknown command `{0}`")]
    UnknownVerb(String),
}

/// An env file exists but could not be read or parsed.
#[derive(Debug, Error)]
#[error("failed to load {}", path.display())]
pub struct ConfigSourceError {
    pub path: PathBuf,
    #[source]
    pub source: dotenvy::Error,
}

/// The runtime binary could not be started at all.
#[derive(Debug, Error)]
#[error("failed to execute `{program}`")]
pub struct ExecError {
    pub program: String,
    #[source]
    pub source: io::Error,
}

impl ExecError {
    /// Shell conventions: 127 when the program is missing, 126 otherwise.
    pub fn exit_status(&self) -> u8 {
        match self.source.kind() {
            io::ErrorKind::NotFound => 127,
            _ => 126,
        }
    }
}
