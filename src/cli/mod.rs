//! Command-line surface: one verb, everything after it passed through untouched.

use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

use crate::error::UsageError;

pub const USAGE: &str = "\
Usage: lavalink-sidecar <command> [runtime-args...]

Commands:
  up      Start the Lavalink container
  down    Force-remove the Lavalink container
  logs    Show the Lavalink container's logs

Any arguments after the command are passed to the container runtime as-is.

Environment (also read from .env and .env.local in the project root):
  LAVALINK_CONTAINER_NAME   container name (default: musicbot2-lavalink)
  LAVALINK_CONTAINER_IMAGE  image reference (default: fredboat/lavalink:master)
  LAVALINK_INTERACTIVE      true = attach a TTY, false = detach
  LAVALINK_PORT             server port (default: 2223)
  LAVALINK_ADDRESS          bind address (default: 0.0.0.0)
  LAVALINK_SERVER_PASSWORD  server password (default: empty)
  CONTAINER_RUNTIME         runtime to use (default: podman if found, else docker)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Up,
    Down,
    Logs,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Up => "up",
            Verb::Down => "down",
            Verb::Logs => "logs",
        }
    }
}

impl FromStr for Verb {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Verb::Up),
            "down" => Ok(Verb::Down),
            "logs" => Ok(Verb::Logs),
            other => Err(UsageError::UnknownVerb(other.to_string())),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub verb: Verb,
    pub passthrough: Vec<OsString>,
}

impl Invocation {
    /// Parse arguments (program name already stripped).
    pub fn parse<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let verb = args.next().ok_or(UsageError::MissingVerb)?;
        let verb = match verb.to_str() {
            Some(s) => s.parse()?,
            None => return Err(UsageError::UnknownVerb(verb.to_string_lossy().into_owned())),
        };
        Ok(Self {
            verb,
            passthrough: args.collect(),
        })
    }
}
