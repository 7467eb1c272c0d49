// Lifecycle operations for the Lavalink sidecar: resolve, select, build.

pub mod commands;

use std::ffi::OsStr;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::{Invocation, Verb};
use crate::config::{self, EnvSource};
use crate::runtime::{self, RuntimeCommand};

pub use commands::{down_command, logs_command, up_command};

/// Resolve config and runtime for `invocation` and build its runtime command.
///
/// `cwd` anchors project-root discovery; `ambient` is the process environment
/// and the highest-precedence config source. Nothing is executed here.
pub fn prepare(
    invocation: &Invocation,
    cwd: &Path,
    ambient: &EnvSource,
) -> Result<RuntimeCommand> {
    let root = config::find_project_root(cwd);
    debug!(root = %root.display(), "resolved project root");

    let cfg = config::load(&root, ambient).context("invalid sidecar configuration")?;
    let path = ambient.get("PATH").map(OsStr::new);
    let runtime = runtime::select(cfg.runtime_override.as_deref(), path);

    let build = match invocation.verb {
        Verb::Up => up_command,
        Verb::Down => down_command,
        Verb::Logs => logs_command,
    };
    let cmd = build(&cfg, &runtime, &invocation.passthrough);
    debug!(verb = %invocation.verb, runtime = %runtime, "dispatching");
    Ok(cmd)
}
