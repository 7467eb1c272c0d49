use std::io;
use std::process::{Command, ExitCode};

use tracing::debug;

use super::types::RuntimeCommand;
use crate::error::ExecError;

/// Hand the process over to `cmd`.
///
/// On Unix the current process image is replaced, so this only returns if
/// the exec itself failed. Elsewhere the child runs with inherited stdio and
/// its exit code is returned for the caller to exit with.
pub fn exec(cmd: &RuntimeCommand) -> Result<ExitCode, ExecError> {
    debug!(command = %redacted(cmd), "handing off to runtime");

    let mut command = Command::new(&cmd.program);
    command.args(&cmd.args);
    handoff(command).map_err(|source| ExecError {
        program: cmd.program.clone(),
        source,
    })
}

#[cfg(unix)]
fn handoff(mut command: Command) -> io::Result<ExitCode> {
    use std::os::unix::process::CommandExt;

    Err(command.exec())
}

#[cfg(not(unix))]
fn handoff(mut command: Command) -> io::Result<ExitCode> {
    let status = command.status()?;
    let code = status.code().unwrap_or(1);
    Ok(ExitCode::from(code as u8))
}

/// Log rendering of `cmd` with any `LAVALINK_SERVER_PASSWORD=` value masked.
fn redacted(cmd: &RuntimeCommand) -> String {
    const PREFIX: &str = "LAVALINK_SERVER_PASSWORD=";

    let mut masked = cmd.clone();
    for arg in &mut masked.args {
        if let Some(value) = arg.to_str().and_then(|a| a.strip_prefix(PREFIX))
            && !value.is_empty()
        {
            *arg = format!("{PREFIX}***").into();
        }
    }
    masked.display()
}
