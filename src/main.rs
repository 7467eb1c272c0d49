use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use lavalink_sidecar::cli::{Invocation, USAGE};
use lavalink_sidecar::config::EnvSource;
use lavalink_sidecar::{runtime, sidecar};

fn main() -> ExitCode {
    init_tracing();

    // Verb first: usage errors must not touch the filesystem or PATH.
    let invocation = match Invocation::parse(std::env::args_os().skip(1)) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("error: cannot determine working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    let cmd = match sidecar::prepare(&invocation, &cwd, &ambient_env()) {
        Ok(cmd) => cmd,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match runtime::exec(&cmd) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}: {}", err.source);
            ExitCode::from(err.exit_status())
        }
    }
}

/// Logs go to stderr so they never mix with the runtime's own stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Snapshot of the process environment. Non-UTF-8 entries are skipped.
fn ambient_env() -> EnvSource {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
