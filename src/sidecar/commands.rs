use std::ffi::OsString;
use std::path::Path;

use crate::config::ResolvedConfig;
use crate::runtime::{RuntimeChoice, RuntimeCommand};

/// Host-side Lavalink config, relative to the project root.
pub const HOST_CONFIG_FILE: &str = "lavalink/application.yml";
/// Where the Lavalink image reads its config from.
pub const CONTAINER_CONFIG_FILE: &str = "/opt/Lavalink/application.yml";

/// Build a `run` command that starts the sidecar.
///
/// Passthrough arguments go after our own flags and before the image, so
/// callers can add or override runtime options.
pub fn up_command(
    cfg: &ResolvedConfig,
    runtime: &RuntimeChoice,
    passthrough: &[OsString],
) -> RuntimeCommand {
    RuntimeCommand::new(runtime)
        .args(["run", "--rm"])
        .args(["-e".into(), format!("SERVER_PORT={}", cfg.server_port)])
        .args(["-e".into(), format!("SERVER_ADDRESS={}", cfg.server_address)])
        .args([
            "-e".into(),
            format!("LAVALINK_SERVER_PASSWORD={}", cfg.server_password),
        ])
        .args(["--network", "host"])
        .arg("-v")
        .arg(config_mount(&cfg.project_root))
        .args(["--name", cfg.container_name.as_str()])
        .args(cfg.interactive.flags().iter().copied())
        .args(passthrough.iter().cloned())
        .arg(cfg.container_image.as_str())
}

/// Build a forced `rm` of the sidecar container.
pub fn down_command(
    cfg: &ResolvedConfig,
    runtime: &RuntimeChoice,
    passthrough: &[OsString],
) -> RuntimeCommand {
    RuntimeCommand::new(runtime)
        .args(["rm", "-f"])
        .args(passthrough.iter().cloned())
        .arg(cfg.container_name.as_str())
}

/// Build a `logs` command for the sidecar container.
pub fn logs_command(
    cfg: &ResolvedConfig,
    runtime: &RuntimeChoice,
    passthrough: &[OsString],
) -> RuntimeCommand {
    RuntimeCommand::new(runtime)
        .arg("logs")
        .args(passthrough.iter().cloned())
        .arg(cfg.container_name.as_str())
}

/// `<root>/lavalink/application.yml:/opt/Lavalink/application.yml:ro`
fn config_mount(root: &Path) -> OsString {
    let mut mount = root.join(HOST_CONFIG_FILE).into_os_string();
    mount.push(":");
    mount.push(CONTAINER_CONFIG_FILE);
    mount.push(":ro");
    mount
}
