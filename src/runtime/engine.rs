use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::RuntimeChoice;

/// Pick the container runtime for this invocation.
///
/// An override is used verbatim. Otherwise `path` (a `PATH`-style list) is
/// probed in [`RuntimeChoice::PROBE_ORDER`]. When nothing is found the
/// conventional `docker` is returned and the exec reports the failure.
pub fn select(runtime_override: Option<&str>, path: Option<&OsStr>) -> RuntimeChoice {
    if let Some(program) = runtime_override.filter(|p| !p.is_empty()) {
        debug!(runtime = program, "using runtime override");
        return RuntimeChoice::Override(program.to_string());
    }

    for candidate in RuntimeChoice::PROBE_ORDER {
        if let Some(found) = path.and_then(|p| find_executable(candidate.program(), p)) {
            debug!(runtime = %candidate, path = %found.display(), "detected runtime");
            return candidate;
        }
    }

    debug!("no container runtime found on PATH, falling back to docker");
    RuntimeChoice::Docker
}

/// Locate `name` in a `PATH`-style directory list.
pub fn find_executable(name: &str, path: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir, name))
        .find(|p| is_executable(p))
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name), dir.join(format!("{name}.exe"))]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn install(dir: &Path, name: &str, mode: u32) {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
    }

    #[test]
    fn override_wins_without_probing() {
        let choice = select(Some("podman"), None);
        assert_eq!(choice, RuntimeChoice::Override("podman".into()));
        assert_eq!(choice.program(), "podman");
    }

    #[test]
    fn empty_override_is_ignored() {
        assert_eq!(select(Some(""), None), RuntimeChoice::Docker);
    }

    #[test]
    fn nothing_found_falls_back_to_docker() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(select(None, Some(dir.path().as_os_str())), RuntimeChoice::Docker);
        assert_eq!(select(None, None), RuntimeChoice::Docker);
    }

    #[cfg(unix)]
    #[test]
    fn podman_preferred_over_docker() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        install(a.path(), "docker", 0o755);
        install(b.path(), "podman", 0o755);
        let path = std::env::join_paths([a.path(), b.path()]).unwrap();

        assert_eq!(select(None, Some(&path)), RuntimeChoice::Podman);
    }

    #[cfg(unix)]
    #[test]
    fn docker_used_when_podman_absent() {
        let dir = tempfile::tempdir().unwrap();
        install(dir.path(), "docker", 0o755);
        assert_eq!(
            select(None, Some(dir.path().as_os_str())),
            RuntimeChoice::Docker
        );
    }

    #[cfg(unix)]
    #[test]
    fn override_wins_over_detected_runtime() {
        let dir = tempfile::tempdir().unwrap();
        install(dir.path(), "docker", 0o755);
        install(dir.path(), "podman", 0o755);
        let choice = select(Some("docker"), Some(dir.path().as_os_str()));
        assert_eq!(choice, RuntimeChoice::Override("docker".into()));
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        install(dir.path(), "podman", 0o644);
        std::fs::create_dir(dir.path().join("docker")).unwrap();

        assert_eq!(find_executable("podman", dir.path().as_os_str()), None);
        assert_eq!(find_executable("docker", dir.path().as_os_str()), None);
    }

    #[cfg(unix)]
    #[test]
    fn find_executable_returns_first_match() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        install(a.path(), "podman", 0o755);
        install(b.path(), "podman", 0o755);
        let path = std::env::join_paths([a.path(), b.path()]).unwrap();

        assert_eq!(
            find_executable("podman", &path),
            Some(a.path().join("podman"))
        );
    }
}
