use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::{
    ADDRESS_VAR, CONTAINER_IMAGE_VAR, CONTAINER_NAME_VAR, INTERACTIVE_VAR, Interactive,
    PASSWORD_VAR, PORT_VAR, RUNTIME_VAR, ResolvedConfig,
};
use crate::error::ConfigSourceError;

/// Base env file, relative to the project root.
pub const BASE_ENV_FILE: &str = ".env";
/// Local override env file, relative to the project root.
pub const LOCAL_ENV_FILE: &str = ".env.local";

const ROOT_MARKER: &str = "Cargo.toml";

/// One layer of key/value configuration.
pub type EnvSource = BTreeMap<String, String>;

/// Find the project root: the nearest ancestor of `start` holding a
/// `Cargo.toml`, or `start` itself when there is none.
pub fn find_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(ROOT_MARKER).is_file())
        .unwrap_or(start)
        .to_path_buf()
}

/// Parse a single env file. A missing file is `Ok(None)`.
pub fn load_env_file(path: &Path) -> Result<Option<EnvSource>, ConfigSourceError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(dotenvy::Error::Io(err)) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "env file not present, skipping");
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigSourceError {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut vars = EnvSource::new();
    for item in iter {
        let (key, value) = item.map_err(|source| ConfigSourceError {
            path: path.to_path_buf(),
            source,
        })?;
        vars.insert(key, value);
    }
    debug!(path = %path.display(), keys = vars.len(), "loaded env file");
    Ok(Some(vars))
}

/// Collect sources in increasing precedence: `.env`, `.env.local`, then `ambient`.
pub fn collect_sources(
    root: &Path,
    ambient: &EnvSource,
) -> Result<Vec<EnvSource>, ConfigSourceError> {
    let mut sources = Vec::with_capacity(3);
    for name in [BASE_ENV_FILE, LOCAL_ENV_FILE] {
        if let Some(vars) = load_env_file(&root.join(name))? {
            sources.push(vars);
        }
    }
    sources.push(ambient.clone());
    Ok(sources)
}

/// Fold `sources` (lowest precedence first) into a resolved config.
///
/// Later sources win per key. Empty values count as unset, so they fall
/// through to the default rather than producing an empty setting.
pub fn resolve(sources: &[EnvSource], project_root: PathBuf) -> ResolvedConfig {
    let mut merged = EnvSource::new();
    for source in sources {
        merged.extend(source.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    let lookup = |key: &str| merged.get(key).map(String::as_str).filter(|v| !v.is_empty());
    let mut cfg = ResolvedConfig::with_defaults(project_root);

    let apply = |key: &str, field: &mut String| {
        if let Some(value) = lookup(key) {
            *field = value.to_string();
        }
    };
    apply(CONTAINER_NAME_VAR, &mut cfg.container_name);
    apply(CONTAINER_IMAGE_VAR, &mut cfg.container_image);
    apply(PORT_VAR, &mut cfg.server_port);
    apply(ADDRESS_VAR, &mut cfg.server_address);
    apply(PASSWORD_VAR, &mut cfg.server_password);

    let interactive = lookup(INTERACTIVE_VAR);
    cfg.interactive = Interactive::from_value(interactive);
    if cfg.interactive == Interactive::Unset
        && let Some(value) = interactive
    {
        debug!(value, "unrecognised {INTERACTIVE_VAR} value, leaving mode to the runtime");
    }

    cfg.runtime_override = lookup(RUNTIME_VAR).map(str::to_string);
    cfg
}

/// Load env files under `root` and resolve them together with `ambient`.
pub fn load(root: &Path, ambient: &EnvSource) -> Result<ResolvedConfig, ConfigSourceError> {
    let sources = collect_sources(root, ambient)?;
    Ok(resolve(&sources, root.to_path_buf()))
}
