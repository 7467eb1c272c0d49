use std::path::PathBuf;

pub const CONTAINER_NAME_VAR: &str = "LAVALINK_CONTAINER_NAME";
pub const CONTAINER_IMAGE_VAR: &str = "LAVALINK_CONTAINER_IMAGE";
pub const INTERACTIVE_VAR: &str = "LAVALINK_INTERACTIVE";
pub const PORT_VAR: &str = "LAVALINK_PORT";
pub const ADDRESS_VAR: &str = "LAVALINK_ADDRESS";
pub const PASSWORD_VAR: &str = "LAVALINK_SERVER_PASSWORD";
pub const RUNTIME_VAR: &str = "CONTAINER_RUNTIME";

pub const DEFAULT_CONTAINER_NAME: &str = "musicbot2-lavalink";
pub const DEFAULT_CONTAINER_IMAGE: &str = "fredboat/lavalink:master";
pub const DEFAULT_PORT: &str = "2223";
pub const DEFAULT_ADDRESS: &str = "0.0.0.0";

/// How the container's stdio should be attached on `up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interactive {
    /// `true`: attach a TTY and keep stdin open.
    Foreground,
    /// `false`: run in the background.
    Detached,
    /// Anything else, including absent. The runtime's own default applies.
    #[default]
    Unset,
}

impl Interactive {
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("true") => Interactive::Foreground,
            Some("false") => Interactive::Detached,
            _ => Interactive::Unset,
        }
    }

    /// Runtime flags selected by this mode. At most one mode's flags ever apply.
    pub fn flags(self) -> &'static [&'static str] {
        match self {
            Interactive::Foreground => &["-i", "-t"],
            Interactive::Detached => &["-d"],
            Interactive::Unset => &[],
        }
    }
}

/// Fully resolved sidecar settings. Built once per process, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub project_root: PathBuf,
    pub container_name: String,
    pub container_image: String,
    pub interactive: Interactive,
    pub server_port: String,
    pub server_address: String,
    pub server_password: String,
    pub runtime_override: Option<String>,
}

impl ResolvedConfig {
    /// All defaults, rooted at `project_root`.
    pub fn with_defaults(project_root: PathBuf) -> Self {
        Self {
            project_root,
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
            container_image: DEFAULT_CONTAINER_IMAGE.to_string(),
            interactive: Interactive::Unset,
            server_port: DEFAULT_PORT.to_string(),
            server_address: DEFAULT_ADDRESS.to_string(),
            server_password: String::new(),
            runtime_override: None,
        }
    }
}
