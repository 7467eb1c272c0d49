// Cascading sidecar configuration: `.env`, `.env.local`, then the process environment.

pub mod loader;
pub mod types;

pub use loader::{EnvSource, find_project_root, load, resolve};
pub use types::{Interactive, ResolvedConfig};
