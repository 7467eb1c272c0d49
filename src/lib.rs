//! Lifecycle manager for the Lavalink sidecar container used by musicbot2.
//!
//! `lavalink-sidecar up|down|logs [args...]` resolves configuration from
//! `.env`, `.env.local` and the process environment, picks podman or docker,
//! and hands the process over to a single runtime invocation.

pub mod cli;
pub mod config;
pub mod error;
pub mod runtime;
pub mod sidecar;
