//! # Usuarios
//!
//! Administration client for a backend `/Usuarios` REST API.
//!
//! - [`api`] is a thin reqwest client over the five user endpoints. It never
//!   retries; every failure comes back as a typed [`api::ApiError`].
//! - [`table`] owns the in-memory user list, derives the filtered and paginated
//!   view, and reconciles local state after successful create/update/delete calls.
//! - [`render`] turns a page of users into the text table shown by the CLI.
//! - [`cli`] wires the above into one-shot subcommands and an interactive shell.

pub mod api;
pub mod cli;
pub mod render;
pub mod table;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
