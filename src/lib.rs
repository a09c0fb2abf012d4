//! # Corbado webhook receiver
//!
//! Corbado calls back into your backend while migrating password-based users
//! to passkeys. Every call is an HTTP `POST` protected with Basic-Auth, carrying
//! the requested action in the `X-Corbado-Action` header:
//!
//! - **`authMethods`**: does the user exist? Answered with `exists` or `not_exists`.
//! - **`passwordVerify`**: is this password valid for the user? Answered with `true` or `false`.
//!
//! The [`webhook`] module holds the framework-agnostic dispatcher. Your backend
//! supplies the two decisions through the [`webhook::AuthMethods`] and
//! [`webhook::PasswordVerify`] callbacks. The [`api`] module mounts the
//! dispatcher on an `axum` router and [`cli`] wires everything into a server.

pub mod api;
pub mod cli;
pub mod webhook;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
