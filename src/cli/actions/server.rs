use crate::{
    api,
    webhook::{Status, Webhook, WebhookConfig},
};
use anyhow::{Context, Result};
use secrecy::SecretString;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub path: String,
    pub username: String,
    pub password: SecretString,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the webhook configuration is invalid or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let config = WebhookConfig::new(args.username, args.password)
        .with_auth_methods(auth_methods)
        .with_password_verify(password_verify);

    let webhook = Webhook::new(config).context("Invalid webhook configuration")?;

    debug!("Webhook: {:?}", webhook);

    api::new(args.port, &args.path, Arc::new(webhook)).await
}

// Demo decision for the "authMethods" action, replace with a lookup in your user store.
fn auth_methods(username: &str) -> Result<Status> {
    debug!("authMethods for {}", username);

    Ok(Status::Exists)
}

// Demo decision for the "passwordVerify" action, replace with a check against your user store.
fn password_verify(username: &str, _password: &str) -> Result<bool> {
    debug!("passwordVerify for {}", username);

    Ok(false)
}
