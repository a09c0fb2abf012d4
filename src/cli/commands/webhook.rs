use crate::api::DEFAULT_PATH;
use anyhow::{Context, Result};
use clap::{builder::ValueParser, Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const ARG_PATH: &str = "path";
pub const ARG_USERNAME: &str = "username";
pub const ARG_PASSWORD: &str = "password";

#[derive(Debug)]
pub struct Options {
    pub path: String,
    pub username: String,
    pub password: SecretString,
}

impl Options {
    /// # Errors
    /// Returns an error if a required argument is missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let path = matches
            .get_one::<String>(ARG_PATH)
            .cloned()
            .unwrap_or_else(|| DEFAULT_PATH.to_string());
        let username = matches
            .get_one::<String>(ARG_USERNAME)
            .cloned()
            .context("missing required argument: --username")?;
        let password = matches
            .get_one::<String>(ARG_PASSWORD)
            .cloned()
            .map(SecretString::from)
            .context("missing required argument: --password")?;

        Ok(Self {
            path,
            username,
            password,
        })
    }
}

#[must_use]
pub fn validator_path() -> ValueParser {
    ValueParser::from(move |path: &str| -> std::result::Result<String, String> {
        if path.starts_with('/') && path.len() > 1 {
            Ok(path.to_string())
        } else {
            Err("path must start with '/', example: /corbadoWebhook".to_string())
        }
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_PATH)
                .long("path")
                .help("HTTP path the webhook is served on")
                .default_value(DEFAULT_PATH)
                .env("CORBADO_WEBHOOK_PATH")
                .value_parser(validator_path()),
        )
        .arg(
            Arg::new(ARG_USERNAME)
                .short('u')
                .long("username")
                .help("Basic-Auth username configured for the webhook in the Corbado developer panel")
                .env("CORBADO_WEBHOOK_USERNAME")
                .required(true),
        )
        .arg(
            Arg::new(ARG_PASSWORD)
                .long("password")
                .help("Basic-Auth password configured for the webhook in the Corbado developer panel")
                .env("CORBADO_WEBHOOK_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
}
