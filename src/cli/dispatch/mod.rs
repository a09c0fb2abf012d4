use crate::cli::{
    actions::{server, Action},
    commands::{webhook, ARG_PORT},
};
use anyhow::Result;

/// Build the action to execute from the parsed arguments.
///
/// # Errors
///
/// Returns an error if a required argument is missing
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let options = webhook::Options::parse(matches)?;

    Ok(Action::Server(server::Args {
        port: matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8000),
        path: options.path,
        username: options.username,
        password: options.password,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    #[test]
    fn test_handler() {
        temp_env::with_vars(
            [
                ("CORBADO_WEBHOOK_PORT", None::<&str>),
                ("CORBADO_WEBHOOK_PATH", None),
                ("CORBADO_WEBHOOK_USERNAME", Some("corbado")),
                ("CORBADO_WEBHOOK_PASSWORD", Some("secret")),
            ],
            || {
                let matches =
                    commands::new().get_matches_from(vec!["corbado-webhook", "--port", "9000"]);
                let Action::Server(args) = handler(&matches).unwrap();

                assert_eq!(args.port, 9000);
                assert_eq!(args.path, "/corbadoWebhook");
                assert_eq!(args.username, "corbado");
                assert_eq!(args.password.expose_secret(), "secret");
            },
        );
    }
}
