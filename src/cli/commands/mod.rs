pub mod logging;
pub mod webhook;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_PORT: &str = "port";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("corbado-webhook")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8000")
                .env("CORBADO_WEBHOOK_PORT")
                .value_parser(clap::value_parser!(u16)),
        );

    let command = webhook::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_VARS: [&str; 5] = [
        "CORBADO_WEBHOOK_PORT",
        "CORBADO_WEBHOOK_PATH",
        "CORBADO_WEBHOOK_USERNAME",
        "CORBADO_WEBHOOK_PASSWORD",
        "CORBADO_WEBHOOK_LOG_LEVEL",
    ];

    fn clean_env() -> Vec<(&'static str, Option<&'static str>)> {
        ENV_VARS.iter().map(|name| (*name, None)).collect()
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "corbado-webhook");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            env!("CARGO_PKG_DESCRIPTION")
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_check_args() {
        temp_env::with_vars(clean_env(), || {
            let matches = new().get_matches_from(vec![
                "corbado-webhook",
                "--port",
                "9000",
                "--path",
                "/hooks/corbado",
                "--username",
                "corbado",
                "--password",
                "secret",
            ]);

            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(9000));
            assert_eq!(
                matches.get_one::<String>(webhook::ARG_PATH).cloned(),
                Some("/hooks/corbado".to_string())
            );
            assert_eq!(
                matches.get_one::<String>(webhook::ARG_USERNAME).cloned(),
                Some("corbado".to_string())
            );
            assert_eq!(
                matches.get_one::<String>(webhook::ARG_PASSWORD).cloned(),
                Some("secret".to_string())
            );
        });
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(clean_env(), || {
            let matches = new().get_matches_from(vec![
                "corbado-webhook",
                "--username",
                "corbado",
                "--password",
                "secret",
            ]);

            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8000));
            assert_eq!(
                matches.get_one::<String>(webhook::ARG_PATH).cloned(),
                Some("/corbadoWebhook".to_string())
            );
            assert_eq!(
                matches
                    .get_one::<u8>(logging::ARG_VERBOSITY)
                    .copied()
                    .unwrap_or(0),
                0
            );
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("CORBADO_WEBHOOK_PORT", Some("443")),
                ("CORBADO_WEBHOOK_PATH", Some("/webhook")),
                ("CORBADO_WEBHOOK_USERNAME", Some("corbado")),
                ("CORBADO_WEBHOOK_PASSWORD", Some("secret")),
                ("CORBADO_WEBHOOK_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["corbado-webhook"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(443));
                assert_eq!(
                    matches.get_one::<String>(webhook::ARG_PATH).cloned(),
                    Some("/webhook".to_string())
                );
                assert_eq!(
                    matches.get_one::<String>(webhook::ARG_USERNAME).cloned(),
                    Some("corbado".to_string())
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_missing_credentials() {
        temp_env::with_vars(clean_env(), || {
            let result = new().try_get_matches_from(vec!["corbado-webhook", "--username", "corbado"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_invalid_path() {
        temp_env::with_vars(clean_env(), || {
            let result = new().try_get_matches_from(vec![
                "corbado-webhook",
                "--path",
                "webhook",
                "--username",
                "corbado",
                "--password",
                "secret",
            ]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars(
                [
                    ("CORBADO_WEBHOOK_LOG_LEVEL", Some(level)),
                    ("CORBADO_WEBHOOK_USERNAME", Some("corbado")),
                    ("CORBADO_WEBHOOK_PASSWORD", Some("secret")),
                ],
                || {
                    let matches = new().get_matches_from(vec!["corbado-webhook"]);
                    assert_eq!(
                        matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                        Some(index as u8)
                    );
                },
            );
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars(clean_env(), || {
                let mut args = vec![
                    "corbado-webhook".to_string(),
                    "--username".to_string(),
                    "corbado".to_string(),
                    "--password".to_string(),
                    "secret".to_string(),
                ];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }
}
