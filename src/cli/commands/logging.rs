use clap::{builder::ValueParser, Arg, ArgAction, Command};

pub const ARG_VERBOSITY: &str = "verbosity";

/// Level names accepted by `CORBADO_WEBHOOK_LOG_LEVEL`, indexed by verbosity count.
const LEVEL_NAMES: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Accepts a verbosity count (`0`..=`5`) or a level name, case-insensitive.
#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(|level: &str| -> Result<u8, String> {
        match level.parse::<u8>() {
            Ok(count) if count <= 5 => return Ok(count),
            Ok(_) => return Err(format!("verbosity '{level}' out of range, use 0-5")),
            Err(_) => {}
        }

        LEVEL_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(level))
            .and_then(|index| u8::try_from(index).ok())
            .ok_or_else(|| {
                format!(
                    "unknown log level '{level}', expected one of: {}",
                    LEVEL_NAMES.join(", ")
                )
            })
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Repeat to log more of each webhook call: -v warn, -vv info, -vvv debug (request lines), -vvvv trace")
            .env("CORBADO_WEBHOOK_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(level: &str) -> Result<u8, String> {
        let command = Command::new("corbado-webhook").arg(
            Arg::new("level")
                .long("level")
                .value_parser(validator_log_level()),
        );
        command
            .try_get_matches_from(["corbado-webhook", "--level", level])
            .map(|matches| matches.get_one::<u8>("level").copied().unwrap_or_default())
            .map_err(|err| err.to_string())
    }

    #[test]
    fn accepts_names_in_any_case() {
        assert_eq!(parse("error"), Ok(0));
        assert_eq!(parse("WARN"), Ok(1));
        assert_eq!(parse("Debug"), Ok(3));
    }

    #[test]
    fn accepts_counts_up_to_five() {
        assert_eq!(parse("5"), Ok(5));
        assert!(parse("6").unwrap_err().contains("out of range"));
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(parse("verbose").unwrap_err().contains("unknown log level 'verbose'"));
    }
}
