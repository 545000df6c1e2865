pub mod api;
pub mod logging;
pub mod users;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    ColorChoice, Command,
};

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

    let command = Command::new("usuarios")
        .about("User administration for the Usuarios API")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true);

    let command = users::subcommands(command);
    let command = api::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DEFAULT_BASE_URL;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "usuarios");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("User administration for the Usuarios API".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("USUARIOS_API_URL", None::<&str>),
                ("USUARIOS_TIMEOUT", None),
                ("USUARIOS_PAGE_SIZE", None),
                ("USUARIOS_LOG_LEVEL", None),
            ],
            || {
                let matches = new().get_matches_from(vec!["usuarios", "list"]);

                assert_eq!(
                    matches.get_one::<String>(api::ARG_URL).cloned(),
                    Some(DEFAULT_BASE_URL.to_string())
                );
                assert_eq!(matches.get_one::<u64>(api::ARG_TIMEOUT).copied(), Some(10));

                let (name, sub) = matches.subcommand().unwrap();
                assert_eq!(name, users::CMD_LIST);
                assert_eq!(sub.get_one::<usize>(users::ARG_PAGE).copied(), Some(0));
                assert_eq!(sub.get_one::<usize>(users::ARG_PAGE_SIZE).copied(), Some(5));
            },
        );
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let matches = new().get_matches_from(vec![
            "usuarios",
            "delete",
            "7",
            "--yes",
            "--url",
            "https://api.example.com",
            "--timeout",
            "30",
        ]);

        assert_eq!(
            matches.get_one::<String>(api::ARG_URL).cloned(),
            Some("https://api.example.com".to_string())
        );
        assert_eq!(matches.get_one::<u64>(api::ARG_TIMEOUT).copied(), Some(30));

        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<i64>(users::ARG_ID).copied(), Some(7));
        assert!(sub.get_flag(users::ARG_YES));
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("USUARIOS_API_URL", Some("http://10.0.0.5:5298")),
                ("USUARIOS_TIMEOUT", Some("3")),
                ("USUARIOS_PAGE_SIZE", Some("25")),
                ("USUARIOS_LOG_LEVEL", Some("info")),
                ("USUARIOS_LOG_FORMAT", Some("json")),
            ],
            || {
                let matches = new().get_matches_from(vec!["usuarios", "shell"]);

                assert_eq!(
                    matches.get_one::<String>(api::ARG_URL).cloned(),
                    Some("http://10.0.0.5:5298".to_string())
                );
                assert_eq!(matches.get_one::<u64>(api::ARG_TIMEOUT).copied(), Some(3));
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
                assert_eq!(logging::LogFormat::parse(&matches), logging::LogFormat::Json);

                let (_, sub) = matches.subcommand().unwrap();
                assert_eq!(sub.get_one::<usize>(users::ARG_PAGE_SIZE).copied(), Some(25));
            },
        );
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("USUARIOS_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["usuarios".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }
                args.push("list".to_string());

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_rejects_invalid_values() {
        let command = new();
        assert!(command
            .clone()
            .try_get_matches_from(vec!["usuarios", "list", "--page-size", "7"])
            .is_err());
        assert!(command
            .clone()
            .try_get_matches_from(vec!["usuarios", "list", "--page", "0"])
            .is_err());
        assert!(command
            .clone()
            .try_get_matches_from(vec!["usuarios", "edit", "abc"])
            .is_err());
        assert!(command
            .try_get_matches_from(vec!["usuarios", "add", "--name", "Ana"])
            .is_err());
    }
}
