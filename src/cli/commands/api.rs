use crate::api::DEFAULT_BASE_URL;
use clap::{Arg, ArgMatches, Command};
use std::time::Duration;

pub const ARG_URL: &str = "url";
pub const ARG_TIMEOUT: &str = "timeout";

#[derive(Debug, Clone)]
pub struct Options {
    pub url: String,
    pub timeout: Duration,
}

impl Options {
    /// Parse API connection arguments from matches.
    ///
    /// # Errors
    /// Returns an error if the URL is blank.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let url = matches
            .get_one::<String>(ARG_URL)
            .cloned()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --{ARG_URL}"))?;

        let timeout = matches.get_one::<u64>(ARG_TIMEOUT).copied().unwrap_or(10);

        Ok(Self {
            url,
            timeout: Duration::from_secs(timeout),
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_URL)
                .short('u')
                .long(ARG_URL)
                .help("Base URL of the Usuarios API")
                .env("USUARIOS_API_URL")
                .global(true)
                .default_value(DEFAULT_BASE_URL),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long(ARG_TIMEOUT)
                .help("Request timeout in seconds")
                .env("USUARIOS_TIMEOUT")
                .global(true)
                .default_value("10")
                .value_parser(clap::value_parser!(u64).range(1..=300)),
        )
}
