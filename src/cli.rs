use std::env;

use crate::error::UsageError;

pub const DEFAULT_HUB_USER: &str = "RyanFan";

/// Immutable run configuration. Built once from argv and passed by parameter
/// into every operation; never ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub push_to_hub: bool,
    pub hub_user: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            push_to_hub: false,
            hub_user: DEFAULT_HUB_USER.to_string(),
        }
    }
}

/// Parse the recognized flags: `--push` (arity 0) and `--user <name>`
/// (arity 1, value consumed atomically). Anything else is a usage error.
pub fn parse_args<I>(args: I) -> Result<RunConfig, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = RunConfig::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--push" => config.push_to_hub = true,
            "--user" => {
                config.hub_user = args.next().ok_or(UsageError::MissingUserValue)?;
            }
            other => return Err(UsageError::UnknownOption(other.to_string())),
        }
    }
    Ok(config)
}

pub const USAGE: &str = "Usage: healthpipe [--push] [--user <hub-user>]";

pub fn get_opts() -> RunConfig {
    match parse_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    }
}
