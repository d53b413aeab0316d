//! Command-line argument parsing for wsdebug.
//!
//! Parsing never fails outright: malformed input becomes
//! [`CliCommand::Invalid`] so the dispatcher can print usage and exit.

use std::path::PathBuf;

use crate::config::{Profile, ProfileStore, LOCAL_PROFILE};
use crate::error::ConsoleResult;

/// Port the web console listens on when `--port` is not given.
pub const DEFAULT_WEB_PORT: u16 = 9040;

pub const USAGE: &str = "\
Usage: wsdebug [OPTIONS]

Options:
  --profile NAME      Console profile to use (default: local)
  --url URL           Override the profile endpoint (also: WSDEBUG_URL)
  --truncate N        Truncate string values longer than N characters
  --config PATH       Profiles file (default: ~/.wsdebug/profiles.json)
  --max-entries N     Keep at most N log entries (default: unbounded)
  --web               Serve the browser console instead of the terminal UI
  --port N            Web console port (default: 9040)
  --list-profiles     Print the available profiles and exit
  -V, --version       Print version and exit
  -h, --help          Print this help and exit";

/// Settings for one console run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    pub profile: String,
    pub url: Option<String>,
    pub truncate_at: Option<usize>,
    pub config_path: Option<PathBuf>,
    pub max_entries: Option<usize>,
    pub web: bool,
    pub port: u16,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            profile: LOCAL_PROFILE.to_string(),
            url: None,
            truncate_at: None,
            config_path: None,
            max_entries: None,
            web: false,
            port: DEFAULT_WEB_PORT,
        }
    }
}

impl LaunchOptions {
    /// Pick the named profile from `store` and apply command-line overrides.
    ///
    /// `--url` wins over `env_url`, which wins over the profile's own URL.
    pub fn resolve_profile(
        &self,
        store: &ProfileStore,
        env_url: Option<String>,
    ) -> ConsoleResult<Profile> {
        let mut profile = store.get(&self.profile)?.clone();

        if let Some(url) = self.url.clone().or(env_url.filter(|u| !u.is_empty())) {
            profile = profile.with_url(url);
        }
        if let Some(n) = self.truncate_at {
            profile = profile.with_truncate_at(n);
        }

        profile.validate()?;
        Ok(profile)
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the known profiles
    ListProfiles { config_path: Option<PathBuf> },
    /// Run the console (default)
    Run(LaunchOptions),
    /// The arguments could not be understood
    Invalid(String),
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("{} expects a number, got '{}'", flag, value))
}

/// Parse command-line arguments and return the appropriate command.
///
/// Both `--flag value` and `--flag=value` are accepted.
///
/// # Examples
///
/// ```
/// use wsdebug::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["wsdebug".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    match parse_inner(args.skip(1)) {
        Ok(command) => command,
        Err(msg) => CliCommand::Invalid(msg),
    }
}

fn parse_inner<I>(mut args: I) -> Result<CliCommand, String>
where
    I: Iterator<Item = String>,
{
    let mut options = LaunchOptions::default();
    let mut list_profiles = false;

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        let mut value = || {
            inline
                .clone()
                .or_else(|| args.next())
                .ok_or_else(|| format!("{} requires a value", flag))
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--list-profiles" => list_profiles = true,
            "--web" => options.web = true,
            "--profile" => options.profile = value()?,
            "--url" => options.url = Some(value()?),
            "--config" => options.config_path = Some(PathBuf::from(value()?)),
            "--truncate" => {
                let n: usize = parse_number(&flag, &value()?)?;
                if n == 0 {
                    return Err("--truncate must be at least 1".to_string());
                }
                options.truncate_at = Some(n);
            }
            "--max-entries" => options.max_entries = Some(parse_number(&flag, &value()?)?),
            "--port" => options.port = parse_number(&flag, &value()?)?,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    if list_profiles {
        return Ok(CliCommand::ListProfiles {
            config_path: options.config_path,
        });
    }

    Ok(CliCommand::Run(options))
}
