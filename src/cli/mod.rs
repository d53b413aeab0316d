//! CLI module for wsdebug.
//!
//! The dispatcher should be called early in main() to handle informational
//! flags before any terminal or network setup:
//!
//! ```ignore
//! use wsdebug::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     if let Err(e) = result {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(2);
//!     }
//!     std::process::exit(0);
//! }
//! // Run the console
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, LaunchOptions, DEFAULT_WEB_PORT, USAGE};
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::path::Path;

use crate::config::ProfileStore;

/// One line per profile: name, endpoint and template names.
pub fn format_profile_list(store: &ProfileStore) -> String {
    store
        .iter()
        .map(|p| {
            format!(
                "{:<12} {:<32} truncate={:<4} templates: {}",
                p.name,
                p.url,
                p.truncate_at,
                p.templates.names().join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn handle_list_profiles(config_path: Option<&Path>) -> Result<()> {
    let store = ProfileStore::load(config_path)?;
    println!("{}", format_profile_list(&store));
    Ok(())
}

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `Run` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
///
/// The `Version` command never returns as it calls `std::process::exit(0)`.
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::ListProfiles { config_path } => {
            Some(handle_list_profiles(config_path.as_deref()))
        }
        CliCommand::Invalid(msg) => Some(Err(eyre!("{}\n\n{}", msg, USAGE))),
        CliCommand::Run(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_returns_none() {
        let result = run_cli_command(&CliCommand::Run(LaunchOptions::default()));
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_is_an_error() {
        let result = run_cli_command(&CliCommand::Invalid("bad".to_string()));
        let err = result.unwrap().unwrap_err();
        assert!(err.to_string().starts_with("bad"));
    }

    #[test]
    fn test_profile_list_mentions_every_profile() {
        let listing = format_profile_list(&ProfileStore::builtin());
        assert_eq!(listing.lines().count(), 2);
        assert!(listing.contains("local"));
        assert!(listing.contains("ws://127.0.0.1:9039"));
        assert!(listing.contains("handshake, respawn, split, update"));
    }
}
