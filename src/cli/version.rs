//! Version command for wsdebug.

/// The current version of wsdebug, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Handle the --version command.
///
/// Prints the version string and exits successfully.
pub fn handle_version_command() -> ! {
    println!("wsdebug {}", VERSION);
    std::process::exit(0)
}
