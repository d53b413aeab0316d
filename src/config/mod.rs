//! Console profiles.
//!
//! A [`Profile`] fixes everything that differs between console variants:
//! endpoint, truncation threshold, clear-after-send behaviour and the
//! template table. Built-in profiles are always available; more can be
//! declared in `~/.wsdebug/profiles.json`:
//!
//! ```json
//! {
//!   "profiles": [
//!     {
//!       "name": "staging",
//!       "url": "wss://staging.example.com:9039",
//!       "truncate_at": 200,
//!       "templates": [{ "name": "list", "body": "{\"command\":\"list\"}" }]
//!     }
//!   ]
//! }
//! ```

pub mod builtin;
pub mod templates;

pub use builtin::{builtin_profiles, feeds_profile, local_profile, FEEDS_PROFILE, LOCAL_PROFILE};
pub use templates::{Template, TemplateSet};

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{ConsoleError, ConsoleResult};

/// The per-user directory name, under the home directory.
pub const CONFIG_DIR: &str = ".wsdebug";

/// The profiles file name.
pub const PROFILES_FILE: &str = "profiles.json";

/// Environment variable that overrides the profile endpoint.
pub const URL_ENV_VAR: &str = "WSDEBUG_URL";

fn default_truncate_at() -> usize {
    50
}

/// One console variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// `ws://` or `wss://` endpoint
    pub url: String,
    /// String values longer than this many characters are truncated in the log
    #[serde(default = "default_truncate_at")]
    pub truncate_at: usize,
    /// Clear the composer after every submit
    #[serde(default)]
    pub clear_on_send: bool,
    #[serde(default)]
    pub templates: TemplateSet,
}

impl Profile {
    /// Check the profile is usable.
    pub fn validate(&self) -> ConsoleResult<()> {
        validate_url(&self.url)?;

        if self.truncate_at == 0 {
            return Err(ConsoleError::Config(format!(
                "profile '{}': truncate_at must be at least 1",
                self.name
            )));
        }

        if let Some(dup) = self.templates.duplicate_name() {
            return Err(ConsoleError::Config(format!(
                "profile '{}': template '{}' is declared twice",
                self.name, dup
            )));
        }

        Ok(())
    }

    /// Replace the endpoint.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Replace the truncation threshold.
    pub fn with_truncate_at(mut self, truncate_at: usize) -> Self {
        self.truncate_at = truncate_at;
        self
    }
}

/// Accept only `ws://host...` and `wss://host...`.
pub fn validate_url(url: &str) -> ConsoleResult<()> {
    let rest = url
        .strip_prefix("ws://")
        .or_else(|| url.strip_prefix("wss://"))
        .ok_or_else(|| ConsoleError::InvalidUrl {
            url: url.to_string(),
            reason: "scheme must be ws:// or wss://",
        })?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() || host.starts_with(':') {
        return Err(ConsoleError::InvalidUrl {
            url: url.to_string(),
            reason: "missing host",
        });
    }

    Ok(())
}

/// `~/.wsdebug`, or `None` if the home directory is unknown.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR))
}

#[derive(Debug, Deserialize)]
struct ProfilesFile {
    #[serde(default)]
    profiles: Vec<Profile>,
}

/// Built-in profiles plus any loaded from disk.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProfileStore {
    /// Only the built-in profiles.
    pub fn builtin() -> Self {
        Self {
            profiles: builtin_profiles(),
        }
    }

    /// Default location of the profiles file.
    pub fn default_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join(PROFILES_FILE))
    }

    /// Load built-ins plus user profiles.
    ///
    /// An explicit `path` must exist. Without one, the default file is read
    /// if present and silently skipped otherwise. A file that exists but does
    /// not parse is always an error.
    pub fn load(path: Option<&Path>) -> ConsoleResult<Self> {
        let mut store = Self::builtin();

        let user_profiles = match path {
            Some(path) => Self::read_file(path)?,
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::read_file(&default)?,
                _ => Vec::new(),
            },
        };

        for profile in user_profiles {
            store.insert(profile)?;
        }

        Ok(store)
    }

    fn read_file(path: &Path) -> ConsoleResult<Vec<Profile>> {
        let file = File::open(path)?;
        let parsed: ProfilesFile = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ConsoleError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(
            "Loaded {} profile(s) from {}",
            parsed.profiles.len(),
            path.display()
        );
        Ok(parsed.profiles)
    }

    /// Add a profile, replacing any existing one with the same name.
    pub fn insert(&mut self, profile: Profile) -> ConsoleResult<()> {
        profile.validate()?;
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> ConsoleResult<&Profile> {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ConsoleError::UnknownProfile(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_profiles(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("ws://127.0.0.1:9039").is_ok());
        assert!(validate_url("wss://example.com/socket?x=1").is_ok());
        assert!(matches!(
            validate_url("http://example.com"),
            Err(ConsoleError::InvalidUrl { .. })
        ));
        assert!(matches!(
            validate_url("ws://"),
            Err(ConsoleError::InvalidUrl { reason: "missing host", .. })
        ));
        assert!(matches!(
            validate_url("ws://:9039"),
            Err(ConsoleError::InvalidUrl { reason: "missing host", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_threshold() {
        let profile = local_profile().with_truncate_at(0);
        assert!(matches!(profile.validate(), Err(ConsoleError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_duplicate_templates() {
        let mut profile = local_profile();
        profile.templates = TemplateSet::from_pairs([("a", "1"), ("a", "2")]);
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("template 'a' is declared twice"));
    }

    #[test]
    fn test_builtin_store() {
        let store = ProfileStore::builtin();
        assert_eq!(store.names(), vec!["local", "feeds"]);
        assert_eq!(store.get("local").unwrap().truncate_at, 50);
        assert!(matches!(
            store.get("nope"),
            Err(ConsoleError::UnknownProfile(_))
        ));
    }

    #[test]
    fn test_load_explicit_file() {
        let file = write_profiles(
            r#"{"profiles":[{"name":"staging","url":"wss://staging.example.com","templates":[{"name":"list","body":"{}"}]}]}"#,
        );

        let store = ProfileStore::load(Some(file.path())).unwrap();
        let staging = store.get("staging").unwrap();
        assert_eq!(staging.truncate_at, 50);
        assert!(!staging.clear_on_send);
        assert_eq!(staging.templates.names(), vec!["list"]);
        // Built-ins are still there
        assert!(store.get("feeds").is_ok());
    }

    #[test]
    fn test_user_profile_overrides_builtin() {
        let file = write_profiles(
            r#"{"profiles":[{"name":"local","url":"ws://10.0.0.5:9039","truncate_at":80}]}"#,
        );

        let store = ProfileStore::load(Some(file.path())).unwrap();
        let local = store.get("local").unwrap();
        assert_eq!(local.url, "ws://10.0.0.5:9039");
        assert_eq!(local.truncate_at, 80);
        assert!(local.templates.is_empty());
        assert_eq!(store.names().len(), 2);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(
            ProfileStore::load(Some(&missing)),
            Err(ConsoleError::Io(_))
        ));
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let file = write_profiles("{ not json");
        assert!(matches!(
            ProfileStore::load(Some(file.path())),
            Err(ConsoleError::Config(_))
        ));
    }

    #[test]
    fn test_load_invalid_profile_fails() {
        let file = write_profiles(r#"{"profiles":[{"name":"bad","url":"http://x"}]}"#);
        assert!(matches!(
            ProfileStore::load(Some(file.path())),
            Err(ConsoleError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_with_overrides() {
        let profile = feeds_profile()
            .with_url("ws://localhost:1234")
            .with_truncate_at(10);
        assert_eq!(profile.url, "ws://localhost:1234");
        assert_eq!(profile.truncate_at, 10);
        assert_eq!(profile.name, "feeds");
    }
}
