//! Application settings and configuration types.
//!
//! Settings are persisted to `~/.config/graphbook/settings.json` (or XDG
//! equivalent) and loaded at startup. A missing or unreadable file falls
//! back to defaults with a warning rather than failing startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::graph::ApiVersion;

/// Top-level application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graph endpoint configuration.
    pub graph: GraphSettings,
    /// Token acquisition configuration.
    pub auth: AuthSettings,
    /// Values substituted into sample request payloads.
    pub demo: DemoSettings,
}

/// Graph endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    /// Base URL of the Graph endpoint.
    pub base_url: String,
    /// API version path segment appended to every request.
    pub version: ApiVersion,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            base_url: "https://graph.microsoft.com".to_string(),
            version: ApiVersion::V1,
            timeout_seconds: 30,
        }
    }
}

/// Token acquisition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Environment variable holding the bearer token.
    pub token_env: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            token_env: "GRAPH_ACCESS_TOKEN".to_string(),
        }
    }
}

/// Values substituted into sample request payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Recipient address for the send-mail snippet. When absent the snippet
    /// sends an empty address and the request fails remotely, not locally.
    pub send_mail_recipient: Option<String>,
    /// Tenant domain used to build principal names for created users.
    pub tenant_domain: String,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            send_mail_recipient: None,
            tenant_domain: "example.com".to_string(),
        }
    }
}

impl Settings {
    /// Default on-disk location for the settings file.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "graphbook")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Loads settings from the default location, falling back to defaults
    /// when the file is missing or unreadable.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("could not determine config directory, using default settings");
                Self::default()
            }
        }
    }

    /// Loads settings from an explicit path, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "invalid settings file, using defaults");
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Saves settings to the default location as pretty-printed JSON.
    pub fn save(&self) -> std::io::Result<()> {
        let path = Self::default_path().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not determine config directory",
            )
        })?;
        self.save_to(&path)
    }

    /// Saves settings to an explicit path as pretty-printed JSON.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_point_at_v1_endpoint() {
        let settings = Settings::default();
        assert_eq!(settings.graph.base_url, "https://graph.microsoft.com");
        assert_eq!(settings.graph.version, ApiVersion::V1);
        assert_eq!(settings.graph.timeout_seconds, 30);
        assert_eq!(settings.auth.token_env, "GRAPH_ACCESS_TOKEN");
        assert_eq!(settings.demo.send_mail_recipient, None);
        assert_eq!(settings.demo.tenant_domain, "example.com");
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.graph.version = ApiVersion::Beta;
        settings.demo.send_mail_recipient = Some("sample@fabrikam.com".to_string());
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.graph.version, ApiVersion::Beta);
        assert_eq!(
            loaded.demo.send_mail_recipient,
            Some("sample@fabrikam.com".to_string())
        );
    }

    #[test]
    fn save_writes_where_load_reads() {
        let path = Settings::default_path().expect("config directory");
        let previous = std::fs::read_to_string(&path).ok();

        let mut settings = Settings::default();
        settings.demo.tenant_domain = "roundtrip.example.com".to_string();
        settings.save().unwrap();
        let loaded = Settings::load();
        assert_eq!(loaded.demo.tenant_domain, "roundtrip.example.com");

        match previous {
            Some(contents) => std::fs::write(&path, contents).unwrap(),
            None => std::fs::remove_file(&path).unwrap(),
        }
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Settings::load_from(&dir.path().join("nope.json"));
        assert_eq!(loaded.graph.base_url, "https://graph.microsoft.com");
    }

    #[test]
    fn invalid_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.graph.version, ApiVersion::V1);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"graph":{"version":"beta"}}"#).unwrap();
        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.graph.version, ApiVersion::Beta);
        assert_eq!(loaded.graph.base_url, "https://graph.microsoft.com");
        assert_eq!(loaded.auth.token_env, "GRAPH_ACCESS_TOKEN");
    }
}
