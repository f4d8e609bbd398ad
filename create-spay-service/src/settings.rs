//! Tool settings
//!
//! Settings are loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `SPAY_` prefix)
//! 2. An explicit `--config` file
//! 3. `./create-spay-service.toml`
//! 4. `~/.config/create-spay-service/config.toml` (user config, XDG)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! template_url = "https://github.com/SpayHQ/spay-springboot-template.git"
//! default_harbor_path = "core"
//! registry_host = "harbor.spaymfb.com"
//! github_org = "SpayHQ"
//! ```

use anyhow::Context;
use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::naming::DEFAULT_HARBOR_PATH;

/// Remote template cloned for every new service
pub const DEFAULT_TEMPLATE_URL: &str = "https://github.com/SpayHQ/spay-springboot-template.git";

/// Local settings file looked up in the working directory
pub const LOCAL_SETTINGS_FILE: &str = "create-spay-service.toml";

/// Settings for the scaffolding tool itself (not for the generated service)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Git URL of the service template
    pub template_url: String,

    /// Harbor project offered as the default registry path
    pub default_harbor_path: String,

    /// Harbor registry host shown in the summary
    pub registry_host: String,

    /// GitHub organization used in the next-steps hints
    pub github_org: String,

    /// Message of the initial commit
    pub commit_message: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            template_url: DEFAULT_TEMPLATE_URL.to_string(),
            default_harbor_path: DEFAULT_HARBOR_PATH.to_string(),
            registry_host: "harbor.spaymfb.com".to_string(),
            github_org: "SpayHQ".to_string(),
            commit_message: "initial service setup from spay-springboot-template".to_string(),
        }
    }
}

impl ToolSettings {
    /// Load settings from every source, optionally with an explicit file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default settings cannot be serialized to TOML
    /// - A settings file contains invalid TOML or wrongly typed values
    /// - The explicit file does not exist
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from(LOCAL_SETTINGS_FILE);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        if let Some(path) = explicit {
            anyhow::ensure!(path.exists(), "Config file not found: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("SPAY_").lowercase(true));

        figment
            .extract()
            .context("Failed to load create-spay-service settings")
    }

    /// Get the XDG config path for user settings
    ///
    /// Returns `~/.config/create-spay-service/config.toml` on Linux.
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(LOCAL_SETTINGS_FILE),
            |config_dir| config_dir.join("create-spay-service").join("config.toml"),
        )
    }

    /// Full registry image path for a service
    #[must_use]
    pub fn registry_image(&self, harbor_path: &str, service_name: &str) -> String {
        format!("{}/{harbor_path}/{service_name}", self.registry_host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_settings() {
        let settings = ToolSettings::default();
        assert_eq!(settings.template_url, DEFAULT_TEMPLATE_URL);
        assert_eq!(settings.default_harbor_path, "minjibir");
        assert_eq!(
            settings.registry_image("minjibir", "payment-service"),
            "harbor.spaymfb.com/minjibir/payment-service"
        );
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "default_harbor_path = \"core\"\ngithub_org = \"SpayLabs\"\n").unwrap();

        let settings = ToolSettings::load(Some(&path)).unwrap();
        assert_eq!(settings.default_harbor_path, "core");
        assert_eq!(settings.github_org, "SpayLabs");
        assert_eq!(settings.registry_host, "harbor.spaymfb.com");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ToolSettings::load(Some(&dir.path().join("absent.toml")));
        assert!(result.is_err());
    }
}
