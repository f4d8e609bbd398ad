//! Literal placeholder substitution in fetched template files

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use regex::{Captures, Regex};

use crate::config::ServiceConfig;

/// A placeholder token recognized in template files
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    /// `{{PACKAGE_NAME}}`
    PackageName,
    /// `{{SERVICE_CLASS}}`
    ServiceClass,
    /// `{{SERVICE_NAME}}`
    ServiceName,
    /// `{{SERVICE_TITLE}}`
    ServiceTitle,
    /// `{{SERVICE_DESCRIPTION}}`
    ServiceDescription,
    /// `{{HARBOR_PATH}}`
    HarborPath,
    /// `{{DB_NAME}}`
    DbName,
}

impl Placeholder {
    /// Every placeholder, in substitution-map order
    pub const ALL: [Self; 7] = [
        Self::PackageName,
        Self::ServiceClass,
        Self::ServiceName,
        Self::ServiceTitle,
        Self::ServiceDescription,
        Self::HarborPath,
        Self::DbName,
    ];

    /// Exact token text as it appears in template files
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::PackageName => "{{PACKAGE_NAME}}",
            Self::ServiceClass => "{{SERVICE_CLASS}}",
            Self::ServiceName => "{{SERVICE_NAME}}",
            Self::ServiceTitle => "{{SERVICE_TITLE}}",
            Self::ServiceDescription => "{{SERVICE_DESCRIPTION}}",
            Self::HarborPath => "{{HARBOR_PATH}}",
            Self::DbName => "{{DB_NAME}}",
        }
    }

    fn value(self, config: &ServiceConfig) -> &str {
        match self {
            Self::PackageName => config.package_name(),
            Self::ServiceClass => config.service_class(),
            Self::ServiceName => config.service_name(),
            Self::ServiceTitle => config.service_title(),
            Self::ServiceDescription => config.description(),
            Self::HarborPath => config.harbor_path(),
            Self::DbName => config.db_name(),
        }
    }
}

/// Token → replacement mapping shared by every templated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMap {
    entries: Vec<(Placeholder, String)>,
}

impl PlaceholderMap {
    /// Map every placeholder to its value in `config`
    #[must_use]
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            entries: Placeholder::ALL
                .iter()
                .map(|p| (*p, p.value(config).to_string()))
                .collect(),
        }
    }

    /// Build a map from explicit token/value pairs
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (Placeholder, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Same values, keeping only the listed placeholders
    #[must_use]
    pub fn restricted_to(&self, keep: &[Placeholder]) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(p, _)| keep.contains(p))
                .cloned()
                .collect(),
        }
    }

    /// Replacement for a token, if it is part of this map
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p.token() == token)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the map has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every token occurrence in `content`
    ///
    /// A single left-to-right pass over the original text: replacement
    /// values are never scanned again, so a value that happens to contain a
    /// token is written out verbatim.
    #[must_use]
    pub fn apply(&self, content: &str) -> String {
        let Some(pattern) = self.pattern() else {
            return content.to_string();
        };
        pattern
            .replace_all(content, |caps: &Captures<'_>| {
                self.get(&caps[0]).unwrap_or(&caps[0]).to_string()
            })
            .into_owned()
    }

    fn pattern(&self) -> Option<Regex> {
        if self.entries.is_empty() {
            return None;
        }
        let alternation = self
            .entries
            .iter()
            .map(|(p, _)| regex::escape(p.token()))
            .collect::<Vec<_>>()
            .join("|");
        // Alternation of escaped literals always compiles.
        Regex::new(&alternation).ok()
    }
}

/// Rewrite `path` in place with `map`
///
/// A missing file is not an error: nothing is written and `Ok(false)` is
/// returned. Files whose content does not change are left untouched.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or written.
pub fn substitute_file(path: &Path, map: &PlaceholderMap) -> Result<bool> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "template file absent, skipping");
            return Ok(false);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read file: {}", path.display()));
        }
    };

    let rewritten = map.apply(&content);
    if rewritten == content {
        return Ok(false);
    }

    fs::write(path, rewritten)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "substituted placeholders");
    Ok(true)
}
