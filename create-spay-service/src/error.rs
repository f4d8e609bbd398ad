//! Error types and error handling

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A user-supplied value that does not satisfy a naming rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFormat {
    /// Service name failed `^[a-z][a-z0-9-]*[a-z0-9]$`
    #[error("Invalid service name '{value}': service name must be lowercase, start with a letter, end with a letter or digit, and contain only letters, numbers, and hyphens")]
    ServiceName {
        /// The rejected input
        value: String,
    },

    /// Package name failed `^[a-z][a-z0-9]*(\.[a-z][a-z0-9]*)*$`
    #[error("Invalid package name '{value}': package name must be a valid Java package (e.g., com.spaybusiness.payment.service)")]
    PackageName {
        /// The rejected input
        value: String,
    },
}

/// Pipeline stage, used to report where a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Collecting and validating the service configuration
    Configure,
    /// Fetching the remote template
    Fetch,
    /// Removing the template's version-control history
    StripHistory,
    /// Substituting placeholders and writing generated files
    Customize,
    /// Initializing the new repository and committing
    VersionControl,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Configure => "configure",
            Self::Fetch => "fetch template",
            Self::StripHistory => "strip template history",
            Self::Customize => "customize template",
            Self::VersionControl => "initialize git repository",
        };
        f.write_str(name)
    }
}

/// Fatal scaffolding error
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Input rejected by a validator (fatal only outside interactive mode)
    #[error(transparent)]
    InvalidFormat(#[from] InvalidFormat),

    /// The target directory is already present
    #[error("fetch template failed: directory '{}' already exists. Please choose a different name or remove the existing directory.", .0.display())]
    DestinationExists(PathBuf),

    /// A fetch, history or file-system collaborator failed
    #[error("{stage} failed: {error:#}")]
    Collaborator {
        /// Stage that failed
        stage: Stage,
        /// Underlying failure, rendered inline
        error: anyhow::Error,
    },

    /// The user declined the configuration summary
    #[error("Setup cancelled")]
    Cancelled,
}

impl ScaffoldError {
    /// Wrap a collaborator failure with the stage it happened in
    pub fn collaborator(stage: Stage, error: impl Into<anyhow::Error>) -> Self {
        Self::Collaborator {
            stage,
            error: error.into(),
        }
    }

    /// Stage the error belongs to
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::InvalidFormat(_) | Self::Cancelled => Stage::Configure,
            Self::DestinationExists(_) => Stage::Fetch,
            Self::Collaborator { stage, .. } => *stage,
        }
    }
}

/// Version-control initialization failed; reported, never fatal
#[derive(Debug, Error)]
#[error("Git initialization failed: {error:#}")]
pub struct VcsInitFailure {
    /// Underlying failure, rendered inline
    pub error: anyhow::Error,
}
