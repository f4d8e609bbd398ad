//! create-spay-service library
//!
//! Scaffolds a Spay Spring Boot service: collects a [`ServiceConfig`],
//! fetches the shared template, substitutes its placeholder tokens and
//! writes the service's starter files.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod materialize;
pub mod naming;
pub mod observability;
pub mod prompt;
pub mod settings;
pub mod templates;

pub use config::{ConfigBuilder, ServiceConfig, ServiceConfigParts};
pub use error::{InvalidFormat, ScaffoldError, Stage, VcsInitFailure};
pub use materialize::{GitCli, Materialized, ProjectMaterializer, TemplateFetcher, VersionControl};
pub use prompt::{DialoguerPrompt, Prompt, ScriptedPrompt};
pub use settings::ToolSettings;
pub use templates::{ArtifactSynthesizer, GeneratedFile, Placeholder, PlaceholderMap};
