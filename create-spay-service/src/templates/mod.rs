//! Template customization and file synthesis
//!
//! Two kinds of output end up in a new service:
//!
//! - **Templated files** already exist in the fetched template and only get
//!   their placeholder tokens replaced ([`substitute_file`]).
//! - **Synthesized artifacts** are rendered from scratch out of the
//!   [`ServiceConfig`] by [`ArtifactSynthesizer`].

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

use crate::config::ServiceConfig;

pub mod files;
mod placeholders;

pub use files::*;
pub use placeholders::{substitute_file, Placeholder, PlaceholderMap};

/// Which part of the shared map a templated file receives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderScope {
    /// Every placeholder
    All,
    /// Only the listed placeholders
    Only(&'static [Placeholder]),
}

/// A file of the fetched template that carries placeholder tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplatedFile {
    /// Path relative to the project root
    pub path: &'static str,
    /// Placeholders substituted in this file
    pub scope: PlaceholderScope,
}

impl TemplatedFile {
    /// The map this file is substituted with, cut down from the shared one
    #[must_use]
    pub fn placeholders(&self, shared: &PlaceholderMap) -> PlaceholderMap {
        match self.scope {
            PlaceholderScope::All => shared.clone(),
            PlaceholderScope::Only(keep) => shared.restricted_to(keep),
        }
    }
}

/// Template files rewritten after every fetch
pub const TEMPLATED_FILES: &[TemplatedFile] = &[
    TemplatedFile {
        path: "build.gradle.kts",
        scope: PlaceholderScope::All,
    },
    TemplatedFile {
        path: ".github/workflows/main-pipeline.yml",
        scope: PlaceholderScope::All,
    },
    TemplatedFile {
        path: "docker-compose.yml",
        scope: PlaceholderScope::Only(&[Placeholder::DbName]),
    },
];

/// A file produced by the synthesizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the project root
    pub path: PathBuf,
    /// Full file content
    pub content: String,
    /// Short description for console output
    pub description: &'static str,
}

/// Renders every brand-new file of a service from its configuration
pub struct ArtifactSynthesizer {
    handlebars: Handlebars<'static>,
}

impl Default for ArtifactSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactSynthesizer {
    /// Create a new synthesizer
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        Self { handlebars }
    }

    /// Produce every synthesized file, in a fixed order
    ///
    /// Reads nothing from disk; equal configs always yield equal output.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to render.
    pub fn synthesize(&self, config: &ServiceConfig) -> Result<Vec<GeneratedFile>> {
        let context = Self::context(config)?;
        let main_dir = Path::new("src/main/kotlin").join(config.package_path());
        let test_dir = Path::new("src/test/kotlin").join(config.package_path());

        let plan: [(PathBuf, &str, &'static str); 7] = [
            (
                main_dir.join(format!("{}.kt", config.application_class())),
                APPLICATION_KT,
                "application entry point",
            ),
            (
                main_dir.join("controller").join("HealthController.kt"),
                HEALTH_CONTROLLER_KT,
                "health endpoint",
            ),
            (
                test_dir.join("integration").join("HealthControllerIT.kt"),
                HEALTH_CONTROLLER_IT_KT,
                "health endpoint test",
            ),
            (
                PathBuf::from("src/main/resources/application.yml"),
                APPLICATION_YML,
                "runtime configuration",
            ),
            (
                PathBuf::from("src/test/resources/application-test.yml"),
                APPLICATION_TEST_YML,
                "test configuration",
            ),
            (
                PathBuf::from("src/main/resources/db/migration/V1_001__Initial_schema.sql"),
                MIGRATION_INITIAL_SQL,
                "initial migration",
            ),
            (
                PathBuf::from("settings.gradle.kts"),
                SETTINGS_GRADLE_KTS,
                "gradle settings",
            ),
        ];

        plan.into_iter()
            .map(|(path, template, description)| -> Result<GeneratedFile> {
                let content = self
                    .handlebars
                    .render_template(template, &context)
                    .with_context(|| format!("Failed to render template: {}", path.display()))?;
                Ok(GeneratedFile {
                    path,
                    content,
                    description,
                })
            })
            .collect()
    }

    fn context(config: &ServiceConfig) -> Result<Value> {
        let mut context =
            serde_json::to_value(config).context("Failed to serialize service config")?;
        if let Value::Object(fields) = &mut context {
            fields.insert("application_class".to_string(), json!(config.application_class()));
        }
        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment_files() -> Vec<GeneratedFile> {
        let config = ServiceConfig::with_defaults("payment-service", "minjibir").unwrap();
        ArtifactSynthesizer::new().synthesize(&config).unwrap()
    }

    #[test]
    fn test_paths_follow_package() {
        let paths: Vec<_> = payment_files().into_iter().map(|f| f.path).collect();
        let pkg = "com/spaybusiness/payment/service/service";
        assert_eq!(
            paths,
            vec![
                PathBuf::from(format!("src/main/kotlin/{pkg}/PaymentServiceApplication.kt")),
                PathBuf::from(format!("src/main/kotlin/{pkg}/controller/HealthController.kt")),
                PathBuf::from(format!("src/test/kotlin/{pkg}/integration/HealthControllerIT.kt")),
                PathBuf::from("src/main/resources/application.yml"),
                PathBuf::from("src/test/resources/application-test.yml"),
                PathBuf::from("src/main/resources/db/migration/V1_001__Initial_schema.sql"),
                PathBuf::from("settings.gradle.kts"),
            ]
        );
    }

    #[test]
    fn test_application_class_rendered() {
        let files = payment_files();
        let app = &files[0].content;
        assert!(app.starts_with("package com.spaybusiness.payment.service.service\n"));
        assert!(app.contains("class PaymentServiceApplication\n"));
        assert!(app.contains("runApplication<PaymentServiceApplication>(*args)"));
    }

    #[test]
    fn test_controller_and_test_echo_service_name() {
        let files = payment_files();
        assert!(files[1].content.contains("\"service\" to \"payment-service\""));
        assert!(files[1].content.contains("@GetMapping(\"/health\")"));
        assert!(files[2].content.contains("package com.spaybusiness.payment.service.service.integration"));
        assert!(files[2].content.contains("http://localhost:$port/api/v1/health"));
        assert!(files[2].content.contains("get(\"service\") == \"payment-service\""));
    }

    #[test]
    fn test_manifests_embed_names() {
        let files = payment_files();
        assert!(files[3].content.contains("    name: payment-service\n"));
        assert!(files[3].content.contains("jdbc:postgresql://localhost:5432/payment_service"));
        assert!(files[3].content.contains("    com.spaybusiness.payment.service.service: INFO"));
        assert!(files[4].content.contains("jdbc:h2:mem:testdb"));
        assert!(!files[4].content.contains("payment_service"));
        assert!(files[5].content.starts_with("-- Initial schema for payment-service\n"));
        assert_eq!(files[6].content, "rootProject.name = \"payment-service\"\n");
    }

    #[test]
    fn test_no_handlebars_left_over() {
        for file in payment_files() {
            assert!(!file.content.contains("{{"), "unrendered token in {}", file.path.display());
        }
    }

    #[test]
    fn test_compose_only_gets_db_name() {
        let config = ServiceConfig::with_defaults("payment-service", "minjibir").unwrap();
        let shared = PlaceholderMap::from_config(&config);
        let compose = TEMPLATED_FILES
            .iter()
            .find(|f| f.path == "docker-compose.yml")
            .unwrap();
        let map = compose.placeholders(&shared);
        assert_eq!(map.get("{{DB_NAME}}"), Some("payment_service"));
        assert_eq!(map.get("{{SERVICE_NAME}}"), None);
    }
}
