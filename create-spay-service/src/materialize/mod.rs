//! Project materialization pipeline
//!
//! Turns a finished [`ServiceConfig`] into a project directory:
//!
//! 1. Fetch the template into `<parent>/<service name>`
//! 2. Strip the template's git history
//! 3. Substitute placeholders in [`TEMPLATED_FILES`] and write every
//!    synthesized artifact
//! 4. Initialize a fresh repository with an initial commit
//!
//! Steps 1 to 3 abort the run on failure and leave whatever was written on
//! disk. A failure in step 4 is only reported.

mod git;

pub use git::GitCli;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ServiceConfig;
use crate::error::{ScaffoldError, Stage, VcsInitFailure};
use crate::settings::ToolSettings;
use crate::templates::{
    substitute_file, ArtifactSynthesizer, GeneratedFile, PlaceholderMap, TEMPLATED_FILES,
};

/// Retrieves the remote template into a local directory
pub trait TemplateFetcher {
    /// Populate `destination` (which does not exist yet) from `source`
    ///
    /// # Errors
    ///
    /// Returns an error if the template cannot be retrieved.
    fn fetch(&self, source: &str, destination: &Path) -> Result<()>;
}

/// Version-control operations on the generated project
pub trait VersionControl {
    /// Remove the history that came with the template
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be removed.
    fn strip_history(&self, project_dir: &Path) -> Result<()>;

    /// Create a repository, stage everything and commit
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three operations fails.
    fn init_and_commit(&self, project_dir: &Path, message: &str) -> Result<()>;
}

/// What a successful run produced
#[derive(Debug)]
pub struct Materialized {
    /// Root of the new project
    pub project_dir: PathBuf,
    /// Templated files that were rewritten, relative to `project_dir`
    pub substituted: Vec<PathBuf>,
    /// Synthesized files, relative to `project_dir`
    pub generated: Vec<GeneratedFile>,
    /// Outcome of the repository initialization
    pub version_control: Result<(), VcsInitFailure>,
}

/// Runs the fetch → customize → commit pipeline for one service
pub struct ProjectMaterializer<'a> {
    fetcher: &'a dyn TemplateFetcher,
    vcs: &'a dyn VersionControl,
    settings: &'a ToolSettings,
    synthesizer: ArtifactSynthesizer,
}

impl<'a> ProjectMaterializer<'a> {
    /// Create a materializer over the given collaborators
    #[must_use]
    pub fn new(
        fetcher: &'a dyn TemplateFetcher,
        vcs: &'a dyn VersionControl,
        settings: &'a ToolSettings,
    ) -> Self {
        Self {
            fetcher,
            vcs,
            settings,
            synthesizer: ArtifactSynthesizer::new(),
        }
    }

    /// Materialize `config` under `parent_dir`
    ///
    /// `progress` is called as each stage starts.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::DestinationExists`] if the project directory is
    /// already present, or [`ScaffoldError::Collaborator`] naming the stage
    /// that failed.
    pub fn materialize(
        &self,
        config: &ServiceConfig,
        parent_dir: &Path,
        mut progress: impl FnMut(Stage),
    ) -> Result<Materialized, ScaffoldError> {
        let project_dir = parent_dir.join(config.service_name());
        if project_dir.exists() {
            return Err(ScaffoldError::DestinationExists(project_dir));
        }

        progress(Stage::Fetch);
        tracing::info!(
            template = %self.settings.template_url,
            project_dir = %project_dir.display(),
            "fetching template"
        );
        self.fetcher
            .fetch(&self.settings.template_url, &project_dir)
            .map_err(|err| ScaffoldError::collaborator(Stage::Fetch, err))?;

        progress(Stage::StripHistory);
        self.vcs
            .strip_history(&project_dir)
            .map_err(|err| ScaffoldError::collaborator(Stage::StripHistory, err))?;

        progress(Stage::Customize);
        tracing::info!(service = config.service_name(), "customizing template");
        let substituted = substitute_templated_files(config, &project_dir)
            .map_err(|err| ScaffoldError::collaborator(Stage::Customize, err))?;
        let generated = self
            .synthesizer
            .synthesize(config)
            .and_then(|files| write_generated(&project_dir, &files).map(|()| files))
            .map_err(|err| ScaffoldError::collaborator(Stage::Customize, err))?;

        progress(Stage::VersionControl);
        let version_control = self
            .vcs
            .init_and_commit(&project_dir, &self.settings.commit_message)
            .map_err(|error| VcsInitFailure { error });
        if let Err(err) = &version_control {
            tracing::warn!(error = %err, "continuing without an initial commit");
        }

        Ok(Materialized {
            project_dir,
            substituted,
            generated,
            version_control,
        })
    }
}

/// Substitute every templated file with the shared placeholder map
///
/// Returns the relative paths that were rewritten; absent files are skipped.
///
/// # Errors
///
/// Returns an error if an existing file cannot be read or written.
pub fn substitute_templated_files(config: &ServiceConfig, project_dir: &Path) -> Result<Vec<PathBuf>> {
    let shared = PlaceholderMap::from_config(config);
    let mut substituted = Vec::new();

    for file in TEMPLATED_FILES {
        if substitute_file(&project_dir.join(file.path), &file.placeholders(&shared))? {
            substituted.push(PathBuf::from(file.path));
        }
    }

    Ok(substituted)
}

/// Write generated files below `root`, creating parent directories
///
/// # Errors
///
/// Returns an error if a directory or file cannot be created.
pub fn write_generated(root: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let full_path = root.join(&file.path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&full_path, &file.content)
            .with_context(|| format!("Failed to write file: {}", full_path.display()))?;
        tracing::debug!(path = %file.path.display(), "wrote {}", file.description);
    }

    Ok(())
}
