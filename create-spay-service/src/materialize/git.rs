//! `git` command-line collaborator

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

use super::{TemplateFetcher, VersionControl};

/// Fetches templates and manages history by shelling out to `git`
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

impl GitCli {
    /// Create a new git collaborator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn run(dir: Option<&Path>, args: &[&str]) -> Result<()> {
        let mut command = Command::new("git");
        command.args(args);
        if let Some(dir) = dir {
            command.current_dir(dir);
        }

        tracing::debug!(?args, "running git");
        let output = command
            .output()
            .with_context(|| format!("Failed to start git {}", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "git {} exited with {}: {}",
                args.join(" "),
                output.status,
                last_line(&stderr)
            );
        }

        Ok(())
    }
}

/// Last non-empty line of git's diagnostic output, where `fatal:` lands
fn last_line(stderr: &str) -> &str {
    stderr
        .lines()
        .map(str::trim)
        .rev()
        .find(|line| !line.is_empty())
        .unwrap_or("no output")
}

impl TemplateFetcher for GitCli {
    fn fetch(&self, source: &str, destination: &Path) -> Result<()> {
        let destination = destination
            .to_str()
            .context("Destination path is not valid UTF-8")?;
        Self::run(None, &["clone", "--depth", "1", source, destination])
    }
}

impl VersionControl for GitCli {
    fn strip_history(&self, project_dir: &Path) -> Result<()> {
        let git_dir = project_dir.join(".git");
        if git_dir.exists() {
            fs::remove_dir_all(&git_dir)
                .with_context(|| format!("Failed to remove {}", git_dir.display()))?;
        }
        Ok(())
    }

    fn init_and_commit(&self, project_dir: &Path, message: &str) -> Result<()> {
        Self::run(Some(project_dir), &["init"])?;
        Self::run(Some(project_dir), &["add", "."])?;
        Self::run(Some(project_dir), &["commit", "-m", message])
    }
}
