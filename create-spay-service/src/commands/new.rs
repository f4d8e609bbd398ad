//! Service scaffolding command

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{ConfigBuilder, ServiceConfig};
use crate::error::{ScaffoldError, Stage};
use crate::materialize::{GitCli, Materialized, ProjectMaterializer};
use crate::prompt::{DialoguerPrompt, Prompt};
use crate::settings::ToolSettings;

/// Create a new Spay service
pub struct NewCommand {
    service_name: Option<String>,
    settings: ToolSettings,
    assume_yes: bool,
}

impl NewCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `service_name` - Service name for non-interactive mode; `None` asks for everything
    /// * `settings` - Loaded tool settings
    #[must_use]
    pub const fn new(service_name: Option<String>, settings: ToolSettings) -> Self {
        Self {
            service_name,
            settings,
            assume_yes: false,
        }
    }

    /// Skip the confirmation after the interactive summary
    #[must_use]
    pub const fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the service name is invalid (non-interactive mode),
    /// the user cancels, or a fatal pipeline stage fails.
    pub fn execute(&self) -> Result<()> {
        let config = self.collect_config()?;
        let parent_dir = std::env::current_dir().context("Failed to get current directory")?;

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        let git = GitCli::new();
        let materializer = ProjectMaterializer::new(&git, &git, &self.settings);
        let result = materializer.materialize(&config, &parent_dir, |stage| {
            spinner.set_message(stage_message(stage));
        });
        spinner.finish_and_clear();

        let materialized = result?;
        Self::print_files(&materialized);
        self.print_success(&config);

        Ok(())
    }

    fn collect_config(&self) -> Result<ServiceConfig, ScaffoldError> {
        let builder = ConfigBuilder::new(&self.settings);

        if let Some(name) = &self.service_name {
            let config = builder.from_service_name(name)?;
            println!("{}", style("🚀 Quick creating service with defaults...").bold());
            return Ok(config);
        }

        println!("\n{}", style("🚀 Create Spay Spring Boot Service").bold());
        println!("{}", style("━".repeat(50)).cyan());

        let prompt = DialoguerPrompt::new();
        let config = builder.interactive(&prompt)?;
        self.print_summary(&config);

        if !self.assume_yes {
            let proceed = prompt
                .confirm("Continue with this configuration?", true)
                .map_err(|err| ScaffoldError::collaborator(Stage::Configure, err))?;
            if !proceed {
                return Err(ScaffoldError::Cancelled);
            }
        }

        Ok(config)
    }

    fn print_summary(&self, config: &ServiceConfig) {
        let registry = self
            .settings
            .registry_image(config.harbor_path(), config.service_name());

        println!("\n{}", style("📋 Configuration Summary").bold());
        println!("{}", style("━".repeat(30)).cyan());
        for (label, value) in [
            ("Service Name:", config.service_name()),
            ("Package Name:", config.package_name()),
            ("Service Class:", config.application_class().as_str()),
            ("Database Name:", config.db_name()),
            ("Description:", config.description()),
            ("Harbor Registry:", registry.as_str()),
        ] {
            println!("{label:<18}{}", style(value).green());
        }
        println!();
    }

    fn print_files(materialized: &Materialized) {
        println!("{}", style("✓ Template customized successfully").green().bold());
        for path in &materialized.substituted {
            println!("  {} {}", style("✓").green(), style(path.display()).dim());
        }
        for file in &materialized.generated {
            println!(
                "  {} {} ({})",
                style("✓").green(),
                style(file.path.display()).dim(),
                style(file.description).dim()
            );
        }

        match &materialized.version_control {
            Ok(()) => println!("{}", style("✓ Git repository initialized").green()),
            Err(err) => println!("{} {}", style("⚠").yellow().bold(), style(err).yellow()),
        }
    }

    /// Print success message with next steps
    fn print_success(&self, config: &ServiceConfig) {
        let name = config.service_name();
        let org = &self.settings.github_org;
        let step = |n: &str, cmd: String| {
            println!("   {} {}", style(n).cyan(), style(cmd).blue());
        };

        println!();
        println!("{}", style("🎉 Service created successfully!").green().bold());
        println!("{}", style("━".repeat(40)).green());
        println!("\n📁 Project: {}", style(name).cyan());
        println!("\n{}", style("📝 Next steps:").bold());
        step("1.", format!("cd {name}"));
        step("2.", "docker-compose up -d postgres".to_string());
        step("3.", "./gradlew bootRun".to_string());
        step("4.", "curl http://localhost:8080/api/v1/health".to_string());

        println!("\n{}", style("🔗 Create GitHub repository:").bold());
        step("", format!("gh repo create {org}/{name} --public"));
        step("", format!("git remote add origin https://github.com/{org}/{name}.git"));
        step("", "git push -u origin main".to_string());

        println!("\n{}", style("💡 Remember to:").bold());
        println!("   • Add Harbor registry credentials to GitHub secrets");
        println!("   • Configure ArgoCD for deployment");
        println!("   • Update database migrations in src/main/resources/db/migration/");
        println!("\n{}", style("🚀 Happy coding!").green().bold());
    }
}

fn stage_message(stage: Stage) -> &'static str {
    match stage {
        // Configuration is collected before the spinner starts
        Stage::Configure => "Preparing...",
        Stage::Fetch => "Cloning template...",
        Stage::StripHistory => "Removing template history...",
        Stage::Customize => "Customizing template...",
        Stage::VersionControl => "Initializing Git repository...",
    }
}
