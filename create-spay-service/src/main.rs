//! create-spay-service CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use console::style;
use create_spay_service_lib::{commands::NewCommand, observability, ToolSettings};

#[derive(Parser)]
#[command(name = "create-spay-service")]
#[command(version)]
#[command(about = "Create a Spay Spring Boot service from the shared template", long_about = None)]
#[command(after_help = "Examples:\n  create-spay-service\n  create-spay-service payment-service\n\nRepository: https://github.com/SpayHQ/spay-springboot-template")]
struct Cli {
    /// Service name; skips every prompt and uses defaults (e.g. `payment-service`)
    service_name: Option<String>,

    /// Template repository to clone instead of the configured one
    #[arg(long, value_name = "URL")]
    template_url: Option<String>,

    /// Additional settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Skip the confirmation after the configuration summary
    #[arg(short, long)]
    yes: bool,

    /// Show debug logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> Result<()> {
    observability::init(cli.verbose)?;

    let mut settings = ToolSettings::load(cli.config.as_deref())?;
    if let Some(url) = cli.template_url {
        settings.template_url = url;
    }
    tracing::debug!(?settings, "loaded settings");

    NewCommand::new(cli.service_name, settings)
        .assume_yes(cli.yes)
        .execute()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", style("❌ Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
