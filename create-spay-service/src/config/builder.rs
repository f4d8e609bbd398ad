//! Collecting a [`ServiceConfig`] from the user

use anyhow::Result;

use super::{ServiceConfig, ServiceConfigParts};
use crate::error::{InvalidFormat, ScaffoldError, Stage};
use crate::naming::{
    derive_db_name, derive_description, derive_package_suggestion, derive_service_class,
    validate_package_name, validate_service_name,
};
use crate::prompt::Prompt;
use crate::settings::ToolSettings;

/// Builds a [`ServiceConfig`] interactively or from a single service name
///
/// Both paths go through the same derivers, so a given service name always
/// yields the same class name, title, package suggestion and database name.
pub struct ConfigBuilder<'a> {
    settings: &'a ToolSettings,
}

impl<'a> ConfigBuilder<'a> {
    /// Create a builder using `settings` for the defaults it offers
    #[must_use]
    pub const fn new(settings: &'a ToolSettings) -> Self {
        Self { settings }
    }

    /// Non-interactive mode: validate once, take every default
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFormat`] if `service_name` is malformed.
    pub fn from_service_name(&self, service_name: &str) -> Result<ServiceConfig, InvalidFormat> {
        ServiceConfig::with_defaults(service_name, &self.settings.default_harbor_path)
    }

    /// Interactive mode: ask for every field, re-asking until names are valid
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Collaborator`] if the prompt fails to read an
    /// answer. Invalid answers never escape; they are re-asked.
    pub fn interactive<P: Prompt + ?Sized>(&self, prompt: &P) -> Result<ServiceConfig, ScaffoldError> {
        self.collect(prompt)
            .map_err(|err| ScaffoldError::collaborator(Stage::Configure, err))
    }

    fn collect<P: Prompt + ?Sized>(&self, prompt: &P) -> Result<ServiceConfig> {
        let service_name = ask_until_valid(prompt, "Service name", None, validate_service_name)?;

        let suggested_package = derive_package_suggestion(&service_name);
        prompt.notice(&format!("Suggested package: {suggested_package}"));
        let package_name = ask_until_valid(
            prompt,
            "Package name",
            Some(suggested_package.as_str()),
            validate_package_name,
        )?;

        let service_class = derive_service_class(&service_name);
        prompt.notice(&format!("Service class: {service_class}Application"));

        let db_name = ask_with_default(prompt, "Database name", &derive_db_name(&service_name))?;
        let description = ask_with_default(
            prompt,
            "Service description",
            &derive_description(&service_name),
        )?;

        prompt.notice("Common paths: minjibir, spay, core");
        let harbor_path = ask_with_default(
            prompt,
            "Harbor registry path",
            &self.settings.default_harbor_path,
        )?;

        let config = ServiceConfig::from_parts(ServiceConfigParts {
            service_name,
            package_name,
            db_name,
            description,
            harbor_path,
        })?;
        Ok(config)
    }
}

/// Ask until `validate` accepts the answer
///
/// Empty input falls back to `default`; with no default, the question is
/// repeated with a "required" message. Rejections are shown through
/// [`Prompt::warn`] and never returned.
///
/// # Errors
///
/// Returns an error only when the prompt itself fails.
pub fn ask_until_valid<P, F>(
    prompt: &P,
    label: &str,
    default: Option<&str>,
    validate: F,
) -> Result<String>
where
    P: Prompt + ?Sized,
    F: Fn(&str) -> Result<(), InvalidFormat>,
{
    loop {
        let raw = prompt.input(label, default)?;
        let answer = match raw.trim() {
            "" => default.unwrap_or_default(),
            trimmed => trimmed,
        };

        if answer.is_empty() {
            prompt.warn(&format!("{label} is required"));
            continue;
        }

        match validate(answer) {
            Ok(()) => return Ok(answer.to_string()),
            Err(err) => prompt.warn(&err.to_string()),
        }
    }
}

fn ask_with_default<P: Prompt + ?Sized>(prompt: &P, label: &str, default: &str) -> Result<String> {
    let raw = prompt.input(label, Some(default))?;
    let answer = raw.trim();
    Ok(if answer.is_empty() { default } else { answer }.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompt;

    #[test]
    fn test_ask_until_valid_retries() {
        let prompt = ScriptedPrompt::new(["", "Bad-Name", "good-name"]);
        let name = ask_until_valid(&prompt, "Service name", None, validate_service_name).unwrap();

        assert_eq!(name, "good-name");
        assert_eq!(prompt.asked().len(), 3);
        let messages = prompt.messages();
        assert_eq!(messages[0], "Service name is required");
        assert!(messages[1].contains("'Bad-Name'"));
    }

    #[test]
    fn test_ask_until_valid_uses_default_on_empty() {
        let prompt = ScriptedPrompt::new(["   "]);
        let name = ask_until_valid(&prompt, "Package name", Some("com.spay"), validate_package_name)
            .unwrap();
        assert_eq!(name, "com.spay");
    }

    #[test]
    fn test_interactive_prompt_failure_is_configure_stage() {
        let settings = ToolSettings::default();
        let prompt = ScriptedPrompt::new(["payment-service"]);
        let err = ConfigBuilder::new(&settings).interactive(&prompt).unwrap_err();
        assert_eq!(err.stage(), Stage::Configure);
    }
}
