//! Property tests for naming rules, substitution and synthesis

use std::fs;

use create_spay_service_lib::naming::{
    derive_package_suggestion, derive_service_class, derive_service_title, validate_package_name,
    validate_service_name,
};
use create_spay_service_lib::templates::substitute_file;
use create_spay_service_lib::{
    ArtifactSynthesizer, ConfigBuilder, PlaceholderMap, ScriptedPrompt, ServiceConfig,
    ToolSettings,
};
use proptest::prelude::*;
use regex::Regex;

const SERVICE_NAME: &str = "[a-z][a-z0-9-]{0,24}[a-z0-9]";

proptest! {
    #[test]
    fn valid_names_are_accepted(name in SERVICE_NAME) {
        prop_assert!(validate_service_name(&name).is_ok());
    }

    #[test]
    fn uppercase_is_rejected(prefix in "[a-z]{1,5}", upper in "[A-Z]", suffix in "[a-z]{1,5}") {
        let name = format!("{prefix}{upper}{suffix}");
        prop_assert!(validate_service_name(&name).is_err());
    }

    #[test]
    fn leading_digit_is_rejected(name in "[0-9][a-z0-9-]{0,10}[a-z0-9]") {
        prop_assert!(validate_service_name(&name).is_err());
    }

    #[test]
    fn edge_hyphens_are_rejected(body in "[a-z][a-z0-9]{0,10}") {
        let leading = format!("-{body}");
        let trailing = format!("{body}-");
        prop_assert!(validate_service_name(&leading).is_err());
        prop_assert!(validate_service_name(&trailing).is_err());
    }

    #[test]
    fn class_is_pascal_case(name in SERVICE_NAME) {
        let pascal = Regex::new(r"^[A-Z][A-Za-z0-9]*$").unwrap();
        let class = derive_service_class(&name);
        prop_assert!(pascal.is_match(&class), "{name} -> {class}");
    }

    #[test]
    fn title_has_no_hyphens(name in SERVICE_NAME) {
        let title = derive_service_title(&name);
        prop_assert!(!title.contains('-'));
        prop_assert!(!title.contains("  "));
        prop_assert_eq!(title.replace(' ', ""), derive_service_class(&name));
    }

    #[test]
    fn package_suggestion_is_valid(name in SERVICE_NAME) {
        let package = derive_package_suggestion(&name);
        prop_assert!(validate_package_name(&package).is_ok(), "{name} -> {package}");
    }

    #[test]
    fn both_protocols_agree(name in SERVICE_NAME) {
        let settings = ToolSettings::default();
        let builder = ConfigBuilder::new(&settings);
        let prompt = ScriptedPrompt::new([name.as_str(), "", "", "", ""]);

        let interactive = builder.interactive(&prompt).unwrap();
        let quick = builder.from_service_name(&name).unwrap();
        prop_assert_eq!(interactive, quick);
    }

    #[test]
    fn synthesis_is_deterministic(name in SERVICE_NAME) {
        let config = ServiceConfig::with_defaults(&name, "minjibir").unwrap();
        let first = ArtifactSynthesizer::new().synthesize(&config).unwrap();
        let second = ArtifactSynthesizer::new().synthesize(&config.clone()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn substitution_without_tokens_is_identity(content in "[^{}]{0,200}") {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.gradle.kts");
        fs::write(&path, &content).unwrap();

        let config = ServiceConfig::with_defaults("payment-service", "minjibir").unwrap();
        let rewritten = substitute_file(&path, &PlaceholderMap::from_config(&config)).unwrap();

        prop_assert!(!rewritten);
        prop_assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }
}
