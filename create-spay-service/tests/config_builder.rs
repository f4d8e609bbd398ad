//! Integration tests for interactive and non-interactive config collection

use create_spay_service_lib::{ConfigBuilder, InvalidFormat, ScriptedPrompt, ToolSettings};

/// Accepting every default interactively matches the single-argument mode
#[test]
fn test_interactive_defaults_match_non_interactive() {
    let settings = ToolSettings::default();
    let builder = ConfigBuilder::new(&settings);

    let prompt = ScriptedPrompt::new(["payment-service", "", "", "", ""]);
    let interactive = builder.interactive(&prompt).unwrap();
    let quick = builder.from_service_name("payment-service").unwrap();

    assert_eq!(interactive, quick);
    assert_eq!(quick.service_class(), "PaymentService");
    assert_eq!(quick.service_title(), "Payment Service");
    assert_eq!(quick.package_name(), "com.spaybusiness.payment.service.service");
    assert_eq!(quick.db_name(), "payment_service");
    assert_eq!(quick.harbor_path(), "minjibir");
}

/// Overrides change only the overridable fields
#[test]
fn test_interactive_overrides() {
    let settings = ToolSettings::default();
    let prompt = ScriptedPrompt::new([
        "ledger",
        "com.spay.ledger",
        "ledger_db",
        "Double-entry ledger",
        "core",
    ]);

    let config = ConfigBuilder::new(&settings).interactive(&prompt).unwrap();

    assert_eq!(config.service_name(), "ledger");
    assert_eq!(config.package_name(), "com.spay.ledger");
    assert_eq!(config.service_class(), "Ledger");
    assert_eq!(config.service_title(), "Ledger");
    assert_eq!(config.db_name(), "ledger_db");
    assert_eq!(config.description(), "Double-entry ledger");
    assert_eq!(config.harbor_path(), "core");
}

/// Invalid answers are re-asked and never surface as errors
#[test]
fn test_interactive_reprompts_invalid_names() {
    let settings = ToolSettings::default();
    let prompt = ScriptedPrompt::new([
        "Payment-Service",
        "a",
        "payment-service",
        "com..broken",
        "com.spay.payments",
        "",
        "",
        "",
    ]);

    let config = ConfigBuilder::new(&settings).interactive(&prompt).unwrap();

    assert_eq!(config.service_name(), "payment-service");
    assert_eq!(config.package_name(), "com.spay.payments");
    assert_eq!(
        prompt.asked(),
        vec![
            "Service name",
            "Service name",
            "Service name",
            "Package name",
            "Package name",
            "Database name",
            "Service description",
            "Harbor registry path",
        ]
    );
    let messages = prompt.messages();
    assert!(messages
        .iter()
        .any(|m| m == "Suggested package: com.spaybusiness.payment.service.service"));
    assert!(messages.iter().any(|m| m == "Service class: PaymentServiceApplication"));
    assert!(messages.iter().any(|m| m.contains("'com..broken'")));
}

/// The harbor default comes from the loaded settings
#[test]
fn test_harbor_default_from_settings() {
    let settings = ToolSettings {
        default_harbor_path: "spay".to_string(),
        ..ToolSettings::default()
    };
    let config = ConfigBuilder::new(&settings).from_service_name("x-y-z").unwrap();

    assert_eq!(config.service_class(), "XYZ");
    assert_eq!(config.db_name(), "x_y_z");
    assert_eq!(config.harbor_path(), "spay");
}

/// Non-interactive mode fails on the first invalid name
#[test]
fn test_non_interactive_rejects() {
    let settings = ToolSettings::default();
    let builder = ConfigBuilder::new(&settings);

    assert!(builder.from_service_name("ab").is_ok());
    assert_eq!(
        builder.from_service_name("a").unwrap_err(),
        InvalidFormat::ServiceName { value: "a".into() }
    );
    assert!(builder.from_service_name("Payment-Service").is_err());
    assert!(builder.from_service_name("").is_err());
}
