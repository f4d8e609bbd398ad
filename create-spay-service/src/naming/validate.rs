//! Naming-convention validators for user input

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::InvalidFormat;

static SERVICE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9-]*[a-z0-9]$").expect("Invalid regex"));

static PACKAGE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*(\.[a-z][a-z0-9]*)*$").expect("Invalid regex"));

/// Check a service name (`payment-service`)
///
/// Both anchors must be satisfied by distinct characters, so single-character
/// names are rejected.
///
/// # Errors
///
/// Returns [`InvalidFormat::ServiceName`] when the name does not match.
pub fn validate_service_name(name: &str) -> Result<(), InvalidFormat> {
    if SERVICE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(InvalidFormat::ServiceName {
            value: name.to_string(),
        })
    }
}

/// Check a dotted JVM package name (`com.spaybusiness.payment.service`)
///
/// # Errors
///
/// Returns [`InvalidFormat::PackageName`] when the name does not match.
pub fn validate_package_name(name: &str) -> Result<(), InvalidFormat> {
    if PACKAGE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(InvalidFormat::PackageName {
            value: name.to_string(),
        })
    }
}
