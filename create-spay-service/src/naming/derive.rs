//! Derived names computed from a service name
//!
//! Every function here is pure and total. None of them validate their input;
//! callers pass a name that already went through
//! [`validate_service_name`](super::validate_service_name).

/// Organizational root of every suggested package
pub const PACKAGE_ROOT: &str = "com.spaybusiness";

/// Trailing segment of every suggested package
pub const PACKAGE_SUFFIX: &str = "service";

/// Default Harbor registry project
pub const DEFAULT_HARBOR_PATH: &str = "minjibir";

/// Class name: `payment-service` → `PaymentService`
///
/// # Examples
///
/// ```
/// # use create_spay_service_lib::naming::derive_service_class;
/// assert_eq!(derive_service_class("payment-service"), "PaymentService");
/// assert_eq!(derive_service_class("x-y-z"), "XYZ");
/// ```
#[must_use]
pub fn derive_service_class(service_name: &str) -> String {
    service_name.split('-').map(capitalize).collect()
}

/// Title: `payment-service` → `Payment Service`
///
/// Empty segments from doubled hyphens are skipped so the title never
/// carries double spaces.
#[must_use]
pub fn derive_service_title(service_name: &str) -> String {
    service_name
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Suggested package: `payment-service` → `com.spaybusiness.payment.service.service`
///
/// A package segment may not be empty or start with a digit, so empty
/// segments are dropped and a digit-led segment is folded into the one
/// before it (`api-2` → `api2`).
///
/// # Examples
///
/// ```
/// # use create_spay_service_lib::naming::derive_package_suggestion;
/// assert_eq!(
///     derive_package_suggestion("payment-service"),
///     "com.spaybusiness.payment.service.service"
/// );
/// assert_eq!(derive_package_suggestion("api-2"), "com.spaybusiness.api2.service");
/// ```
#[must_use]
pub fn derive_package_suggestion(service_name: &str) -> String {
    let mut segments: Vec<String> = Vec::new();
    for segment in service_name.split('-').filter(|s| !s.is_empty()) {
        let digit_led = segment.starts_with(|c: char| c.is_ascii_digit());
        match segments.last_mut() {
            Some(previous) if digit_led => previous.push_str(segment),
            _ => segments.push(segment.to_string()),
        }
    }
    format!("{PACKAGE_ROOT}.{}.{PACKAGE_SUFFIX}", segments.join("."))
}

/// Database name: `payment-service` → `payment_service`
#[must_use]
pub fn derive_db_name(service_name: &str) -> String {
    service_name.replace('-', "_")
}

/// Description: `payment-service` → `Spay payment service microservice`
#[must_use]
pub fn derive_description(service_name: &str) -> String {
    format!("Spay {} microservice", service_name.replace('-', " "))
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
