//! Service configuration
//!
//! [`ServiceConfig`] is the single record every later stage reads from. The
//! class name and title are computed inside the constructor, so they can
//! never drift from the service name.

mod builder;

pub use builder::{ask_until_valid, ConfigBuilder};

use serde::Serialize;

use crate::error::InvalidFormat;
use crate::naming::{
    derive_db_name, derive_description, derive_package_suggestion, derive_service_class,
    derive_service_title, validate_package_name, validate_service_name,
};

/// Raw field values before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfigParts {
    /// Service name (`payment-service`)
    pub service_name: String,
    /// JVM package (`com.spaybusiness.payment.service`)
    pub package_name: String,
    /// Database name
    pub db_name: String,
    /// Free-text description
    pub description: String,
    /// Harbor registry project
    pub harbor_path: String,
}

/// Fully derived, validated configuration of the service being created
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceConfig {
    service_name: String,
    package_name: String,
    service_class: String,
    service_title: String,
    db_name: String,
    description: String,
    harbor_path: String,
}

impl ServiceConfig {
    /// Validate the names in `parts` and derive class name and title
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFormat`] if the service or package name is malformed.
    pub fn from_parts(parts: ServiceConfigParts) -> Result<Self, InvalidFormat> {
        validate_service_name(&parts.service_name)?;
        validate_package_name(&parts.package_name)?;

        Ok(Self {
            service_class: derive_service_class(&parts.service_name),
            service_title: derive_service_title(&parts.service_name),
            service_name: parts.service_name,
            package_name: parts.package_name,
            db_name: parts.db_name,
            description: parts.description,
            harbor_path: parts.harbor_path,
        })
    }

    /// Build a config where every field except the name takes its default
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFormat`] if `service_name` is malformed.
    pub fn with_defaults(service_name: &str, harbor_path: &str) -> Result<Self, InvalidFormat> {
        validate_service_name(service_name)?;
        Self::from_parts(ServiceConfigParts {
            service_name: service_name.to_string(),
            package_name: derive_package_suggestion(service_name),
            db_name: derive_db_name(service_name),
            description: derive_description(service_name),
            harbor_path: harbor_path.to_string(),
        })
    }

    /// Service name (`payment-service`)
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// JVM package (`com.spaybusiness.payment.service`)
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Class name prefix (`PaymentService`)
    #[must_use]
    pub fn service_class(&self) -> &str {
        &self.service_class
    }

    /// Human-readable title (`Payment Service`)
    #[must_use]
    pub fn service_title(&self) -> &str {
        &self.service_title
    }

    /// Database name (`payment_service`)
    #[must_use]
    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    /// Free-text description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Harbor registry project
    #[must_use]
    pub fn harbor_path(&self) -> &str {
        &self.harbor_path
    }

    /// Spring Boot application class (`PaymentServiceApplication`)
    #[must_use]
    pub fn application_class(&self) -> String {
        format!("{}Application", self.service_class)
    }

    /// Package as a relative directory (`com/spaybusiness/payment/service`)
    #[must_use]
    pub fn package_path(&self) -> String {
        self.package_name.replace('.', "/")
    }
}
