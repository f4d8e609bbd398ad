//! Service naming rules
//!
//! Validators check raw user input against the naming conventions; derivers
//! compute every secondary name from an accepted service name.

mod derive;
mod validate;

pub use derive::{
    derive_db_name, derive_description, derive_package_suggestion, derive_service_class,
    derive_service_title, DEFAULT_HARBOR_PATH, PACKAGE_ROOT, PACKAGE_SUFFIX,
};
pub use validate::{validate_package_name, validate_service_name};
