//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and required conventions
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: PerchConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;

use crate::config::schema::PerchConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn validate_config(config: &PerchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.actions_folder.is_empty() {
        errors.push(ValidationError {
            field: "actions_folder",
            message: "must not be empty".to_string(),
        });
    }
    if config.actions_index.is_empty() {
        errors.push(ValidationError {
            field: "actions_index",
            message: "must not be empty".to_string(),
        });
    }
    if config.port == 0 {
        errors.push(ValidationError {
            field: "port",
            message: "must be a non-zero port".to_string(),
        });
    }
    if config.dev_port == 0 {
        errors.push(ValidationError {
            field: "dev_port",
            message: "must be a non-zero port".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
