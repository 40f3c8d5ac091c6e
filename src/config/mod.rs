//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (perch.toml or .perchrc.json)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → PerchConfig (validated)
//!     → consumed by the build sequence
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Config changes take effect on the next build; builds never watch files

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::PerchConfig;
