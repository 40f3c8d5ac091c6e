//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Application configuration consumed by the build sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PerchConfig {
    /// Folder scanned for handler source files.
    pub actions_folder: String,

    /// Module mapped to `/` instead of `/{module_name}/`.
    pub actions_index: String,

    /// Log the synthesized route table after each build.
    pub debug: bool,

    /// Port suggested to the embedding application in development.
    pub dev_port: u16,

    /// Port suggested to the embedding application in production.
    pub port: u16,
}

impl Default for PerchConfig {
    fn default() -> Self {
        Self {
            actions_folder: "actions".to_string(),
            actions_index: "index".to_string(),
            debug: false,
            dev_port: 5000,
            port: 5000,
        }
    }
}
