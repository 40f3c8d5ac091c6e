//! Action discovery.
//!
//! # Responsibilities
//! - List handler source files from the actions folder
//! - Filter out the package marker (`mod.rs`) and non-source files
//! - Derive module and type names for each remaining file
//!
//! # Design Decisions
//! - The folder read is behind the `ActionSource` capability so builds can
//!   run against in-memory listings in tests
//! - Listings are sorted: repeated builds over an unchanged tree produce
//!   identical route sets
//! - An unreadable folder is reported and yields an empty set; the build
//!   continues with zero actions rather than aborting startup

use std::fs;
use std::path::PathBuf;

use crate::actions::resource::ActionResource;
use crate::error::ActionError;
use crate::observability::Reporter;

/// Capability supplying handler source identifiers.
pub trait ActionSource: Send + Sync {
    fn list(&self) -> Result<Vec<String>, ActionError>;
}

/// Filesystem-backed source reading the configured actions folder.
pub struct FsSource {
    folder: PathBuf,
}

impl FsSource {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }
}

impl ActionSource for FsSource {
    fn list(&self) -> Result<Vec<String>, ActionError> {
        let unavailable = |source| ActionError::SourceUnavailable {
            folder: self.folder.display().to_string(),
            source,
        };
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.folder).map_err(unavailable)? {
            let entry = entry.map_err(unavailable)?;
            if let Some(name) = entry.file_name().to_str() {
                files.push(name.to_string());
            }
        }
        Ok(files)
    }
}

/// True for handler source files: `.rs`, excluding the package marker.
fn is_action_file(file_name: &str) -> bool {
    file_name.ends_with(".rs") && file_name != "mod.rs"
}

/// Scan the source and produce the initial resource set.
pub fn discover(source: &dyn ActionSource, reporter: &dyn Reporter) -> Vec<ActionResource> {
    let mut files = match source.list() {
        Ok(files) => files,
        Err(err) => {
            reporter.error(&format!(
                "{}. Check the `actions_folder` config setting.",
                err
            ));
            return Vec::new();
        }
    };
    files.retain(|name| is_action_file(name));
    files.sort();
    files
        .iter()
        .map(|file_name| ActionResource::new(file_name))
        .collect()
}
