use crate::models::{Dataset, GroupKey};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a single document (or the manifest) could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} is not a record document: {}", .path.display(), .errors.join("; "))]
    Shape { path: PathBuf, errors: Vec<String> },
    #[error("invalid catalog manifest {}: {}", .path.display(), .errors.join("; "))]
    Manifest { path: PathBuf, errors: Vec<String> },
    #[error("{reason}")]
    DataDir { path: PathBuf, reason: String },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Shape { path, .. }
            | LoadError::Manifest { path, .. }
            | LoadError::DataDir { path, .. } => path.as_path(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// A declared group whose document failed to load
#[derive(Debug, Error)]
#[error("{dataset} group '{group}': {error}")]
pub struct GroupLoadError {
    pub dataset: Dataset,
    pub group: GroupKey,
    #[source]
    pub error: LoadError,
}

/// One or more declared documents failed to load.
/// The affected groups are present in the store but empty.
#[derive(Debug, Error)]
#[error("{} of {total} catalog documents failed to load", .failures.len())]
pub struct LoadFailure {
    pub failures: Vec<GroupLoadError>,
    pub total: usize,
}

impl LoadFailure {
    pub fn details(&self) -> String {
        self.failures
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
