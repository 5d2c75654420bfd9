use crate::manifest::{CatalogManifest, GroupSpec};
use crate::models::Dataset;
use std::collections::HashSet;
use std::path::Path;

/// Validate a catalog manifest
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_manifest(manifest: &CatalogManifest) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if manifest.document_count() == 0 {
        errors.push("At least one group must be declared".to_string());
    }

    for dataset in Dataset::ALL {
        validate_groups(dataset, manifest.groups(dataset), &mut errors);
    }

    // Two groups reading the same document would duplicate its records
    let mut files = HashSet::new();
    for dataset in Dataset::ALL {
        for group in manifest.groups(dataset) {
            if !group.file.as_os_str().is_empty() && !files.insert(&group.file) {
                errors.push(format!(
                    "Document '{}' is declared by more than one group",
                    group.file.display()
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_groups(dataset: Dataset, groups: &[GroupSpec], errors: &mut Vec<String>) {
    let mut keys = HashSet::new();

    for (idx, group) in groups.iter().enumerate() {
        let group_ref = format!("{} group #{} ('{}')", dataset, idx + 1, group.key);

        if group.key.trim().is_empty() {
            errors.push(format!("{}: key cannot be empty", group_ref));
        }

        if !keys.insert(group.key.as_str()) {
            errors.push(format!("{}: duplicate group key", group_ref));
        }

        if group.label.trim().is_empty() {
            errors.push(format!("{}: label cannot be empty", group_ref));
        }

        validate_document_path(&group.file, &group_ref, errors);
    }
}

/// Document paths must stay inside the data directory
pub fn validate_document_path(file: &Path, group_ref: &str, errors: &mut Vec<String>) {
    if file.as_os_str().is_empty() {
        errors.push(format!("{}: file cannot be empty", group_ref));
        return;
    }

    if file.is_absolute() {
        errors.push(format!(
            "{}: file '{}' must be relative to the data directory",
            group_ref,
            file.display()
        ));
    }

    if file
        .components()
        .any(|c| matches!(c, std::path::Component::ParentDir))
    {
        errors.push(format!(
            "{}: file '{}' must not leave the data directory",
            group_ref,
            file.display()
        ));
    }
}

/// Check that a data directory exists before loading from it
pub fn validate_data_dir(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("Data directory does not exist: {}", path.display()));
    }
    if !path.is_dir() {
        return Err(format!("Not a directory: {}", path.display()));
    }
    Ok(())
}
