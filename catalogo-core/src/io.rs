use crate::error::{GroupLoadError, LoadError, LoadFailure};
use crate::manifest::{resolve_manifest, CatalogManifest, GroupSpec};
use crate::models::{Dataset, Record};
use crate::schema_validation::validate_record_document;
use crate::store::RecordStore;
use crate::validation::validate_data_dir;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

/// Result of a bulk load. The store is always usable; groups listed in
/// `failure` are declared but empty.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub manifest: CatalogManifest,
    pub store: RecordStore,
    pub failure: Option<LoadFailure>,
}

impl LoadedCatalog {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Load one record document: a JSON array of record objects
pub fn load_record_document<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_record_document(&document).map_err(|errors| LoadError::Shape {
        path: path.to_path_buf(),
        errors,
    })?;

    serde_json::from_value(document).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every document declared by the manifest.
///
/// Documents are read concurrently, one scoped thread each, and the store is
/// assembled only after all of them have finished.
pub fn load_catalog<P: AsRef<Path>>(data_dir: P, manifest: CatalogManifest) -> LoadedCatalog {
    let data_dir = data_dir.as_ref();
    let jobs: Vec<(Dataset, &GroupSpec)> = Dataset::ALL
        .iter()
        .flat_map(|&dataset| manifest.groups(dataset).iter().map(move |g| (dataset, g)))
        .collect();

    tracing::info!(
        data_dir = %data_dir.display(),
        documents = jobs.len(),
        "loading catalog"
    );

    let outcomes = thread::scope(|scope| {
        let handles: Vec<_> = jobs
            .iter()
            .map(|&(dataset, group)| {
                let path = data_dir.join(&group.file);
                let handle = scope.spawn({
                    let path = path.clone();
                    move || load_record_document(path)
                });
                (dataset, group, path, handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(dataset, group, path, handle)| {
                let outcome = handle.join().unwrap_or_else(|_| Err(loader_panicked(path)));
                (dataset, group, outcome)
            })
            .collect::<Vec<_>>()
    });

    let mut store = RecordStore::new(&manifest);
    let mut failures = Vec::new();

    for (dataset, group, outcome) in outcomes {
        match outcome {
            Ok(records) => {
                tracing::debug!(%dataset, group = %group.key, records = records.len(), "group loaded");
                store.set_records(dataset, &group.key, records);
            }
            Err(error) => {
                tracing::warn!(%dataset, group = %group.key, %error, "group failed to load");
                failures.push(GroupLoadError {
                    dataset,
                    group: group.key.clone(),
                    error,
                });
            }
        }
    }

    let failure = if failures.is_empty() {
        None
    } else {
        Some(LoadFailure { failures, total: manifest.document_count() })
    };

    tracing::info!(
        technology = store.total_records(Dataset::Technology),
        laboratory = store.total_records(Dataset::Laboratory),
        failed = failure.as_ref().map_or(0, |f| f.failures.len()),
        "catalog loaded"
    );

    LoadedCatalog {
        manifest,
        store,
        failure,
    }
}

/// Resolve the manifest of a data directory and load its catalog
pub fn load_catalog_from_dir<P: AsRef<Path>>(data_dir: P) -> Result<LoadedCatalog, LoadError> {
    let data_dir = data_dir.as_ref();
    validate_data_dir(data_dir).map_err(|reason| LoadError::DataDir {
        path: data_dir.to_path_buf(),
        reason,
    })?;
    let manifest = resolve_manifest(data_dir)?;
    Ok(load_catalog(data_dir, manifest))
}

fn loader_panicked(path: PathBuf) -> LoadError {
    LoadError::Io {
        path,
        source: std::io::Error::other("loader thread panicked"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, rel: &str, contents: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_load_record_document() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "doc.json", r#"[{"id": "1", "nome": "Sensor"}, {}]"#);

        let records = load_record_document(dir.path().join("doc.json")).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].display_name(), "Sensor");
    }

    #[test]
    fn test_load_record_document_errors() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "broken.json", "[{");
        write(dir.path(), "object.json", r#"{"nome": "x"}"#);

        let missing = load_record_document(dir.path().join("missing.json")).unwrap_err();
        assert!(missing.is_not_found());

        let broken = load_record_document(dir.path().join("broken.json")).unwrap_err();
        assert!(matches!(broken, LoadError::Parse { .. }));

        let object = load_record_document(dir.path().join("object.json")).unwrap_err();
        assert!(matches!(object, LoadError::Shape { .. }));
        assert_eq!(object.path(), dir.path().join("object.json"));
    }

    #[test]
    fn test_partial_load_reports_failure_and_keeps_other_groups() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "patentes/patentes-invencao.json",
            r#"[{"id": "1", "nome": "Sensor"}]"#,
        );

        let catalog = load_catalog(dir.path(), CatalogManifest::default());

        assert!(!catalog.is_complete());
        let failure = catalog.failure.as_ref().unwrap();
        assert_eq!(failure.total, 10);
        assert_eq!(failure.failures.len(), 9);
        assert!(failure
            .failures
            .iter()
            .all(|f| f.group != "patentes-invencao"));

        let store = &catalog.store;
        assert_eq!(store.records_in(Dataset::Technology, "patentes-invencao").len(), 1);
        assert!(store
            .records_in(Dataset::Technology, "patentes-utilidade")
            .is_empty());
        assert_eq!(store.groups_for(Dataset::Laboratory).len(), 6);
    }

    #[test]
    fn test_missing_or_non_directory_data_dir_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "arquivo.json", "[]");

        let missing = load_catalog_from_dir(dir.path().join("nao-existe")).unwrap_err();
        assert!(matches!(missing, LoadError::DataDir { .. }));
        assert_eq!(missing.path(), dir.path().join("nao-existe"));

        let file = load_catalog_from_dir(dir.path().join("arquivo.json")).unwrap_err();
        assert!(matches!(file, LoadError::DataDir { .. }));

        assert!(load_catalog_from_dir("/definitely/not/here").is_err());
    }
}
