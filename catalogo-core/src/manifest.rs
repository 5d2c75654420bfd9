use crate::error::LoadError;
use crate::models::{Dataset, GroupKey};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the optional manifest override inside a data directory
pub const MANIFEST_FILE_NAME: &str = "catalogo.json";

/// Filing types of the technology collection, in display order
pub const TECHNOLOGY_GROUPS: [(&str, &str); 4] = [
    ("patentes-invencao", "Patentes de Invenção"),
    ("patentes-utilidade", "Modelos de Utilidade"),
    ("desenhos-industriais", "Desenhos Industriais"),
    ("programas-computadores", "Programas de Computador"),
];

/// Research areas of the laboratory collection, in display order
pub const LABORATORY_AREAS: [(&str, &str); 6] = [
    ("ciencias humanas", "Ciências Humanas"),
    ("ciencias biologicas", "Ciências Biológicas"),
    ("ciencias agrarias", "Ciências Agrárias"),
    ("ciencias exatas e da terra", "Ciências Exatas e da Terra"),
    ("ciencias da saude", "Ciências da Saúde"),
    ("ciencias sociais aplicadas", "Ciências Sociais Aplicadas"),
];

/// One declared group: its key, its display label and the document holding its records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    pub key: GroupKey,
    pub label: String,
    /// Path of the JSON document, relative to the data directory
    pub file: PathBuf,
}

/// Declared layout of the catalog: which groups exist and where their documents live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub technology: Vec<GroupSpec>,
    pub laboratory: Vec<GroupSpec>,
}

impl CatalogManifest {
    /// Groups declared for a dataset, in declared order
    pub fn groups(&self, dataset: Dataset) -> &[GroupSpec] {
        match dataset {
            Dataset::Technology => &self.technology,
            Dataset::Laboratory => &self.laboratory,
        }
    }

    /// Total number of documents to load
    pub fn document_count(&self) -> usize {
        self.technology.len() + self.laboratory.len()
    }
}

impl Default for CatalogManifest {
    /// The layout of the published site:
    /// `patentes/<tipo>.json` and `laboratorios/laboratorios-<area>.json`
    fn default() -> Self {
        let technology = TECHNOLOGY_GROUPS
            .iter()
            .map(|(key, label)| GroupSpec {
                key: key.to_string(),
                label: label.to_string(),
                file: PathBuf::from("patentes").join(format!("{}.json", key)),
            })
            .collect();

        let laboratory = LABORATORY_AREAS
            .iter()
            .map(|(key, label)| GroupSpec {
                key: key.to_string(),
                label: label.to_string(),
                file: PathBuf::from("laboratorios")
                    .join(format!("laboratorios-{}.json", key.replace(' ', "-"))),
            })
            .collect();

        Self {
            technology,
            laboratory,
        }
    }
}

/// Load a manifest from a JSON file and validate it
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<CatalogManifest, LoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest: CatalogManifest =
        serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    crate::validation::validate_manifest(&manifest).map_err(|errors| LoadError::Manifest {
        path: path.to_path_buf(),
        errors,
    })?;

    Ok(manifest)
}

/// Use `catalogo.json` from the data directory when present, otherwise the default layout
pub fn resolve_manifest<P: AsRef<Path>>(data_dir: P) -> Result<CatalogManifest, LoadError> {
    let candidate = data_dir.as_ref().join(MANIFEST_FILE_NAME);
    if candidate.is_file() {
        tracing::info!(path = %candidate.display(), "using catalog manifest override");
        load_manifest(candidate)
    } else {
        Ok(CatalogManifest::default())
    }
}
