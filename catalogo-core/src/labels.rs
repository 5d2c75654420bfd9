//! User-facing strings. Internal identifiers (dataset names, group keys such
//! as `patentes-invencao`) never change; only what is shown here does.

use crate::grouping::UNSPECIFIED_GROUP;
use crate::models::Dataset;

pub const APP_TITLE: &str = "Catálogo de Tecnologias e Laboratórios";
pub const LOADING: &str = "Carregando dados…";
pub const LOAD_FAILED: &str = "Erro ao carregar os dados.";
pub const NO_RESULTS: &str = "Nenhum resultado encontrado.";
pub const ALL_GROUPS: &str = "Todos";
pub const UNSPECIFIED_CLASSIFICATION: &str = "Sem natureza";
pub const SEARCH_PLACEHOLDER: &str = "Buscar por nome, autor, natureza…";

/// Tab label of a dataset. The technology collection is stored under
/// patent-named keys but presented as "Tecnologias".
pub fn dataset_label(dataset: Dataset) -> &'static str {
    match dataset {
        Dataset::Technology => "Tecnologias",
        Dataset::Laboratory => "Laboratórios",
    }
}

/// Title of the group filter panel for a dataset
pub fn group_panel_title(dataset: Dataset) -> &'static str {
    match dataset {
        Dataset::Technology => "Tipos de tecnologia",
        Dataset::Laboratory => "Áreas",
    }
}

/// Display text for a classification bucket
pub fn classification_label(label: &str) -> &str {
    if label == UNSPECIFIED_GROUP {
        UNSPECIFIED_CLASSIFICATION
    } else {
        label
    }
}

/// "1 resultado" / "N resultados"
pub fn result_count(count: usize) -> String {
    match count {
        0 => NO_RESULTS.to_string(),
        1 => "1 resultado".to_string(),
        n => format!("{} resultados", n),
    }
}
