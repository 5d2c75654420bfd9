use std::path::Path;

use catalogo_core::{LoadError, LoadFailure};

/// Map a load error (manifest or document) to user-friendly messages
/// Returns (title, message, details)
pub fn map_load_error(error: &LoadError, data_dir: &Path) -> (String, String, String) {
    match error {
        LoadError::Io { source, path } if error.is_not_found() => (
            "Arquivo não encontrado".to_string(),
            "Um arquivo do catálogo não foi encontrado.".to_string(),
            format!(
                "Caminho: {}\nPasta de dados: {}\n\n{}",
                path.display(),
                data_dir.display(),
                source
            ),
        ),
        LoadError::Io { source, path }
            if source.kind() == std::io::ErrorKind::PermissionDenied =>
        {
            (
                "Permissão negada".to_string(),
                "Sem permissão para ler o catálogo.".to_string(),
                format!("Não é possível ler:\n{}", path.display()),
            )
        }
        LoadError::Parse { .. } => (
            "JSON inválido".to_string(),
            "Um documento do catálogo não é JSON válido.".to_string(),
            error.to_string(),
        ),
        LoadError::Shape { errors, .. } => (
            "Documento inválido".to_string(),
            "Um documento do catálogo não é uma lista de registros.".to_string(),
            errors.join("\n"),
        ),
        LoadError::Manifest { errors, path } => (
            "Manifesto inválido".to_string(),
            format!("O manifesto {} tem erros.", path.display()),
            errors.join("\n"),
        ),
        LoadError::DataDir { reason, path } => (
            "Pasta de dados inválida".to_string(),
            "A pasta de dados não pode ser aberta.".to_string(),
            format!("{}\n\nCaminho: {}", reason, path.display()),
        ),
        LoadError::Io { .. } => (
            "Erro ao carregar".to_string(),
            catalogo_core::labels::LOAD_FAILED.to_string(),
            error.to_string(),
        ),
    }
}

/// Map a partial load failure to user-friendly messages
/// Returns (title, message, details)
pub fn map_load_failure(failure: &LoadFailure, data_dir: &Path) -> (String, String, String) {
    let message = if failure.failures.len() == failure.total {
        catalogo_core::labels::LOAD_FAILED.to_string()
    } else {
        format!(
            "{} de {} documentos não foram carregados; os grupos afetados aparecem vazios.",
            failure.failures.len(),
            failure.total
        )
    };

    (
        "Erro ao carregar os dados".to_string(),
        message,
        format!("Pasta de dados: {}\n\n{}", data_dir.display(), failure.details()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogo_core::{Dataset, GroupLoadError};
    use std::path::PathBuf;

    fn not_found(path: &str) -> LoadError {
        LoadError::Io {
            path: PathBuf::from(path),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
    }

    #[test]
    fn test_map_not_found() {
        let (title, _, details) = map_load_error(&not_found("dados/patentes/x.json"), Path::new("dados"));
        assert_eq!(title, "Arquivo não encontrado");
        assert!(details.contains("dados/patentes/x.json"));
    }

    #[test]
    fn test_map_missing_data_dir() {
        let error = catalogo_core::load_catalog_from_dir("/nao/existe").unwrap_err();
        let (title, _, details) = map_load_error(&error, Path::new("/nao/existe"));
        assert_eq!(title, "Pasta de dados inválida");
        assert!(details.contains("/nao/existe"));
    }

    #[test]
    fn test_map_manifest_errors() {
        let error = LoadError::Manifest {
            path: PathBuf::from("dados/catalogo.json"),
            errors: vec!["a".to_string(), "b".to_string()],
        };
        let (title, _, details) = map_load_error(&error, Path::new("dados"));
        assert_eq!(title, "Manifesto inválido");
        assert_eq!(details, "a\nb");
    }

    #[test]
    fn test_map_partial_failure() {
        let failure = LoadFailure {
            failures: vec![GroupLoadError {
                dataset: Dataset::Laboratory,
                group: "ciencias humanas".to_string(),
                error: not_found("dados/laboratorios/laboratorios-ciencias-humanas.json"),
            }],
            total: 10,
        };
        let (_, message, details) = map_load_failure(&failure, Path::new("dados"));
        assert!(message.starts_with("1 de 10"));
        assert!(details.contains("ciencias humanas"));
    }
}
