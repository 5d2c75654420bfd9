use catalogo_core::*;
use serde_json::json;
use std::fs;
use std::path::Path;

fn write_json(dir: &Path, rel: &str, value: serde_json::Value) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

/// A data directory laid out like the published site
fn seed_site(dir: &Path) {
    write_json(
        dir,
        "patentes/patentes-invencao.json",
        json!([
            {"id": "PI-1", "nome": "Sensor Térmico", "natureza": "Patente de Invenção",
             "inventores": ["José Álvares", "Ana Lima"]},
            {"id": "PI-2", "nome": "3D Printer", "natureza": "Patente de Invenção"}
        ]),
    );
    write_json(
        dir,
        "patentes/patentes-utilidade.json",
        json!([
            {"id": "MU-1", "nome": "Zeta Tool", "natureza": "Modelo de Utilidade"},
            {"id": "MU-2", "nome": "Ábaco", "natureza": "Modelo de Utilidade"}
        ]),
    );
    write_json(dir, "patentes/desenhos-industriais.json", json!([]));
    write_json(
        dir,
        "patentes/programas-computadores.json",
        json!([{"id": 99, "titulo": "Sistema de Gestão", "autores": ["Célia Prado"]}]),
    );

    for (area, records) in [
        (
            "ciencias-humanas",
            json!([{"id": "LH", "nome": "Laboratório de História Oral", "natureza": "Pesquisa"}]),
        ),
        ("ciencias-biologicas", json!([])),
        ("ciencias-agrarias", json!([{"id": "LA", "nome": "Horta Experimental"}])),
        ("ciencias-exatas-e-da-terra", json!([])),
        (
            "ciencias-da-saude",
            json!([{"id": "LS", "nome": "Ambulatório Escola", "natureza": "Extensão"}]),
        ),
        ("ciencias-sociais-aplicadas", json!([])),
    ] {
        write_json(dir, &format!("laboratorios/laboratorios-{}.json", area), records);
    }
}

fn names<'a>(results: &[&'a Record]) -> Vec<&'a str> {
    results.iter().map(|r| r.display_name()).collect()
}

#[test]
fn test_full_session() {
    let dir = tempfile::tempdir().unwrap();
    seed_site(dir.path());

    let catalog = load_catalog_from_dir(dir.path()).unwrap();
    assert!(catalog.is_complete());
    let store = &catalog.store;

    // Session starts from a search link
    let link = search_link("jose alvares").unwrap();
    let mut state = FilterState::from_query(&link, SelectionPolicy::Exclusive);
    assert_eq!(names(&compute_results(&state, store)), vec!["Sensor Térmico"]);

    // Clear the search: every technology, letters before digits
    state.apply(FilterAction::SetSearchText(String::new()));
    assert_eq!(
        names(&compute_results(&state, store)),
        vec![
            "Ábaco",
            "Sensor Térmico",
            "Sistema de Gestão",
            "Zeta Tool",
            "3D Printer"
        ]
    );

    // Exclusive group selection
    state.apply(FilterAction::SelectGroup("patentes-invencao".to_string()));
    state.apply(FilterAction::SelectGroup("patentes-utilidade".to_string()));
    assert_eq!(
        state.selected_groups().iter().collect::<Vec<_>>(),
        vec!["patentes-utilidade"]
    );
    assert_eq!(names(&compute_results(&state, store)), vec!["Ábaco", "Zeta Tool"]);

    // Classification facet
    state.apply(FilterAction::ToggleClassification {
        label: "modelo de utilidade".to_string(),
        checked: true,
    });
    assert_eq!(compute_results(&state, store).len(), 2);

    // Switching tabs clears facets, keeps search
    state.apply(FilterAction::SetSearchText("escola".to_string()));
    state.apply(FilterAction::SwitchDataset(Dataset::Laboratory));
    assert!(state.selected_groups().is_empty());
    assert_eq!(state.selected_classification(), None);
    assert_eq!(names(&compute_results(&state, store)), vec!["Ambulatório Escola"]);

    // Detail navigation resolves back to the record
    let results = compute_results(&state, store);
    let link = detail_link(results[0]).unwrap();
    match parse_link(&link) {
        Some(Destination::Detail { id }) => {
            let (dataset, record) = store.find_by_id(&id).unwrap();
            assert_eq!(dataset, Dataset::Laboratory);
            assert_eq!(record.display_name(), "Ambulatório Escola");
        }
        other => panic!("unexpected destination {:?}", other),
    }
}

#[test]
fn test_search_reaches_numeric_id_record_via_authors() {
    let dir = tempfile::tempdir().unwrap();
    seed_site(dir.path());
    let catalog = load_catalog_from_dir(dir.path()).unwrap();

    let mut state = FilterState::default();
    state.set_search_text("CELIA");
    let results = compute_results(&state, &catalog.store);
    assert_eq!(names(&results), vec!["Sistema de Gestão"]);
    assert_eq!(
        detail_link(results[0]).as_deref(),
        Some("detalhe.html?id=99")
    );
}

#[test]
fn test_missing_document_degrades_to_empty_group() {
    let dir = tempfile::tempdir().unwrap();
    seed_site(dir.path());
    fs::remove_file(dir.path().join("laboratorios/laboratorios-ciencias-humanas.json")).unwrap();

    let catalog = load_catalog_from_dir(dir.path()).unwrap();
    let failure = catalog.failure.as_ref().unwrap();
    assert_eq!(failure.failures.len(), 1);
    assert_eq!(failure.failures[0].group, "ciencias humanas");
    assert!(failure.failures[0].error.is_not_found());

    let mut state = FilterState::default();
    state.switch_dataset(Dataset::Laboratory);
    state.select_group("ciencias humanas");
    assert!(compute_results(&state, &catalog.store).is_empty());

    state.reset_group_filters();
    assert_eq!(
        names(&compute_results(&state, &catalog.store)),
        vec!["Ambulatório Escola", "Horta Experimental"]
    );
}

#[test]
fn test_manifest_override() {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        dir.path(),
        "catalogo.json",
        json!({
            "technology": [{"key": "software", "label": "Software", "file": "tec/software.json"}],
            "laboratory": [{"key": "geral", "label": "Geral", "file": "lab/geral.json"}]
        }),
    );
    write_json(dir.path(), "tec/software.json", json!([{"nome": "Compilador"}]));
    write_json(dir.path(), "lab/geral.json", json!([{"nome": "Oficina"}]));

    let catalog = load_catalog_from_dir(dir.path()).unwrap();
    assert!(catalog.is_complete());
    assert_eq!(catalog.store.groups_for(Dataset::Technology), &["software"]);
    assert_eq!(catalog.store.group_label(Dataset::Laboratory, "geral"), "Geral");
}

#[test]
fn test_invalid_manifest_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    write_json(
        dir.path(),
        "catalogo.json",
        json!({"technology": [], "laboratory": []}),
    );

    let error = load_catalog_from_dir(dir.path()).unwrap_err();
    assert!(matches!(error, LoadError::Manifest { .. }));
}
