use crate::models::{GroupKey, Record};
use crate::normalize::normalize;
use crate::sorting::sort_records;
use crate::state::FilterState;
use crate::store::RecordStore;

/// Groups whose records are candidates for the result set, in declared order.
/// No selection means every declared group of the active dataset; selected
/// keys that are not declared contribute nothing.
pub fn candidate_groups<'a>(state: &FilterState, store: &'a RecordStore) -> Vec<&'a GroupKey> {
    let declared = store.groups_for(state.active_dataset());

    if state.selected_groups().is_empty() {
        declared.iter().collect()
    } else {
        declared
            .iter()
            .filter(|key| state.is_group_selected(key))
            .collect()
    }
}

/// Classification filter: everything passes when nothing is selected,
/// otherwise the record's `natureza` must equal the selection after normalization
pub fn matches_classification(record: &Record, normalized_selected: Option<&str>) -> bool {
    match normalized_selected {
        None => true,
        Some(selected) => normalize(record.natureza().unwrap_or("")) == selected,
    }
}

/// Text filter over the whole record: any string field, or any string
/// element of an array field, containing the normalized term
pub fn matches_search(record: &Record, normalized_term: &str) -> bool {
    normalized_term.is_empty()
        || record
            .text_values()
            .any(|value| normalize(value).contains(normalized_term))
}

/// Compute the ordered result set for the current selections.
///
/// Records of the candidate groups are concatenated in declared order, then
/// the classification and text filters are applied and the survivors are
/// sorted with the ordering rules of the active dataset. An empty result is
/// a normal outcome; whether data has been loaded at all is tracked by the
/// caller.
pub fn compute_results<'a>(state: &FilterState, store: &'a RecordStore) -> Vec<&'a Record> {
    let dataset = state.active_dataset();
    let classification = state.selected_classification().map(normalize);
    let term = state.normalized_search();

    let mut results: Vec<&Record> = candidate_groups(state, store)
        .into_iter()
        .flat_map(|key| store.records_in(dataset, key))
        .filter(|record| matches_classification(record, classification.as_deref()))
        .filter(|record| matches_search(record, &term))
        .collect();

    sort_records(&mut results, dataset);

    tracing::debug!(
        %dataset,
        groups = state.selected_groups().len(),
        classification = ?state.selected_classification(),
        term = %term,
        results = results.len(),
        "results recomputed"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dataset;
    use crate::state::SelectionPolicy;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    fn names<'a>(results: &[&'a Record]) -> Vec<&'a str> {
        results.iter().map(|r| r.display_name()).collect()
    }

    fn sample_store() -> RecordStore {
        RecordStore::default()
            .with_group(
                Dataset::Technology,
                "patentes-invencao",
                records(json!([
                    {"id": "1", "nome": "Sensor Térmico", "natureza": "Invenção",
                     "inventores": ["José Álvares", "Maria Souza"]},
                    {"id": "2", "nome": "3D Printer", "natureza": "Invenção"}
                ])),
            )
            .with_group(
                Dataset::Technology,
                "patentes-utilidade",
                records(json!([
                    {"id": "3", "nome": "Zeta Tool", "natureza": "Modelo de Utilidade"},
                    {"id": "4", "nome": "Ábaco", "natureza": "INVENCAO"}
                ])),
            )
            .with_group(
                Dataset::Laboratory,
                "ciencias da saude",
                records(json!([
                    {"id": "L1", "nome": "Laboratório de Imunologia", "natureza": "Pesquisa"},
                    {"id": "L2", "titulo": "Ambulatório Escola"}
                ])),
            )
            .with_group(
                Dataset::Laboratory,
                "ciencias humanas",
                records(json!([
                    {"id": "L3", "nome": "Arquivo Histórico", "natureza": "Extensão"}
                ])),
            )
    }

    #[test]
    fn test_no_selection_returns_every_group() {
        let store = sample_store();
        let state = FilterState::default();

        let results = compute_results(&state, &store);
        assert_eq!(
            names(&results),
            vec!["Ábaco", "Sensor Térmico", "Zeta Tool", "3D Printer"]
        );
        assert_eq!(results.len(), store.total_records(Dataset::Technology));
    }

    #[test]
    fn test_candidate_groups_follow_declared_order() {
        let store = sample_store();
        let mut state = FilterState::new(SelectionPolicy::Toggle);
        state.select_group("patentes-utilidade");
        state.select_group("patentes-invencao");
        state.select_group("nao-declarado");

        let groups = candidate_groups(&state, &store);
        assert_eq!(groups, vec!["patentes-invencao", "patentes-utilidade"]);
    }

    #[test]
    fn test_group_selection_narrows_results() {
        let store = sample_store();
        let mut state = FilterState::default();
        state.select_group("patentes-utilidade");

        let results = compute_results(&state, &store);
        assert_eq!(names(&results), vec!["Ábaco", "Zeta Tool"]);
    }

    #[test]
    fn test_classification_filter_is_normalized() {
        let store = sample_store();
        let mut state = FilterState::default();
        state.set_classification(Some("invenção"));

        let results = compute_results(&state, &store);
        assert_eq!(names(&results), vec!["Ábaco", "Sensor Térmico", "3D Printer"]);
        for record in &results {
            assert_eq!(normalize(record.natureza().unwrap()), "invencao");
        }
    }

    #[test]
    fn test_missing_classification_never_matches_a_selection() {
        let store = sample_store();
        let mut state = FilterState::default();
        state.switch_dataset(Dataset::Laboratory);
        state.set_classification(Some("Pesquisa"));

        let results = compute_results(&state, &store);
        assert_eq!(names(&results), vec!["Laboratório de Imunologia"]);
    }

    #[test]
    fn test_search_matches_array_field_without_accents() {
        let store = sample_store();
        let mut state = FilterState::default();
        state.set_search_text("jose alvares");

        let results = compute_results(&state, &store);
        assert_eq!(names(&results), vec!["Sensor Térmico"]);
    }

    #[test]
    fn test_search_matches_name() {
        let store = sample_store();
        let mut state = FilterState::default();
        state.set_search_text("  TERMICO ");

        let results = compute_results(&state, &store);
        assert_eq!(names(&results), vec!["Sensor Térmico"]);
    }

    #[test]
    fn test_search_scans_every_string_field() {
        let store = sample_store();
        let mut state = FilterState::default();
        state.set_search_text("utilidade");

        let results = compute_results(&state, &store);
        assert_eq!(names(&results), vec!["Zeta Tool"]);
    }

    #[test]
    fn test_laboratory_sort_uses_titulo_fallback() {
        let store = sample_store();
        let mut state = FilterState::default();
        state.switch_dataset(Dataset::Laboratory);

        let results = compute_results(&state, &store);
        assert_eq!(
            names(&results),
            vec!["Ambulatório Escola", "Arquivo Histórico", "Laboratório de Imunologia"]
        );
    }

    #[test]
    fn test_filters_combine() {
        let store = sample_store();
        let mut state = FilterState::default();
        state.select_group("patentes-invencao");
        state.set_classification(Some("Invenção"));
        state.set_search_text("printer");

        let results = compute_results(&state, &store);
        assert_eq!(names(&results), vec!["3D Printer"]);
    }

    #[test]
    fn test_zero_matches_is_empty_not_error() {
        let store = sample_store();
        let mut state = FilterState::default();
        state.set_search_text("inexistente");
        assert!(compute_results(&state, &store).is_empty());

        let empty = RecordStore::default();
        assert!(compute_results(&FilterState::default(), &empty).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let store = sample_store();
        let state = FilterState::default();

        let first = compute_results(&state, &store);
        let second = compute_results(&state, &store);
        assert_eq!(first, second);
    }

    #[test]
    fn test_records_without_fields_are_tolerated() {
        let store = RecordStore::default().with_group(
            Dataset::Technology,
            "x",
            records(json!([{}, {"nome": null, "natureza": 3}, {"nome": "Alfa"}])),
        );
        let mut state = FilterState::default();

        assert_eq!(compute_results(&state, &store).len(), 3);

        state.set_search_text("alfa");
        assert_eq!(names(&compute_results(&state, &store)), vec!["Alfa"]);
    }
}
