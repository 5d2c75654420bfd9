use slint::SharedString;

use catalogo_core::normalize::eq_normalized;
use catalogo_core::{detail_link, FilterState, Record, RecordStore};

use super::types::{ClassificationEntry, GroupEntry};
use crate::MainWindow;

/// Render one field value for display
pub fn format_value(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.trim().is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(arr) => {
            let parts: Vec<String> = arr
                .iter()
                .filter_map(|v| match v {
                    serde_json::Value::String(s) => Some(s.clone()),
                    serde_json::Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        other => Some(other.to_string()),
    }
}

/// Capitalize a field name for display ("inventores" -> "Inventores")
fn field_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>().replace('_', " "),
        None => String::new(),
    }
}

/// Format the fields of a record into a displayable string
pub fn format_record_fields(record: &Record) -> String {
    let mut lines: Vec<String> = record
        .fields()
        .iter()
        .filter_map(|(key, value)| {
            format_value(value).map(|text| format!("• {}: {}", field_label(key), text))
        })
        .collect();

    lines.sort();
    lines.join("\n")
}

/// Group buttons of the active dataset
pub fn group_entries(store: &RecordStore, filters: &FilterState) -> Vec<GroupEntry> {
    let dataset = filters.active_dataset();
    store
        .groups_for(dataset)
        .iter()
        .map(|key| GroupEntry {
            key: SharedString::from(key.as_str()),
            label: SharedString::from(store.group_label(dataset, key)),
            selected: filters.is_group_selected(key),
        })
        .collect()
}

/// Classification checkboxes of the active dataset
pub fn classification_entries(store: &RecordStore, filters: &FilterState) -> Vec<ClassificationEntry> {
    store
        .classifications(filters.active_dataset())
        .into_iter()
        .map(|label| ClassificationEntry {
            checked: filters
                .selected_classification()
                .is_some_and(|selected| eq_normalized(selected, &label)),
            label: SharedString::from(label),
        })
        .collect()
}

/// Fill the detail pane with a record
pub fn show_record_detail(window: &MainWindow, record: &Record) {
    window.set_detail_title(SharedString::from(record.display_name()));
    window.set_detail_link(SharedString::from(detail_link(record).unwrap_or_default()));
    window.set_detail_body(SharedString::from(format_record_fields(record)));
}

/// Empty the detail pane
pub fn clear_record_detail(window: &MainWindow) {
    window.set_detail_title(SharedString::new());
    window.set_detail_link(SharedString::new());
    window.set_detail_body(SharedString::new());
}
