use jsonschema::Validator;
use serde_json::{json, Value};
use std::sync::LazyLock;

/// Shape of a record document: a JSON array of objects.
/// Field contents are unconstrained: records with missing or oddly typed
/// fields still load and read as empty.
static RECORD_DOCUMENT_VALIDATOR: LazyLock<Validator> = LazyLock::new(|| {
    let schema = json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "Record document",
        "type": "array",
        "items": { "type": "object" }
    });
    jsonschema::validator_for(&schema).expect("record document schema")
});

/// Validate data against a compiled JSON Schema
/// Returns Ok(()) if valid, Err with list of validation errors if invalid
fn validate_with(validator: &Validator, data: &Value) -> Result<(), Vec<String>> {
    match validator.validate(data) {
        Ok(()) => Ok(()),
        Err(error) => {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            Err(vec![format!("{} at {}", error, location)])
        }
    }
}

/// Validate that a parsed document is an array of record objects
pub fn validate_record_document(document: &Value) -> Result<(), Vec<String>> {
    validate_with(&RECORD_DOCUMENT_VALIDATOR, document)
}
