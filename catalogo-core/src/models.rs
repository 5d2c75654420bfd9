use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Name of a partition inside one collection (a filing type or a research area)
pub type GroupKey = String;

/// The two top-level collections
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    #[default]
    Technology,
    Laboratory,
}

impl Dataset {
    pub const ALL: [Dataset; 2] = [Dataset::Technology, Dataset::Laboratory];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Technology => "technology",
            Dataset::Laboratory => "laboratory",
        }
    }

    /// Position of the dataset in the tab bar
    pub fn index(&self) -> usize {
        match self {
            Dataset::Technology => 0,
            Dataset::Laboratory => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Dataset> {
        Dataset::ALL.get(index).copied()
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dataset {
    type Err = String;

    /// Accepts the stable identifiers plus the Portuguese tab names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "technology" | "tecnologias" | "patentes" => Ok(Dataset::Technology),
            "laboratory" | "laboratorios" | "laboratórios" => Ok(Dataset::Laboratory),
            other => Err(format!(
                "unknown dataset '{}' (expected 'technology' or 'laboratory')",
                other
            )),
        }
    }
}

/// One catalog entry. Field values are kept as raw JSON; the engine only
/// reads strings and arrays of strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Get a field as a string (string fields only)
    pub fn get_field_as_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Opaque identifier used for navigation. Numeric ids keep their JSON text.
    pub fn id(&self) -> Option<String> {
        match self.fields.get("id") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Display name: `nome`, falling back to `titulo`, else empty
    pub fn display_name(&self) -> &str {
        self.get_field_as_str("nome")
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.get_field_as_str("titulo"))
            .unwrap_or("")
    }

    /// The classification facet
    pub fn natureza(&self) -> Option<&str> {
        self.get_field_as_str("natureza")
    }

    /// Every string value of the record: string fields plus string elements of array fields
    pub fn text_values(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.values().flat_map(string_values)
    }
}

fn string_values(value: &Value) -> Box<dyn Iterator<Item = &str> + '_> {
    match value {
        Value::String(s) => Box::new(std::iter::once(s.as_str())),
        Value::Array(arr) => Box::new(arr.iter().filter_map(Value::as_str)),
        _ => Box::new(std::iter::empty()),
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Record::from_fields(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_display_name_falls_back_to_titulo() {
        assert_eq!(record(json!({"nome": "Sensor"})).display_name(), "Sensor");
        assert_eq!(record(json!({"titulo": "Programa"})).display_name(), "Programa");
        assert_eq!(
            record(json!({"nome": "  ", "titulo": "Programa"})).display_name(),
            "Programa"
        );
        assert_eq!(record(json!({"id": "1"})).display_name(), "");
    }

    #[test]
    fn test_id_accepts_numbers() {
        assert_eq!(record(json!({"id": 42})).id(), Some("42".to_string()));
        assert_eq!(record(json!({"id": "BR-7"})).id(), Some("BR-7".to_string()));
        assert_eq!(record(json!({"nome": "x"})).id(), None);
    }

    #[test]
    fn test_text_values_flatten_arrays() {
        let r = record(json!({
            "nome": "Sensor Térmico",
            "inventores": ["José Álvares", 3, "Ana"],
            "ano": 2020,
            "detalhes": {"nested": "ignored"}
        }));

        let mut values: Vec<&str> = r.text_values().collect();
        values.sort();
        assert_eq!(values, vec!["Ana", "José Álvares", "Sensor Térmico"]);
    }

    #[test]
    fn test_dataset_parsing() {
        assert_eq!("Tecnologias".parse::<Dataset>(), Ok(Dataset::Technology));
        assert_eq!("laboratory".parse::<Dataset>(), Ok(Dataset::Laboratory));
        assert!("outro".parse::<Dataset>().is_err());
        assert_eq!(Dataset::from_index(1), Some(Dataset::Laboratory));
        assert_eq!(Dataset::from_index(2), None);
    }
}
