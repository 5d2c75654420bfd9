use crate::manifest::CatalogManifest;
use crate::models::{Dataset, GroupKey, Record};
use crate::normalize::normalize;
use crate::sorting::sort_labels;
use std::collections::{HashMap, HashSet};

/// Declared groups of one collection and the records loaded for them
#[derive(Debug, Clone, Default)]
struct Collection {
    keys: Vec<GroupKey>,
    labels: HashMap<GroupKey, String>,
    records: HashMap<GroupKey, Vec<Record>>,
}

impl Collection {
    fn declare(&mut self, key: &str, label: &str) {
        if !self.labels.contains_key(key) {
            self.keys.push(key.to_string());
        }
        self.labels.insert(key.to_string(), label.to_string());
    }
}

/// Loaded collections, partitioned by group key.
/// Built once; read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    technology: Collection,
    laboratory: Collection,
}

impl RecordStore {
    /// A store with every group of the manifest declared and empty
    pub fn new(manifest: &CatalogManifest) -> Self {
        let mut store = Self::default();
        for dataset in Dataset::ALL {
            for group in manifest.groups(dataset) {
                store.collection_mut(dataset).declare(&group.key, &group.label);
            }
        }
        store
    }

    /// Declare `key` (label = key) if needed and set its records
    pub fn with_group(mut self, dataset: Dataset, key: &str, records: Vec<Record>) -> Self {
        if !self.collection(dataset).labels.contains_key(key) {
            self.collection_mut(dataset).declare(key, key);
        }
        self.set_records(dataset, key, records);
        self
    }

    /// Records of an undeclared group are kept but never returned by `groups_for`
    pub(crate) fn set_records(&mut self, dataset: Dataset, key: &str, records: Vec<Record>) {
        self.collection_mut(dataset)
            .records
            .insert(key.to_string(), records);
    }

    fn collection(&self, dataset: Dataset) -> &Collection {
        match dataset {
            Dataset::Technology => &self.technology,
            Dataset::Laboratory => &self.laboratory,
        }
    }

    fn collection_mut(&mut self, dataset: Dataset) -> &mut Collection {
        match dataset {
            Dataset::Technology => &mut self.technology,
            Dataset::Laboratory => &mut self.laboratory,
        }
    }

    /// Declared groups of a dataset, in declared order
    pub fn groups_for(&self, dataset: Dataset) -> &[GroupKey] {
        &self.collection(dataset).keys
    }

    /// Records of one group; empty for unknown or unloaded groups
    pub fn records_in(&self, dataset: Dataset, key: &str) -> &[Record] {
        self.collection(dataset)
            .records
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Display label of a group, falling back to its key
    pub fn group_label<'a>(&'a self, dataset: Dataset, key: &'a str) -> &'a str {
        self.collection(dataset)
            .labels
            .get(key)
            .map(String::as_str)
            .unwrap_or(key)
    }

    pub fn is_group_declared(&self, dataset: Dataset, key: &str) -> bool {
        self.collection(dataset).labels.contains_key(key)
    }

    /// Number of records across the declared groups of a dataset
    pub fn total_records(&self, dataset: Dataset) -> usize {
        self.groups_for(dataset)
            .iter()
            .map(|key| self.records_in(dataset, key).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        Dataset::ALL.iter().all(|d| self.total_records(*d) == 0)
    }

    /// Distinct classification labels of a dataset, deduplicated by their
    /// normalized form (first spelling wins) and sorted in collation order
    pub fn classifications(&self, dataset: Dataset) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut labels = Vec::new();

        for key in self.groups_for(dataset) {
            for record in self.records_in(dataset, key) {
                if let Some(natureza) = record.natureza() {
                    let normalized = normalize(natureza);
                    if !normalized.is_empty() && seen.insert(normalized) {
                        labels.push(natureza.trim().to_string());
                    }
                }
            }
        }

        sort_labels(&mut labels);
        labels
    }

    /// Find a record by its `id`, searching technology first
    pub fn find_by_id(&self, id: &str) -> Option<(Dataset, &Record)> {
        Dataset::ALL.iter().find_map(|&dataset| {
            self.groups_for(dataset)
                .iter()
                .flat_map(|key| self.records_in(dataset, key))
                .find(|record| record.id().as_deref() == Some(id))
                .map(|record| (dataset, record))
        })
    }
}
