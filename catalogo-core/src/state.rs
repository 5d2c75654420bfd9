use crate::models::{Dataset, GroupKey};
use crate::navigation::query_param;
use crate::normalize::{eq_normalized, normalize};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// How clicking a group button changes the group selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Clicking a group selects only that group; clicking it again keeps it selected
    #[default]
    Exclusive,
    /// Clicking a group adds or removes it; no selection means every group
    Toggle,
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::Exclusive => f.write_str("exclusive"),
            SelectionPolicy::Toggle => f.write_str("toggle"),
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exclusive" | "single" => Ok(SelectionPolicy::Exclusive),
            "toggle" | "multi" => Ok(SelectionPolicy::Toggle),
            other => Err(format!(
                "unknown selection policy '{}' (expected 'exclusive' or 'toggle')",
                other
            )),
        }
    }
}

/// A user interaction, expressed as a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SwitchDataset(Dataset),
    SelectGroup(GroupKey),
    SetClassification(Option<String>),
    /// Checkbox form: `checked == false` clears the facet only if `label` is the current value
    ToggleClassification { label: String, checked: bool },
    SetSearchText(String),
    ResetGroups,
    ResetClassification,
}

/// Current selections of a browsing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active_dataset: Dataset,
    selected_groups: BTreeSet<GroupKey>,
    selected_classification: Option<String>,
    search_text: String,
    policy: SelectionPolicy,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(SelectionPolicy::default())
    }
}

impl FilterState {
    /// Session defaults: technology active, nothing selected, no search text
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            active_dataset: Dataset::default(),
            selected_groups: BTreeSet::new(),
            selected_classification: None,
            search_text: String::new(),
            policy,
        }
    }

    /// Session defaults with the search text seeded from the `q` parameter
    /// of an incoming query string (e.g. `?q=sensor%20t%C3%A9rmico`)
    pub fn from_query(query: &str, policy: SelectionPolicy) -> Self {
        let mut state = Self::new(policy);
        if let Some(q) = query_param(query, "q") {
            state.search_text = q;
        }
        state
    }

    pub fn active_dataset(&self) -> Dataset {
        self.active_dataset
    }

    pub fn selected_groups(&self) -> &BTreeSet<GroupKey> {
        &self.selected_groups
    }

    pub fn is_group_selected(&self, key: &str) -> bool {
        self.selected_groups.contains(key)
    }

    pub fn selected_classification(&self) -> Option<&str> {
        self.selected_classification.as_deref()
    }

    /// Raw search text as typed, for redisplay in the search field
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Search text in the form used for matching
    pub fn normalized_search(&self) -> String {
        normalize(&self.search_text)
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Whether any filter narrows the default "everything" view
    pub fn has_filters(&self) -> bool {
        !self.selected_groups.is_empty()
            || self.selected_classification.is_some()
            || !self.normalized_search().is_empty()
    }

    /// Activate another dataset. Clears group and classification filters,
    /// keeps the search text. Returns false when `dataset` is already active.
    pub fn switch_dataset(&mut self, dataset: Dataset) -> bool {
        if dataset == self.active_dataset {
            return false;
        }
        self.active_dataset = dataset;
        self.reset_group_filters();
        self.reset_classification_filter();
        true
    }

    /// Apply a group click according to the selection policy
    pub fn select_group(&mut self, key: &str) -> bool {
        match self.policy {
            SelectionPolicy::Exclusive => {
                if self.selected_groups.len() == 1 && self.selected_groups.contains(key) {
                    return false;
                }
                self.selected_groups.clear();
                self.selected_groups.insert(key.to_string());
                true
            }
            SelectionPolicy::Toggle => {
                if !self.selected_groups.remove(key) {
                    self.selected_groups.insert(key.to_string());
                }
                true
            }
        }
    }

    /// Select a classification (replacing any other) or clear it with `None`.
    /// A label equal to the current one after normalization is a no-op.
    pub fn set_classification(&mut self, label: Option<&str>) -> bool {
        match label {
            Some(label) => {
                if self
                    .selected_classification
                    .as_deref()
                    .is_some_and(|current| eq_normalized(current, label))
                {
                    return false;
                }
                self.selected_classification = Some(label.to_string());
                true
            }
            None => self.selected_classification.take().is_some(),
        }
    }

    /// Checkbox semantics: checking selects `label`; unchecking clears the
    /// facet when `label` is the selected value
    pub fn toggle_classification(&mut self, label: &str, checked: bool) -> bool {
        if checked {
            return self.set_classification(Some(label));
        }
        let is_current = self
            .selected_classification
            .as_deref()
            .is_some_and(|current| eq_normalized(current, label));
        if is_current {
            self.set_classification(None)
        } else {
            false
        }
    }

    pub fn set_search_text(&mut self, text: &str) -> bool {
        if self.search_text == text {
            return false;
        }
        self.search_text = text.to_string();
        true
    }

    pub fn reset_group_filters(&mut self) -> bool {
        let changed = !self.selected_groups.is_empty();
        self.selected_groups.clear();
        changed
    }

    pub fn reset_classification_filter(&mut self) -> bool {
        self.selected_classification.take().is_some()
    }

    /// Apply an action; returns whether the state changed
    pub fn apply(&mut self, action: FilterAction) -> bool {
        let changed = match &action {
            FilterAction::SwitchDataset(dataset) => self.switch_dataset(*dataset),
            FilterAction::SelectGroup(key) => self.select_group(key),
            FilterAction::SetClassification(label) => self.set_classification(label.as_deref()),
            FilterAction::ToggleClassification { label, checked } => {
                self.toggle_classification(label, *checked)
            }
            FilterAction::SetSearchText(text) => self.set_search_text(text),
            FilterAction::ResetGroups => self.reset_group_filters(),
            FilterAction::ResetClassification => self.reset_classification_filter(),
        };
        tracing::debug!(?action, changed, "filter action applied");
        changed
    }
}
