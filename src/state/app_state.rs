use std::path::{Path, PathBuf};

use catalogo_core::labels::APP_TITLE;
use catalogo_core::*;

/// Where the catalog is in its load lifecycle
#[derive(Debug)]
pub enum LoadStatus {
    /// Nothing requested yet
    Idle,
    /// Documents are being read; the engine does not run
    Loading,
    /// Load finished (possibly with failed groups)
    Loaded(LoadedCatalog),
    /// The catalog could not be loaded at all (e.g. invalid manifest)
    Failed(String),
}

/// Application state management - Domain state only
/// This struct contains only domain/business logic state
#[derive(Debug)]
pub struct AppState {
    /// Data directory of the current (or pending) catalog
    pub data_dir: Option<PathBuf>,
    /// Catalog load lifecycle
    pub load_status: LoadStatus,
    /// Current selections
    pub filters: FilterState,
    /// Records currently shown in the result list, in display order
    pub displayed_records: Vec<Record>,
}

impl AppState {
    pub fn new(filters: FilterState) -> Self {
        Self {
            data_dir: None,
            load_status: LoadStatus::Idle,
            filters,
            displayed_records: Vec::new(),
        }
    }

    /// Enter the loading state for a data directory
    pub fn begin_load(&mut self, data_dir: PathBuf) {
        self.data_dir = Some(data_dir);
        self.load_status = LoadStatus::Loading;
        self.displayed_records.clear();
    }

    /// Install a finished load. Filters are kept so a reload preserves the view.
    pub fn install_catalog(&mut self, catalog: LoadedCatalog) {
        self.load_status = LoadStatus::Loaded(catalog);
    }

    pub fn load_failed(&mut self, reason: String) {
        self.load_status = LoadStatus::Failed(reason);
        self.displayed_records.clear();
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load_status, LoadStatus::Loading)
    }

    /// The loaded catalog, if any. Distinguishes "not loaded" from "no matches".
    pub fn catalog(&self) -> Option<&LoadedCatalog> {
        match &self.load_status {
            LoadStatus::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn store(&self) -> Option<&RecordStore> {
        self.catalog().map(|c| &c.store)
    }

    /// Apply a filter action; returns whether anything changed
    pub fn apply(&mut self, action: FilterAction) -> bool {
        self.filters.apply(action)
    }

    /// Replace the session with the one a link leads to
    pub fn navigate_to_search(&mut self, link: &str) {
        self.filters = FilterState::from_query(link, self.filters.policy());
    }

    /// Recompute the result list and remember it for index lookups.
    /// Returns None while no catalog is loaded.
    pub fn refresh_results(&mut self) -> Option<usize> {
        let results: Vec<Record> = {
            let store = self.store()?;
            compute_results(&self.filters, store)
                .into_iter()
                .cloned()
                .collect()
        };
        let count = results.len();
        self.displayed_records = results;
        Some(count)
    }

    /// Get a displayed record by list index
    pub fn displayed_record(&self, index: i32) -> Option<&Record> {
        if index < 0 {
            return None;
        }
        self.displayed_records.get(index as usize)
    }

    /// Get window title with the data directory name
    pub fn get_window_title(&self) -> String {
        let dir_name = self
            .data_dir
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .unwrap_or("sem dados");

        let marker = if self.is_loading() { " (carregando)" } else { "" };

        format!("{} - {}{}", APP_TITLE, dir_name, marker)
    }
}
