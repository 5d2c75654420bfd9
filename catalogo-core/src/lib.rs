// Public modules
pub mod error;
pub mod grouping;
pub mod io;
pub mod labels;
pub mod manifest;
pub mod models;
pub mod navigation;
pub mod normalize;
pub mod query;
pub mod schema_validation;
pub mod sorting;
pub mod state;
pub mod store;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::{GroupLoadError, LoadError, LoadFailure};
pub use grouping::{group_by_classification, UNSPECIFIED_GROUP};
pub use io::{load_catalog, load_catalog_from_dir, load_record_document, LoadedCatalog};
pub use manifest::{load_manifest, resolve_manifest, CatalogManifest, GroupSpec};
pub use models::{Dataset, GroupKey, Record};
pub use navigation::{detail_link, parse_link, query_param, search_link, Destination};
pub use normalize::{contains_normalized, normalize};
pub use query::{candidate_groups, compute_results, matches_classification, matches_search};
pub use schema_validation::validate_record_document;
pub use sorting::{sort_records, starts_with_letter};
pub use state::{FilterAction, FilterState, SelectionPolicy};
pub use store::RecordStore;
pub use validation::{validate_data_dir, validate_manifest};
