pub mod dialogs;
pub mod formatting;
pub mod types;
pub mod updates;

pub use dialogs::{hide_error, set_status, show_error};
pub use formatting::show_record_detail;
pub use updates::{refresh_results_view, update_ui_from_state};
