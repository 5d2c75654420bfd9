pub mod app_state;
pub mod ui_state;

pub use app_state::{AppState, LoadStatus};
pub use ui_state::{LoadOutcome, UiState};
