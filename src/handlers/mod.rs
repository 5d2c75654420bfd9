pub mod dialog_handlers;
pub mod file_handlers;
pub mod filter_handlers;
pub mod navigation_handlers;
pub mod ui_handlers;

pub use dialog_handlers::register_dialog_handlers;
pub use file_handlers::register_file_handlers;
pub use filter_handlers::register_filter_handlers;
pub use navigation_handlers::register_navigation_handlers;
pub use ui_handlers::register_ui_handlers;
