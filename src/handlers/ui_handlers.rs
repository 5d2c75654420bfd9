use slint::ComponentHandle;

use catalogo_core::labels::APP_TITLE;

use crate::ui::set_status;
use crate::{MainWindow, StatusLevel};

/// Register all UI-related handlers
pub fn register_ui_handlers(window: &MainWindow) {
    register_about(window);
}

/// Register about handler
fn register_about(window: &MainWindow) {
    let main_window_weak = window.as_weak();

    window.on_about(move || {
        let main_window = main_window_weak.unwrap();

        set_status(
            &main_window,
            format!("{} {}", APP_TITLE, env!("CARGO_PKG_VERSION")),
            StatusLevel::Info,
        );
    });
}
