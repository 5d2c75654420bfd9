use slint::SharedString;

use super::types::{StatusLevel, StatusMessage};
use crate::MainWindow;

/// Helper function to set status message with semantic level
pub fn set_status(window: &MainWindow, text: impl Into<SharedString>, level: StatusLevel) {
    window.set_status(StatusMessage {
        text: text.into(),
        level,
    });
}

/// Helper function to show error dialog
pub fn show_error(
    window: &MainWindow,
    title: impl Into<SharedString>,
    message: impl Into<SharedString>,
    details: impl Into<SharedString>,
) {
    window.set_error_title(title.into());
    window.set_error_message(message.into());
    window.set_error_details(details.into());
    window.set_show_error_dialog(true);
}

/// Helper function to hide error dialog
pub fn hide_error(window: &MainWindow) {
    window.set_show_error_dialog(false);
}
