use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

use crate::operations::CatalogOperations;
use crate::state::{AppState, UiState};
use crate::MainWindow;

/// Register all data directory handlers
pub fn register_file_handlers(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    register_open_folder(window, app_state, ui_state);
    register_reload(window, app_state, ui_state);
    register_catalog_ready(window, app_state, ui_state);
}

/// Register "Abrir pasta" handler
fn register_open_folder(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let ui_state = ui_state.clone();

    window.on_open_folder(move || {
        let main_window = main_window_weak.unwrap();
        let app_state = app_state.clone();
        let ui_state = ui_state.clone();

        let spawned = slint::spawn_local(async move {
            let ops = CatalogOperations::new(&app_state, &ui_state, &main_window);
            ops.open_folder_dialog_and_load().await;
        });
        if let Err(e) = spawned {
            tracing::error!(error = %e, "could not open the folder dialog");
        }
    });
}

/// Register "Recarregar" handler
fn register_reload(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let ui_state = ui_state.clone();

    window.on_reload(move || {
        let main_window = main_window_weak.unwrap();
        CatalogOperations::new(&app_state, &ui_state, &main_window).reload();
    });
}

/// Register the background loader's completion handler
fn register_catalog_ready(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let ui_state = ui_state.clone();

    window.on_catalog_ready(move || {
        let main_window = main_window_weak.unwrap();
        CatalogOperations::new(&app_state, &ui_state, &main_window).finish_load();
    });
}
