use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

use catalogo_core::{Dataset, FilterAction};

use crate::state::AppState;
use crate::ui::{refresh_results_view, set_status, update_ui_from_state};
use crate::{MainWindow, StatusLevel};

/// Register all filter handlers
pub fn register_filter_handlers(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    register_tab_selected(window, app_state);
    register_group_clicked(window, app_state);
    register_show_all_groups(window, app_state);
    register_classification_toggled(window, app_state);
    register_search_edited(window, app_state);
    register_clear_filters(window, app_state);
}

/// Apply an action and refresh the window if it changed anything
fn apply_and_refresh(
    main_window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    action: FilterAction,
) -> bool {
    let changed = app_state.borrow_mut().apply(action);
    if changed {
        update_ui_from_state(main_window, app_state);
    }
    changed
}

/// Register tab switch handler
fn register_tab_selected(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_tab_selected(move |index| {
        let main_window = main_window_weak.unwrap();

        let Some(dataset) = usize::try_from(index).ok().and_then(Dataset::from_index) else {
            tracing::warn!(index, "unknown tab index");
            return;
        };
        apply_and_refresh(&main_window, &app_state, FilterAction::SwitchDataset(dataset));
    });
}

/// Register group button handler
fn register_group_clicked(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_group_clicked(move |key| {
        let main_window = main_window_weak.unwrap();
        apply_and_refresh(&main_window, &app_state, FilterAction::SelectGroup(key.to_string()));
    });
}

/// Register "Todos" button handler
fn register_show_all_groups(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_show_all_groups(move || {
        let main_window = main_window_weak.unwrap();
        apply_and_refresh(&main_window, &app_state, FilterAction::ResetGroups);
    });
}

/// Register classification checkbox handler
fn register_classification_toggled(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_classification_toggled(move |label, checked| {
        let main_window = main_window_weak.unwrap();
        let action = FilterAction::ToggleClassification {
            label: label.to_string(),
            checked,
        };
        // The checkbox already shows its new state; rebuild anyway so the
        // other boxes reflect the single-selection rule
        app_state.borrow_mut().apply(action);
        update_ui_from_state(&main_window, &app_state);
    });
}

/// Register search-as-you-type handler
fn register_search_edited(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_search_edited(move |text| {
        let main_window = main_window_weak.unwrap();
        let changed = app_state
            .borrow_mut()
            .apply(FilterAction::SetSearchText(text.to_string()));
        if changed {
            refresh_results_view(&main_window, &app_state);
        }
    });
}

/// Register clear filters handler
fn register_clear_filters(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_clear_filters(move || {
        let main_window = main_window_weak.unwrap();

        let changed = {
            let mut state_mut = app_state.borrow_mut();
            let groups = state_mut.apply(FilterAction::ResetGroups);
            let classification = state_mut.apply(FilterAction::ResetClassification);
            let search = state_mut.apply(FilterAction::SetSearchText(String::new()));
            groups || classification || search
        };

        update_ui_from_state(&main_window, &app_state);
        if changed {
            set_status(&main_window, "Filtros limpos", StatusLevel::Info);
        }
    });
}
