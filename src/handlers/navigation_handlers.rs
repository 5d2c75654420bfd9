use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

use catalogo_core::{detail_link, parse_link, search_link, Destination};

use crate::state::AppState;
use crate::ui::{set_status, show_record_detail, update_ui_from_state};
use crate::{MainWindow, StatusLevel};

/// Register result and search navigation handlers
pub fn register_navigation_handlers(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    register_item_selected(window, app_state);
    register_search_submitted(window, app_state);
}

/// Register result selection handler: follows the record's detail link
fn register_item_selected(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_item_selected(move |index| {
        let main_window = main_window_weak.unwrap();
        let state_borrow = app_state.borrow();

        let Some(record) = state_borrow.displayed_record(index) else {
            return;
        };

        let Some(link) = detail_link(record) else {
            // Records without an id have no detail page; show what we have
            show_record_detail(&main_window, record);
            set_status(&main_window, "Registro sem identificador", StatusLevel::Warning);
            return;
        };

        let target = match parse_link(&link) {
            Some(Destination::Detail { id }) => state_borrow
                .store()
                .and_then(|store| store.find_by_id(&id))
                .map(|(_, found)| found),
            _ => None,
        };

        match target {
            Some(found) => {
                show_record_detail(&main_window, found);
                set_status(&main_window, link, StatusLevel::Info);
            }
            None => {
                tracing::warn!(%link, "detail link does not resolve to a record");
                show_record_detail(&main_window, record);
            }
        }
    });
}

/// Register search submit handler: navigates to the search view
fn register_search_submitted(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_search_submitted(move |text| {
        let main_window = main_window_weak.unwrap();

        match search_link(&text) {
            Some(link) => {
                tracing::debug!(%link, "navigating to search");
                app_state.borrow_mut().navigate_to_search(&link);
                update_ui_from_state(&main_window, &app_state);
            }
            None => set_status(&main_window, "Digite um termo para buscar", StatusLevel::Warning),
        }
    });
}
