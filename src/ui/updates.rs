use slint::{SharedString, StandardListViewItem, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

use catalogo_core::labels::{self, ALL_GROUPS, LOADING, LOAD_FAILED, SEARCH_PLACEHOLDER};
use catalogo_core::Dataset;

use crate::state::{AppState, LoadStatus};
use crate::ui::dialogs::set_status;
use crate::ui::formatting::{classification_entries, clear_record_detail, group_entries};
use crate::ui::types::{ClassificationEntry, GroupEntry, StatusLevel};
use crate::MainWindow;

/// Update the whole window from the current application state
pub fn update_ui_from_state(main_window: &MainWindow, state: &Rc<RefCell<AppState>>) {
    {
        let state_borrow = state.borrow();
        let filters = &state_borrow.filters;
        let dataset = filters.active_dataset();

        main_window.set_window_title(SharedString::from(state_borrow.get_window_title()));

        let tabs: Vec<SharedString> = Dataset::ALL
            .iter()
            .map(|d| SharedString::from(labels::dataset_label(*d)))
            .collect();
        main_window.set_tab_labels(Rc::new(VecModel::from(tabs)).into());
        main_window.set_active_tab(dataset.index() as i32);

        main_window.set_group_panel_title(SharedString::from(labels::group_panel_title(dataset)));
        main_window.set_all_groups_label(SharedString::from(ALL_GROUPS));
        main_window.set_all_groups_selected(filters.selected_groups().is_empty());
        main_window.set_search_placeholder(SharedString::from(SEARCH_PLACEHOLDER));

        // Only push the search text when it differs, so typing keeps the cursor
        if main_window.get_search_text().as_str() != filters.search_text() {
            main_window.set_search_text(SharedString::from(filters.search_text()));
        }

        let (groups, classifications) = match state_borrow.store() {
            Some(store) => (
                group_entries(store, filters),
                classification_entries(store, filters),
            ),
            None => (Vec::new(), Vec::new()),
        };
        main_window.set_groups(Rc::new(VecModel::<GroupEntry>::from(groups)).into());
        main_window
            .set_classifications(Rc::new(VecModel::<ClassificationEntry>::from(classifications)).into());
    }

    refresh_results_view(main_window, state);
}

/// Recompute the result list and push it to the window
pub fn refresh_results_view(main_window: &MainWindow, state: &Rc<RefCell<AppState>>) {
    // Selection and detail refer to the previous list
    main_window.set_selected_item_index(-1);
    clear_record_detail(main_window);

    let count = state.borrow_mut().refresh_results();

    let state_borrow = state.borrow();
    let summary = match (count, &state_borrow.load_status) {
        (Some(n), _) => labels::result_count(n),
        (None, LoadStatus::Failed(_)) => LOAD_FAILED.to_string(),
        (None, LoadStatus::Loading) => LOADING.to_string(),
        (None, _) => String::new(),
    };
    main_window.set_results_summary(SharedString::from(summary.as_str()));

    let items: Vec<StandardListViewItem> = state_borrow
        .displayed_records
        .iter()
        .map(|record| StandardListViewItem::from(SharedString::from(record.display_name())))
        .collect();
    main_window.set_items_list(Rc::new(VecModel::from(items)).into());

    if count == Some(0) {
        set_status(main_window, summary, StatusLevel::Info);
    }
}
