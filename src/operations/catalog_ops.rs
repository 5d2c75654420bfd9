use slint::ComponentHandle;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::mpsc;

use catalogo_core::load_catalog_from_dir;

use crate::errors::{map_load_error, map_load_failure};
use crate::state::{AppState, UiState};
use crate::ui::{set_status, show_error, update_ui_from_state};
use crate::{MainWindow, StatusLevel};

/// Catalog load orchestration
/// Documents are read on a worker thread; the result is installed on the UI thread
pub struct CatalogOperations<'a> {
    state: &'a Rc<RefCell<AppState>>,
    ui_state: &'a Rc<RefCell<UiState>>,
    window: &'a MainWindow,
}

impl<'a> CatalogOperations<'a> {
    pub fn new(
        state: &'a Rc<RefCell<AppState>>,
        ui_state: &'a Rc<RefCell<UiState>>,
        window: &'a MainWindow,
    ) -> Self {
        Self {
            state,
            ui_state,
            window,
        }
    }

    /// Start loading a data directory in the background
    pub fn start_load(&self, data_dir: PathBuf) {
        tracing::info!(data_dir = %data_dir.display(), "starting catalog load");

        self.state.borrow_mut().begin_load(data_dir.clone());
        update_ui_from_state(self.window, self.state);
        set_status(self.window, catalogo_core::labels::LOADING, StatusLevel::Info);

        let (sender, receiver) = mpsc::channel();
        self.ui_state.borrow_mut().set_pending_load(receiver);

        let window_weak = self.window.as_weak();
        std::thread::spawn(move || {
            let outcome = load_catalog_from_dir(&data_dir);
            if sender.send(outcome).is_err() {
                // A newer load replaced this one
                return;
            }
            let _ = window_weak.upgrade_in_event_loop(|window| window.invoke_catalog_ready());
        });
    }

    /// Install the result of the pending load, if it has arrived
    pub fn finish_load(&self) {
        let Some(outcome) = self.ui_state.borrow_mut().take_load_outcome() else {
            return;
        };
        let data_dir = self.state.borrow().data_dir.clone().unwrap_or_default();

        match outcome {
            Ok(catalog) => {
                let failure = catalog
                    .failure
                    .as_ref()
                    .map(|failure| map_load_failure(failure, &data_dir));

                self.state.borrow_mut().install_catalog(catalog);
                update_ui_from_state(self.window, self.state);

                match failure {
                    Some((title, message, details)) => {
                        set_status(self.window, message.as_str(), StatusLevel::Warning);
                        show_error(self.window, title, message, details);
                    }
                    None => {
                        let total = self
                            .state
                            .borrow()
                            .store()
                            .map(|store| {
                                store.total_records(catalogo_core::Dataset::Technology)
                                    + store.total_records(catalogo_core::Dataset::Laboratory)
                            })
                            .unwrap_or(0);
                        set_status(
                            self.window,
                            format!("{} registros carregados", total),
                            StatusLevel::Success,
                        );
                    }
                }
            }
            Err(error) => {
                tracing::error!(error = %error, "catalog load failed");
                let (title, message, details) = map_load_error(&error, &data_dir);
                self.state.borrow_mut().load_failed(error.to_string());
                update_ui_from_state(self.window, self.state);
                set_status(self.window, catalogo_core::labels::LOAD_FAILED, StatusLevel::Error);
                show_error(self.window, title, message, details);
            }
        }
    }

    /// Open a folder dialog and load the chosen data directory
    pub async fn open_folder_dialog_and_load(&self) {
        if let Some(folder) = rfd::AsyncFileDialog::new()
            .set_title("Abrir pasta de dados")
            .pick_folder()
            .await
        {
            self.start_load(folder.path().to_path_buf());
        }
    }

    /// Load the current data directory again
    pub fn reload(&self) {
        if self.state.borrow().is_loading() {
            set_status(self.window, "Carregamento em andamento", StatusLevel::Info);
            return;
        }

        let data_dir = self.state.borrow().data_dir.clone();
        match data_dir {
            Some(dir) => self.start_load(dir),
            None => set_status(self.window, "Nenhuma pasta de dados aberta", StatusLevel::Warning),
        }
    }
}
