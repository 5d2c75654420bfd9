use clap::Parser;
use slint::ComponentHandle;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use catalogo_core::{search_link, FilterState, SelectionPolicy};

mod errors;
mod handlers;
mod operations;
mod state;
mod ui;

slint::include_modules!();

use handlers::{
    register_dialog_handlers, register_file_handlers, register_filter_handlers,
    register_navigation_handlers, register_ui_handlers,
};
use operations::CatalogOperations;
use state::{AppState, UiState};

/// Technology and laboratory catalog browser
#[derive(Parser, Debug)]
#[command(name = "catalogo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the `patentes/` and `laboratorios/` documents
    #[arg(value_name = "DATA_DIR", env = "CATALOGO_DATA_DIR", default_value = "dados")]
    data_dir: PathBuf,

    /// Start with this search, as when arriving from a search link
    #[arg(short, long, value_name = "TERM")]
    query: Option<String>,

    /// Group button behaviour: "exclusive" or "toggle"
    #[arg(short, long, default_value_t = SelectionPolicy::Exclusive)]
    policy: SelectionPolicy,
}

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // A search term arrives the same way the search view receives it
    let filters = match args.query.as_deref().and_then(search_link) {
        Some(link) => FilterState::from_query(&link, args.policy),
        None => FilterState::new(args.policy),
    };

    let main_window = MainWindow::new()?;
    let app_state = Rc::new(RefCell::new(AppState::new(filters)));
    let ui_state = Rc::new(RefCell::new(UiState::new()));

    register_filter_handlers(&main_window, &app_state);
    register_navigation_handlers(&main_window, &app_state);
    register_file_handlers(&main_window, &app_state, &ui_state);
    register_dialog_handlers(&main_window);
    register_ui_handlers(&main_window);

    CatalogOperations::new(&app_state, &ui_state, &main_window).start_load(args.data_dir);

    main_window.run()?;
    Ok(())
}
