use eframe::egui;
use std::sync::Arc;
use std::time::Duration;

use folio::catalog::Catalog;
use folio::config::SiteConfig;
use folio::contact::LogSubmitter;
use folio::state::ViewState;
use folio::store::{FileStore, MemoryStore, PreferenceStore};

mod app;
mod ui;

use app::PortfolioApp;

/// Simulated delivery time for the contact form.
const SUBMIT_DELAY: Duration = Duration::from_millis(800);

fn open_store(config: &SiteConfig) -> Box<dyn PreferenceStore> {
    match FileStore::open(&config.store_dir) {
        Ok(store) => Box::new(store),
        Err(e) => {
            // Keep running; preferences just won't survive a restart.
            log::warn!("{}; falling back to in-memory preferences", e);
            Box::new(MemoryStore::new())
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = SiteConfig::from_env();
    let catalog = Catalog::builtin();
    let invalid = catalog.invalid_links();
    if !invalid.is_empty() {
        log::warn!("{} catalog links are not valid URLs", invalid.len());
    }

    let state = ViewState::load(catalog, open_store(&config)).with_scroll_config(config.scroll());
    let submitter = Arc::new(LogSubmitter { delay: SUBMIT_DELAY });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "folio",
        options,
        Box::new(move |_cc| Ok(Box::new(PortfolioApp::new(config, state, submitter)))),
    )
}
