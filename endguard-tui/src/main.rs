mod app;
mod nav;
mod pages;
mod paths;
mod settings;
mod theme;
mod widgets;

use std::fs::{self, File};
use std::sync::Arc;

use endguard_lib::auth::Directory;
use endguard_lib::store::{MemoryStore, Store};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use app::{App, AppError};
use settings::{SettingsProvider, SqliteBackend};

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Logging goes to a rotated file under the cache dir; the terminal
/// itself is the UI.
fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }
}

async fn run() -> Result<(), AppError> {
    info!("endguard console starting");

    let db = paths::settings_db().ok_or(AppError::NoHomeDir)?;
    if let Some(parent) = db.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let settings = SettingsProvider::new(SqliteBackend::new(db).await?);

    let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
    let directory = Directory::new();

    let mut app = App::new(store, directory, settings).await?;
    app.run().await
}
