//! Runner dependencies (using traits for testability)
//!
//! Production wiring uses headless Chrome and S3; tests swap in
//! `MockBrowser` and `MemoryStore` from the standings library.

use std::sync::Arc;
use tracing::info;

use standings::{
    Browser, ChromeBrowser, ObjectStore, RaceSource, S3Store, StageCalendar,
};

use crate::config::Config;

/// Everything the runner talks to.
#[derive(Clone)]
pub struct ArchiverDeps {
    pub calendar: StageCalendar,
    pub race: RaceSource,
    pub browser: Arc<dyn Browser>,
    pub store: Arc<dyn ObjectStore>,
}

impl ArchiverDeps {
    pub fn new(
        calendar: StageCalendar,
        race: RaceSource,
        browser: Arc<dyn Browser>,
        store: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            calendar,
            race,
            browser,
            store,
        }
    }

    /// Production dependencies: the built-in calendar, Chrome and S3.
    pub fn from_config(config: Config) -> Self {
        let browser = match config.chrome_executable {
            Some(path) => ChromeBrowser::new().with_executable(path),
            None => ChromeBrowser::new(),
        };

        info!(
            race = %config.race.race_slug,
            year = config.race.year,
            bucket = config.storage.bucket.as_deref().unwrap_or("<unset>"),
            "Dependencies configured"
        );

        Self::new(
            StageCalendar::tour_de_france_2025(),
            config.race,
            Arc::new(browser),
            Arc::new(S3Store::new(config.storage)),
        )
    }
}
