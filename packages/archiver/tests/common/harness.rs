//! Test harness wiring the runner to mock infrastructure.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use std::sync::Arc;

use archiver_core::kernel::ArchiverDeps;
use archiver_core::Runner;
use standings::testing::{MemoryStore, MockBrowser};
use standings::{ObjectStore, RaceSource, StageCalendar};

/// Completion time every harness run reports: 2025-07-09T10:15:30.123Z.
pub fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 9, 10, 15, 30).unwrap() + Duration::milliseconds(123)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Runner plus handles on its mocks.
///
/// ```ignore
/// let ctx = TestHarness::with_browser(MockBrowser::new().with_page(html));
/// let outcome = ctx.runner().run(date(2025, 7, 9)).await?;
/// assert_eq!(ctx.store.objects().len(), 1);
/// ```
pub struct TestHarness {
    pub browser: MockBrowser,
    pub store: MemoryStore,
}

impl TestHarness {
    pub fn with_browser(browser: MockBrowser) -> Self {
        Self {
            browser,
            store: MemoryStore::new(),
        }
    }

    pub fn with_store(mut self, store: MemoryStore) -> Self {
        self.store = store;
        self
    }

    /// Runner backed by the mock browser and memory store.
    pub fn runner(&self) -> Runner {
        self.runner_with_store(Arc::new(self.store.clone()))
    }

    /// Runner backed by the mock browser and an arbitrary store.
    pub fn runner_with_store(&self, store: Arc<dyn ObjectStore>) -> Runner {
        let deps = ArchiverDeps::new(
            StageCalendar::tour_de_france_2025(),
            RaceSource::default(),
            Arc::new(self.browser.clone()),
            store,
        );
        Runner::new(deps).with_clock(fixed_clock)
    }
}
