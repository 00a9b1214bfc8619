//! Page Extractor: one browser session per stage scrape.

use std::sync::Arc;
use tracing::{info, warn};

use crate::error::ScrapeError;
use crate::extract::extract_standings;
use crate::traits::browser::Browser;
use crate::types::race::RaceSource;
use crate::types::standings::ScrapeResult;

/// Scrapes the live standings of a stage.
pub struct StageExtractor {
    browser: Arc<dyn Browser>,
    source: RaceSource,
}

impl StageExtractor {
    pub fn new(browser: Arc<dyn Browser>, source: RaceSource) -> Self {
        Self { browser, source }
    }

    pub fn source(&self) -> &RaceSource {
        &self.source
    }

    /// Render the stage's live page and extract its position groups.
    ///
    /// The browser session is closed exactly once before this returns,
    /// whether or not rendering succeeded. A failed close after a good
    /// render is logged and does not discard the result.
    pub async fn extract(&self, stage: u32) -> Result<ScrapeResult, ScrapeError> {
        let url = self.source.stage_url(stage);
        info!(stage, url = %url, browser = self.browser.name(), "Scraping stage");

        let mut session = self.browser.launch().await?;
        let rendered = session.render(&url).await;
        let closed = session.close().await;

        let html = match (rendered, closed) {
            (Ok(html), Ok(())) => html,
            (Ok(html), Err(e)) => {
                warn!(stage, error = %e, "Browser session did not close cleanly");
                html
            }
            (Err(e), closed) => {
                if let Err(close_error) = closed {
                    warn!(stage, error = %close_error, "Browser session did not close cleanly");
                }
                return Err(e);
            }
        };

        let result = extract_standings(&html);
        info!(
            stage,
            groups = result.len(),
            riders = result.rider_count(),
            "Stage scraped"
        );
        Ok(result)
    }
}
