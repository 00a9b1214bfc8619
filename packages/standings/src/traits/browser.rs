//! Browser trait for rendering JavaScript-driven pages.
//!
//! A [`Browser`] launches isolated [`BrowserSession`]s. Sessions are scoped
//! resources: whoever launches one must call [`BrowserSession::close`] on
//! every path, success or failure.
//!
//! ```rust,ignore
//! let mut session = browser.launch().await?;
//! let html = session.render(url).await;
//! session.close().await?;
//! ```

use async_trait::async_trait;

use crate::error::ScrapeError;

#[async_trait]
pub trait Browser: Send + Sync {
    /// Start a fresh, isolated session.
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, ScrapeError>;

    /// Browser name for logging.
    fn name(&self) -> &str;
}

#[async_trait]
pub trait BrowserSession: Send {
    /// Navigate to `url`, wait for the core DOM and return the rendered HTML.
    ///
    /// Does not wait for every subresource to finish loading.
    async fn render(&mut self, url: &str) -> Result<String, ScrapeError>;

    /// Shut the session down and release the browser process.
    async fn close(self: Box<Self>) -> Result<(), ScrapeError>;
}
