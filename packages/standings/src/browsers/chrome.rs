//! Headless Chrome via `chromiumoxide`.

use async_trait::async_trait;
use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::{EventDomContentEventFired, NavigateParams};
use futures::StreamExt;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::error::ScrapeError;
use crate::traits::browser::{Browser, BrowserSession};

/// Upper bound on waiting for `DOMContentLoaded` after navigating.
pub const DOM_READY_TIMEOUT: Duration = Duration::from_secs(30);

/// Launches one headless Chrome process per session.
///
/// # Example
///
/// ```rust,ignore
/// use standings::browsers::ChromeBrowser;
///
/// let browser = ChromeBrowser::new().with_executable("/usr/bin/chromium");
/// let mut session = browser.launch().await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChromeBrowser {
    executable: Option<PathBuf>,
}

impl ChromeBrowser {
    /// Use the Chrome binary found on the system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit Chrome binary.
    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable = Some(path.into());
        self
    }

    fn config(&self) -> Result<BrowserConfig, ScrapeError> {
        // Container hosts run without a user namespace for the sandbox.
        let mut builder = BrowserConfig::builder().no_sandbox();
        if let Some(path) = &self.executable {
            builder = builder.chrome_executable(path);
        }
        builder.build().map_err(|e| ScrapeError::Launch(e.into()))
    }
}

#[async_trait]
impl Browser for ChromeBrowser {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, ScrapeError> {
        let config = self.config()?;
        let (browser, mut handler) = CdpBrowser::launch(config)
            .await
            .map_err(|e| ScrapeError::Launch(Box::new(e)))?;

        // The CDP connection only makes progress while its handler is polled.
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!(error = %e, "CDP handler error");
                }
            }
        });

        info!(executable = ?self.executable, "Chrome session launched");
        Ok(Box::new(ChromeSession { browser, handler }))
    }

    fn name(&self) -> &str {
        "chrome"
    }
}

struct ChromeSession {
    browser: CdpBrowser,
    handler: JoinHandle<()>,
}

#[async_trait]
impl BrowserSession for ChromeSession {
    /// Navigation completes on `DOMContentLoaded`. Images, ads and live
    /// ticker requests still in flight are not waited for.
    async fn render(&mut self, url: &str) -> Result<String, ScrapeError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| navigation_failure(url, e))?;

        // Subscribe before navigating so the event cannot be missed.
        let mut dom_ready = page
            .event_listener::<EventDomContentEventFired>()
            .await
            .map_err(|e| navigation_failure(url, e))?;

        let navigated = page
            .execute(NavigateParams::new(url))
            .await
            .map_err(|e| navigation_failure(url, e))?;
        check_navigation(url, navigated.result.error_text.as_deref())?;

        match timeout(DOM_READY_TIMEOUT, dom_ready.next()).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(navigation_failure(url, "page closed before DOMContentLoaded")),
            Err(elapsed) => return Err(navigation_failure(url, elapsed)),
        }

        let html = page
            .content()
            .await
            .map_err(|e| ScrapeError::Content(Box::new(e)))?;

        debug!(url = %url, bytes = html.len(), "Page rendered");
        Ok(html)
    }

    async fn close(mut self: Box<Self>) -> Result<(), ScrapeError> {
        let closed = match self.browser.close().await {
            Ok(_) => Ok(()),
            Err(e) => {
                // Without a CDP channel the process never exits on its own.
                warn!(error = %e, "CDP close failed, killing Chrome");
                if let Some(Err(kill_error)) = self.browser.kill().await {
                    warn!(error = %kill_error, "Killing Chrome failed");
                }
                Err(ScrapeError::Close(Box::new(e)))
            }
        };

        if let Err(e) = self.browser.wait().await {
            warn!(error = %e, "Chrome process did not exit cleanly");
        }
        self.handler.abort();

        debug!("Chrome session closed");
        closed
    }
}

fn navigation_failure(url: &str, source: impl Into<Box<dyn Error + Send + Sync>>) -> ScrapeError {
    ScrapeError::Navigation {
        url: url.to_string(),
        source: source.into(),
    }
}

/// `Page.navigate` reports DNS and connection failures in its result
/// rather than as a protocol error.
fn check_navigation(url: &str, error_text: Option<&str>) -> Result<(), ScrapeError> {
    match error_text {
        Some(text) if !text.is_empty() => Err(navigation_failure(url, text.to_string())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const PAGE: &str = "<html><body><div class=\"situCont\"><ul class=\"situ5b\">\
        <li class=\"group\"><span class=\"bol\"><font>1</font></span></li></ul></div>\
        <img src=\"/stalled.png\"></body></html>";

    /// Serves `PAGE` and never answers the image request, so `load` never fires.
    async fn serve_stalled_subresource() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let (mut socket, _) = listener.accept().await.unwrap();
                tokio::spawn(async move {
                    let mut request = [0u8; 2048];
                    let n = socket.read(&mut request).await.unwrap_or(0);
                    let request = String::from_utf8_lossy(&request[..n]);
                    if request.starts_with("GET /stalled.png") {
                        tokio::time::sleep(Duration::from_secs(3600)).await;
                        return;
                    }
                    let response = format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        PAGE.len(),
                        PAGE
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                });
            }
        });

        format!("http://{}/live", addr)
    }

    #[test]
    fn test_navigation_error_text_fails_render() {
        let err = check_navigation("https://example.invalid/live", Some("net::ERR_NAME_NOT_RESOLVED"))
            .unwrap_err();

        match err {
            ScrapeError::Navigation { url, source } => {
                assert_eq!(url, "https://example.invalid/live");
                assert_eq!(source.to_string(), "net::ERR_NAME_NOT_RESOLVED");
            }
            other => panic!("expected navigation error, got {:?}", other),
        }
    }

    #[test]
    fn test_navigation_without_error_text_succeeds() {
        assert!(check_navigation("https://example.com", None).is_ok());
        assert!(check_navigation("https://example.com", Some("")).is_ok());
    }

    #[tokio::test]
    #[ignore] // Requires a Chrome binary
    async fn test_render_returns_after_dom_ready_with_stalled_subresource() {
        let url = serve_stalled_subresource().await;
        let mut session = ChromeBrowser::new().launch().await.unwrap();

        let started = Instant::now();
        let html = session.render(&url).await;
        session.close().await.unwrap();

        let html = html.unwrap();
        assert!(html.contains("situ5b"));
        assert!(started.elapsed() < Duration::from_secs(20));
    }

    #[tokio::test]
    #[ignore] // Requires a Chrome binary
    async fn test_unreachable_host_is_a_navigation_error() {
        let mut session = ChromeBrowser::new().launch().await.unwrap();

        let err = session.render("http://127.0.0.1:1/live").await.unwrap_err();
        session.close().await.unwrap();

        assert!(matches!(err, ScrapeError::Navigation { .. }));
    }

    #[tokio::test]
    #[ignore] // Requires a Chrome binary
    async fn test_close_kills_chrome_when_cdp_channel_is_gone() {
        let config = ChromeBrowser::new().config().unwrap();
        let (browser, mut cdp) = CdpBrowser::launch(config).await.unwrap();
        let mut handler = tokio::spawn(async move { while cdp.next().await.is_some() {} });
        handler.abort();
        let _ = (&mut handler).await;

        let session = Box::new(ChromeSession { browser, handler });
        let closed = timeout(Duration::from_secs(10), session.close())
            .await
            .expect("close did not return");

        assert!(matches!(closed, Err(ScrapeError::Close(_))));
    }
}
