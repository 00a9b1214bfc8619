//! Mock browser for testing.
//!
//! Serves one canned HTML page (or a canned failure) and records every
//! launch, render and close so tests can assert on session lifecycle.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::ScrapeError;
use crate::traits::browser::{Browser, BrowserSession};

/// Record of a call made to the mock browser or one of its sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockBrowserCall {
    Launch,
    Render { url: String },
    Close,
}

#[derive(Debug, Clone, Default)]
enum Behavior {
    #[default]
    Blank,
    Page(String),
    FailLaunch(String),
    FailNavigation(String),
}

/// Mock browser returning a configured page.
#[derive(Default)]
pub struct MockBrowser {
    behavior: Arc<RwLock<Behavior>>,
    calls: Arc<RwLock<Vec<MockBrowserCall>>>,
}

impl MockBrowser {
    /// Create a mock that renders an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `html` for every URL (builder pattern).
    pub fn with_page(self, html: impl Into<String>) -> Self {
        *self.behavior.write().unwrap() = Behavior::Page(html.into());
        self
    }

    /// Fail every launch with `message`.
    pub fn failing_launch(self, message: impl Into<String>) -> Self {
        *self.behavior.write().unwrap() = Behavior::FailLaunch(message.into());
        self
    }

    /// Launch normally but fail every navigation with `message`.
    pub fn failing_navigation(self, message: impl Into<String>) -> Self {
        *self.behavior.write().unwrap() = Behavior::FailNavigation(message.into());
        self
    }

    /// All recorded calls in order.
    pub fn calls(&self) -> Vec<MockBrowserCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn launch_count(&self) -> usize {
        self.count(|c| matches!(c, MockBrowserCall::Launch))
    }

    pub fn close_count(&self) -> usize {
        self.count(|c| matches!(c, MockBrowserCall::Close))
    }

    /// URLs passed to `render`, in order.
    pub fn rendered_urls(&self) -> Vec<String> {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter_map(|c| match c {
                MockBrowserCall::Render { url } => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&MockBrowserCall) -> bool) -> usize {
        self.calls.read().unwrap().iter().filter(|c| pred(c)).count()
    }
}

impl Clone for MockBrowser {
    fn clone(&self) -> Self {
        Self {
            behavior: Arc::clone(&self.behavior),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl Browser for MockBrowser {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, ScrapeError> {
        self.calls.write().unwrap().push(MockBrowserCall::Launch);

        let behavior = self.behavior.read().unwrap().clone();
        if let Behavior::FailLaunch(message) = behavior {
            return Err(ScrapeError::Launch(message.into()));
        }

        Ok(Box::new(MockSession {
            behavior,
            calls: Arc::clone(&self.calls),
        }))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

struct MockSession {
    behavior: Behavior,
    calls: Arc<RwLock<Vec<MockBrowserCall>>>,
}

#[async_trait]
impl BrowserSession for MockSession {
    async fn render(&mut self, url: &str) -> Result<String, ScrapeError> {
        self.calls.write().unwrap().push(MockBrowserCall::Render {
            url: url.to_string(),
        });

        match &self.behavior {
            Behavior::Page(html) => Ok(html.clone()),
            Behavior::FailNavigation(message) => Err(ScrapeError::Navigation {
                url: url.to_string(),
                source: message.clone().into(),
            }),
            _ => Ok("<html><body></body></html>".to_string()),
        }
    }

    async fn close(self: Box<Self>) -> Result<(), ScrapeError> {
        self.calls.write().unwrap().push(MockBrowserCall::Close);
        Ok(())
    }
}
