//! Browser implementations.
//!
//! - `ChromeBrowser` - Headless Chrome driven over the DevTools Protocol
//! - `MockBrowser` - Canned pages for testing

mod chrome;
mod mock;

pub use chrome::ChromeBrowser;
pub use mock::{MockBrowser, MockBrowserCall};

// Re-export from traits for convenience
pub use crate::traits::browser::{Browser, BrowserSession};
