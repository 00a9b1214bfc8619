//! Core trait abstractions.
//!
//! - [`browser`] - Headless browser sessions that render live pages
//! - [`store`] - Object storage for archived snapshots

pub mod browser;
pub mod store;
