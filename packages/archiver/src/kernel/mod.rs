//! Kernel module - infrastructure wiring for the runner.

pub mod deps;

pub use deps::ArchiverDeps;
