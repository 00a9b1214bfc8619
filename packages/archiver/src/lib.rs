// Live Stage Archiver - application core
//
// Resolves today's stage, scrapes its live standings and archives the
// snapshot to object storage. One pass per invocation; scheduling is
// external.

pub mod config;
pub mod kernel;
pub mod runner;

pub use config::*;
pub use runner::{RunError, RunOutcome, Runner, Step};
