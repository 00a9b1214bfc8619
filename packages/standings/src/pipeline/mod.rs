//! The two effectful pipeline steps.
//!
//! ```text
//! StageExtractor: launch → render → close → extract_standings
//! Archiver:       serialize → put
//! ```

mod archiver;
mod extractor;

pub use archiver::Archiver;
pub use extractor::StageExtractor;
