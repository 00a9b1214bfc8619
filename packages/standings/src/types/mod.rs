//! Data types shared by the extractor, archiver and runner.

pub mod archive;
pub mod race;
pub mod standings;
