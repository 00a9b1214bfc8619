//! Single-pass runner: resolve today's stage, extract, archive.
//!
//! ```text
//! RESOLVE ──(no stage)──────────────────────────► DONE
//!    │
//!    └─(stage n)─► EXTRACT_AND_ARCHIVE ──(ok/err)─► DONE
//! ```
//!
//! "No stage today" is a successful outcome. Extraction and archive
//! failures come back as a [`RunError`] tagged with the stage and step;
//! nothing is retried, the next scheduled invocation is the retry.

use chrono::{DateTime, Local, NaiveDate, Utc};
use std::fmt;
use thiserror::Error;
use tracing::{error, info};

use standings::{ArchiveError, Archiver, ScrapeError, StageCalendar, StageExtractor, StoredObject};

use crate::kernel::ArchiverDeps;

/// Pipeline step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Extract,
    Archive,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Extract => f.write_str("extract"),
            Step::Archive => f.write_str("archive"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("stage {stage}: extraction failed: {source}")]
    Extract {
        stage: u32,
        #[source]
        source: ScrapeError,
    },

    #[error("stage {stage}: archive failed: {source}")]
    Archive {
        stage: u32,
        #[source]
        source: ArchiveError,
    },
}

impl RunError {
    pub fn stage(&self) -> u32 {
        match self {
            RunError::Extract { stage, .. } | RunError::Archive { stage, .. } => *stage,
        }
    }

    pub fn step(&self) -> Step {
        match self {
            RunError::Extract { .. } => Step::Extract,
            RunError::Archive { .. } => Step::Archive,
        }
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Rest day or outside the race
    NoStage { date: NaiveDate },
    Archived {
        date: NaiveDate,
        stage: u32,
        groups: usize,
        stored: StoredObject,
    },
}

pub struct Runner {
    calendar: StageCalendar,
    extractor: StageExtractor,
    archiver: Archiver,
    date_override: Option<NaiveDate>,
    clock: fn() -> DateTime<Utc>,
}

impl Runner {
    pub fn new(deps: ArchiverDeps) -> Self {
        let extractor = StageExtractor::new(deps.browser, deps.race);
        let archiver = Archiver::new(deps.store);
        Self {
            calendar: deps.calendar,
            extractor,
            archiver,
            date_override: None,
            clock: Utc::now,
        }
    }

    /// Treat `date` as today.
    pub fn with_date_override(mut self, date: Option<NaiveDate>) -> Self {
        self.date_override = date;
        self
    }

    /// Source of extraction completion times.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Today's date from the local process clock, unless overridden.
    pub fn today(&self) -> NaiveDate {
        self.date_override
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub async fn run_today(&self) -> Result<RunOutcome, RunError> {
        self.run(self.today()).await
    }

    /// Run the pipeline as of `date`.
    pub async fn run(&self, date: NaiveDate) -> Result<RunOutcome, RunError> {
        let Some(stage) = self.calendar.stage_on(date) else {
            info!(date = %date, "No stage scheduled for today");
            return Ok(RunOutcome::NoStage { date });
        };

        info!(date = %date, stage, "Stage scheduled");
        let outcome = self.extract_and_archive(date, stage).await;

        if let Err(e) = &outcome {
            error!(stage = e.stage(), step = %e.step(), error = %e, "Stage run failed");
        }
        outcome
    }

    async fn extract_and_archive(&self, date: NaiveDate, stage: u32) -> Result<RunOutcome, RunError> {
        let result = self
            .extractor
            .extract(stage)
            .await
            .map_err(|source| RunError::Extract { stage, source })?;

        let completed_at = (self.clock)();
        let stored = self
            .archiver
            .archive(stage, &result, completed_at)
            .await
            .map_err(|source| RunError::Archive { stage, source })?;

        Ok(RunOutcome::Archived {
            date,
            stage,
            groups: result.len(),
            stored,
        })
    }
}
