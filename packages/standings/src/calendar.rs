//! Static date → stage lookup.
//!
//! A date with no entry is a rest day or falls outside the race: the runner
//! treats it as "nothing to do", not as an error.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::error::CalendarError;

/// Date format accepted by [`StageCalendar::stage_for`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const TOUR_DE_FRANCE_2025: [(&str, u32); 21] = [
    ("2025-07-05", 1),
    ("2025-07-06", 2),
    ("2025-07-07", 3),
    ("2025-07-08", 4),
    ("2025-07-09", 5),
    ("2025-07-10", 6),
    ("2025-07-11", 7),
    ("2025-07-12", 8),
    ("2025-07-13", 9),
    ("2025-07-14", 10),
    ("2025-07-16", 11),
    ("2025-07-17", 12),
    ("2025-07-18", 13),
    ("2025-07-19", 14),
    ("2025-07-20", 15),
    ("2025-07-22", 16),
    ("2025-07-23", 17),
    ("2025-07-24", 18),
    ("2025-07-25", 19),
    ("2025-07-26", 20),
    ("2025-07-27", 21),
];

/// Immutable mapping from calendar date to stage number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageCalendar {
    stages: BTreeMap<NaiveDate, u32>,
}

impl Default for StageCalendar {
    fn default() -> Self {
        Self::tour_de_france_2025()
    }
}

impl StageCalendar {
    /// The 2025 Tour de France: 21 stages, rest days on 15 and 21 July.
    pub fn tour_de_france_2025() -> Self {
        Self::from_entries(TOUR_DE_FRANCE_2025).expect("built-in calendar is valid")
    }

    /// Build a calendar from `(YYYY-MM-DD, stage)` pairs.
    ///
    /// Rejects unparsable dates, repeated dates and stage number zero.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, CalendarError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut stages = BTreeMap::new();
        for (date, stage) in entries {
            let date = date.as_ref();
            let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| {
                CalendarError::InvalidDate {
                    date: date.to_string(),
                }
            })?;
            if stage == 0 {
                return Err(CalendarError::ZeroStage {
                    date: date.to_string(),
                });
            }
            if stages.insert(parsed, stage).is_some() {
                return Err(CalendarError::DuplicateDate {
                    date: date.to_string(),
                });
            }
        }
        Ok(Self { stages })
    }

    /// Stage scheduled on a `YYYY-MM-DD` date, if any.
    ///
    /// A string that is not a valid date has no stage.
    pub fn stage_for(&self, date: &str) -> Option<u32> {
        NaiveDate::parse_from_str(date, DATE_FORMAT)
            .ok()
            .and_then(|d| self.stage_on(d))
    }

    /// Stage scheduled on `date`, if any.
    pub fn stage_on(&self, date: NaiveDate) -> Option<u32> {
        self.stages.get(&date).copied()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Entries in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.stages.iter().map(|(d, s)| (*d, *s))
    }
}
