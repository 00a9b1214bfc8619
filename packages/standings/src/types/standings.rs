//! Position groups and the snapshot they form.

use serde::{Deserialize, Serialize};

/// Position label used when a group carries no readable rank.
pub const UNKNOWN_POSITION: &str = "Unknown";

/// Time gap used when a group carries no readable gap (the leading group).
pub const ZERO_GAP: &str = "0s";

/// One cluster of riders sharing a race position at scrape time.
///
/// Field order is the serialized key order: `position`, `timeGap`, `riders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionGroup {
    /// Rank as shown on the page, or [`UNKNOWN_POSITION`]
    pub position: String,

    /// Delta behind the race leader, or [`ZERO_GAP`]
    pub time_gap: String,

    /// Rider names in page order
    pub riders: Vec<String>,
}

impl PositionGroup {
    /// Create a group with no riders.
    pub fn new(position: impl Into<String>, time_gap: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            time_gap: time_gap.into(),
            riders: Vec::new(),
        }
    }

    /// Append a rider name.
    pub fn with_rider(mut self, name: impl Into<String>) -> Self {
        self.riders.push(name.into());
        self
    }

    /// Check whether this group holds the race leader.
    pub fn is_leader(&self) -> bool {
        self.position == "1"
    }
}

/// One full snapshot of a stage's live standings, leader first.
///
/// Serializes as a bare JSON array of [`PositionGroup`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScrapeResult {
    pub groups: Vec<PositionGroup>,
}

impl ScrapeResult {
    pub fn new(groups: Vec<PositionGroup>) -> Self {
        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total riders across all groups.
    pub fn rider_count(&self) -> usize {
        self.groups.iter().map(|g| g.riders.len()).sum()
    }

    /// Render as the pretty-printed JSON body stored in the archive.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Vec<PositionGroup>> for ScrapeResult {
    fn from(groups: Vec<PositionGroup>) -> Self {
        Self::new(groups)
    }
}

impl IntoIterator for ScrapeResult {
    type Item = PositionGroup;
    type IntoIter = std::vec::IntoIter<PositionGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_bare_array_with_camel_case_fields() {
        let result = ScrapeResult::new(vec![PositionGroup::new("1", "0s").with_rider("Tadej Pogačar")]);

        let value: serde_json::Value = serde_json::to_value(&result).unwrap();

        assert_eq!(
            value,
            serde_json::json!([
                { "position": "1", "timeGap": "0s", "riders": ["Tadej Pogačar"] }
            ])
        );
    }

    #[test]
    fn test_pretty_json_keeps_field_order() {
        let result = ScrapeResult::new(vec![PositionGroup::new("2", "1:05")]);
        let json = result.to_pretty_json().unwrap();

        let position = json.find("\"position\"").unwrap();
        let gap = json.find("\"timeGap\"").unwrap();
        let riders = json.find("\"riders\"").unwrap();
        assert!(position < gap && gap < riders);
        assert!(json.contains('\n'), "expected pretty-printed output");
    }

    #[test]
    fn test_rider_count() {
        let result = ScrapeResult::new(vec![
            PositionGroup::new("1", "0s").with_rider("A").with_rider("B"),
            PositionGroup::new("2", "0:30"),
            PositionGroup::new("3", "2:10").with_rider("C"),
        ]);

        assert_eq!(result.len(), 3);
        assert_eq!(result.rider_count(), 3);
        assert!(result.groups[0].is_leader());
        assert!(!result.groups[1].is_leader());
    }
}
