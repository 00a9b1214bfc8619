//! End-to-end tests for extract → archive using the library mocks.

use chrono::{TimeZone, Utc};
use std::sync::Arc;

use standings::testing::{GroupFixture, MemoryStore, MockBrowser, StandingsPage};
use standings::{Archiver, PositionGroup, RaceSource, ScrapeResult, StageExtractor};

/// Helper to build a two-group live page.
fn two_group_page() -> String {
    StandingsPage::new()
        .group(GroupFixture::new("1").riders(["Tadej Pogačar", "Jonas Vingegaard", "  "]))
        .group(
            GroupFixture::new("2")
                .time("1:42")
                .riders(["Florian Lipowitz", "Oscar Onley"]),
        )
        .group(GroupFixture::new("1").riders(["Tadej Pogačar"]))
        .render()
}

#[tokio::test]
async fn test_stage_five_round_trips_through_archive() {
    let browser = MockBrowser::new().with_page(two_group_page());
    let store = MemoryStore::new();
    let extractor = StageExtractor::new(Arc::new(browser.clone()), RaceSource::default());
    let archiver = Archiver::new(Arc::new(store.clone()));
    let completed_at = Utc.with_ymd_and_hms(2025, 7, 9, 14, 30, 0).unwrap();

    let result = extractor.extract(5).await.unwrap();
    let stored = archiver.archive(5, &result, completed_at).await.unwrap();

    let record = store.get(&stored.key).expect("record stored under returned key");
    let parsed: ScrapeResult = serde_json::from_str(&record.body).unwrap();
    assert_eq!(parsed, result);
    assert_eq!(
        parsed.groups,
        vec![
            PositionGroup::new("1", "0s")
                .with_rider("Tadej Pogačar")
                .with_rider("Jonas Vingegaard"),
            PositionGroup::new("2", "1:42")
                .with_rider("Florian Lipowitz")
                .with_rider("Oscar Onley"),
        ]
    );

    let raw: serde_json::Value = serde_json::from_str(&record.body).unwrap();
    let first = raw[0].as_object().unwrap();
    let keys: Vec<&str> = first.keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 3);
    assert!(first.contains_key("position"));
    assert!(first.contains_key("timeGap"));
    assert!(first.contains_key("riders"));

    assert_eq!(stored.key, "stage-5/2025-07-09T14-30-00-000Z.json");
    assert_eq!(browser.close_count(), 1);
}

#[tokio::test]
async fn test_empty_live_page_archives_empty_array() {
    let browser = MockBrowser::new().with_page("<html><body>Live coverage starts soon</body></html>");
    let store = MemoryStore::new();
    let extractor = StageExtractor::new(Arc::new(browser), RaceSource::default());
    let archiver = Archiver::new(Arc::new(store.clone()));

    let result = extractor.extract(1).await.unwrap();
    archiver.archive(1, &result, Utc::now()).await.unwrap();

    assert_eq!(store.objects()[0].body, "[]");
}
