//! DOM extraction rules for the live standings page.
//!
//! Works on rendered HTML only, so the rules can be exercised against
//! fixtures without a browser.
//!
//! ```text
//! .situCont
//!   └─ .situ5b
//!        └─ li.group            (one per position group, leader first)
//!             ├─ .bol font      → position
//!             ├─ .time          → first text node is the gap
//!             └─ ul > li > a    → rider names
//! ```

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::{debug, warn};

use crate::types::standings::{PositionGroup, ScrapeResult, UNKNOWN_POSITION, ZERO_GAP};

lazy_static! {
    static ref CONTAINER: Selector = Selector::parse(".situCont > .situ5b").unwrap();
    static ref GROUP: Selector = Selector::parse(".situCont > .situ5b > li.group").unwrap();
    static ref POSITION: Selector = Selector::parse(".bol font").unwrap();
    static ref TIME: Selector = Selector::parse(".time").unwrap();
    static ref RIDER_ITEM: Selector = Selector::parse("ul > li").unwrap();
    static ref RIDER_LINK: Selector = Selector::parse("a").unwrap();
}

/// Parse rendered HTML and extract its position groups.
pub fn extract_standings(html: &str) -> ScrapeResult {
    let document = Html::parse_document(html);
    extract_from_document(&document)
}

/// Extract position groups from an already-parsed document.
///
/// The page can render the groups list twice. Processing stops at the
/// second group labelled `"1"`; that element and everything after it are
/// dropped.
pub fn extract_from_document(document: &Html) -> ScrapeResult {
    if document.select(&CONTAINER).next().is_none() {
        warn!("Standings container not found on page");
    }

    let mut groups = Vec::new();
    let mut seen_leader = false;

    for element in document.select(&GROUP) {
        let position = group_position(element);

        if position == "1" {
            if seen_leader {
                debug!(kept = groups.len(), "Leader group repeated, stopping");
                break;
            }
            seen_leader = true;
        }

        groups.push(PositionGroup {
            position,
            time_gap: group_time_gap(element),
            riders: group_riders(element),
        });
    }

    debug!(groups = groups.len(), "Extracted position groups");
    ScrapeResult::new(groups)
}

fn group_position(group: ElementRef<'_>) -> String {
    group
        .select(&POSITION)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| UNKNOWN_POSITION.to_string())
}

/// Only the first child node counts: the `.time` element nests extra
/// markup after the gap itself.
fn group_time_gap(group: ElementRef<'_>) -> String {
    group
        .select(&TIME)
        .next()
        .and_then(|time| time.children().next())
        .map(|node| match node.value() {
            Node::Text(text) => collapse_whitespace(text),
            Node::Element(_) => ElementRef::wrap(node).map(element_text).unwrap_or_default(),
            _ => String::new(),
        })
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| ZERO_GAP.to_string())
}

fn group_riders(group: ElementRef<'_>) -> Vec<String> {
    group
        .select(&RIDER_ITEM)
        .filter_map(|item| item.select(&RIDER_LINK).next())
        .map(element_text)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Visible text of `element`, whitespace runs collapsed to single spaces.
fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
