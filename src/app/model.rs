//! Domain types and the pure logic behind the quote board: time-window
//! selection, ordering, scroll bookkeeping, and the stale-fetch guard.
//! Nothing in here touches the DOM, so everything is testable on the host.

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One quote as returned by the external API. Immutable once received; the
/// client never edits a quote, only re-requests the full list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub name: String,
    pub message: String,
    #[serde(deserialize_with = "deserialize_time")]
    pub time: String,
}

/// The API emits `time` as an ISO-8601 string, but tolerate an epoch number.
fn deserialize_time<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTime {
        Text(String),
        Epoch(i64),
    }

    Ok(match RawTime::deserialize(deserializer)? {
        RawTime::Text(text) => text,
        RawTime::Epoch(number) => number.to_string(),
    })
}

/// Time-range filter applied to the quote list. The `Display` value doubles
/// as the `max_age` query value and the tab label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    #[default]
    All,
    Week,
    Month,
    Year,
}

impl TimeWindow {
    /// Tab order, left to right.
    pub const ALL: [TimeWindow; 4] = [
        TimeWindow::All,
        TimeWindow::Week,
        TimeWindow::Month,
        TimeWindow::Year,
    ];

    pub fn as_query_value(self) -> &'static str {
        match self {
            TimeWindow::All => "all",
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
            TimeWindow::Year => "year",
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_query_value())
    }
}

/// Cosmetic arrangement of the quote feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    List,
    Grid,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 2] = [LayoutMode::List, LayoutMode::Grid];
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutMode::List => write!(f, "list"),
            LayoutMode::Grid => write!(f, "grid"),
        }
    }
}

/// Bumped by the form after a successful submit so the list re-fetches the
/// currently selected window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReloadTick(u64);

impl ReloadTick {
    pub fn bump(self) -> Self {
        ReloadTick(self.0.wrapping_add(1))
    }
}

/// Hands out generation tokens for list fetches. Only the most recently
/// issued token is current; a response carrying an older token must be
/// discarded so it cannot overwrite fresher data.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn begin(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.latest == token
    }
}

/// Quotes ordered by `time` descending, most recent first. The sort is
/// stable, so equal timestamps keep their relative input order.
pub fn sorted_by_time_desc(quotes: &[Quote]) -> Vec<Quote> {
    let mut sorted = quotes.to_vec();
    sorted.sort_by_key(|quote| Reverse(time_sort_key(&quote.time)));
    sorted
}

/// Lenient timestamp parse: RFC 3339, then naive ISO-8601 (the backend emits
/// `isoformat` without an offset), then integer epoch.
pub fn parse_time(time: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(time) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.and_utc());
    }

    if let Ok(number) = time.trim().parse::<i64>() {
        // Below ~100 billion the value can only be seconds.
        return if number.abs() < 100_000_000_000 {
            DateTime::from_timestamp(number, 0)
        } else {
            DateTime::from_timestamp_millis(number)
        };
    }

    None
}

/// Millisecond sort key; unparseable timestamps sort last.
pub fn time_sort_key(time: &str) -> i64 {
    parse_time(time)
        .map(|parsed| parsed.timestamp_millis())
        .unwrap_or(i64::MIN)
}

/// Human-readable rendering for cards; falls back to the raw value.
pub fn format_time(time: &str) -> String {
    parse_time(time)
        .map(|parsed| parsed.format("%b %-d, %Y %-I:%M %p").to_string())
        .unwrap_or_else(|| time.to_string())
}

/// Pixel slack below which the list counts as scrolled to the bottom.
pub const SCROLL_BOTTOM_THRESHOLD_PX: f64 = 5.0;

/// Number of inert placeholder blocks rendered while a fetch is in flight.
pub const SKELETON_COUNT: usize = 6;

pub fn is_at_bottom(scroll_top: f64, client_height: f64, scroll_height: f64) -> bool {
    scroll_top + client_height >= scroll_height - SCROLL_BOTTOM_THRESHOLD_PX
}

/// A draft may be submitted only when both fields carry visible content.
/// Enforced before any network request, in addition to the `required`
/// attributes on the inputs.
pub fn draft_is_valid(name: &str, message: &str) -> bool {
    !name.trim().is_empty() && !message.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(name: &str, message: &str, time: &str) -> Quote {
        Quote {
            name: name.to_string(),
            message: message.to_string(),
            time: time.to_string(),
        }
    }

    #[test]
    fn sorts_most_recent_first() {
        let quotes = vec![
            quote("A", "m1", "2024-01-02T00:00:00Z"),
            quote("B", "m2", "2024-01-01T00:00:00Z"),
        ];

        let sorted = sorted_by_time_desc(&quotes);
        assert_eq!(sorted[0].name, "A");
        assert_eq!(sorted[1].name, "B");

        // Reversed input lands in the same order.
        let reversed: Vec<Quote> = quotes.iter().rev().cloned().collect();
        assert_eq!(sorted_by_time_desc(&reversed), sorted);
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let quotes = vec![
            quote("first", "m1", "2024-06-01T12:00:00"),
            quote("second", "m2", "2024-06-01T12:00:00"),
            quote("third", "m3", "2024-06-01T12:00:00"),
        ];

        let sorted = sorted_by_time_desc(&quotes);
        let names: Vec<&str> = sorted.iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn unparseable_times_sort_last() {
        let quotes = vec![
            quote("bad", "m1", "yesterday-ish"),
            quote("good", "m2", "2020-01-01T00:00:00"),
        ];

        let sorted = sorted_by_time_desc(&quotes);
        assert_eq!(sorted[0].name, "good");
        assert_eq!(sorted[1].name, "bad");
    }

    #[test]
    fn parses_naive_isoformat_and_rfc3339_consistently() {
        let naive = parse_time("2024-01-02T03:04:05").unwrap();
        let rfc = parse_time("2024-01-02T03:04:05Z").unwrap();
        assert_eq!(naive, rfc);
    }

    #[test]
    fn parses_epoch_seconds_and_millis() {
        let seconds = parse_time("1704164645").unwrap();
        let millis = parse_time("1704164645000").unwrap();
        assert_eq!(seconds, millis);
        assert_eq!(seconds.timestamp(), 1_704_164_645);
    }

    #[test]
    fn format_time_falls_back_to_raw_value() {
        assert_eq!(format_time("not a time"), "not a time");
        assert!(format_time("2024-01-02T03:04:05").contains("2024"));
    }

    #[test]
    fn quote_accepts_string_or_epoch_time() {
        let from_text: Quote =
            serde_json::from_str(r#"{"name":"A","message":"m1","time":"2024-01-02T00:00:00"}"#)
                .unwrap();
        assert_eq!(from_text.time, "2024-01-02T00:00:00");

        let from_epoch: Quote =
            serde_json::from_str(r#"{"name":"B","message":"m2","time":1704164645}"#).unwrap();
        assert_eq!(from_epoch.time, "1704164645");
        assert!(parse_time(&from_epoch.time).is_some());
    }

    #[test]
    fn window_query_values() {
        assert_eq!(TimeWindow::All.as_query_value(), "all");
        assert_eq!(TimeWindow::Week.as_query_value(), "week");
        assert_eq!(TimeWindow::Month.as_query_value(), "month");
        assert_eq!(TimeWindow::Year.as_query_value(), "year");
        assert_eq!(TimeWindow::default(), TimeWindow::All);
    }

    #[test]
    fn stale_token_is_not_current() {
        let mut sequence = RequestSequence::default();
        let first = sequence.begin();
        assert!(sequence.is_current(first));

        // A newer request supersedes the first regardless of which response
        // arrives first.
        let second = sequence.begin();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[test]
    fn reload_tick_changes_once_per_bump() {
        let tick = ReloadTick::default();
        let bumped = tick.bump();
        assert_ne!(tick, bumped);
        assert_ne!(bumped, bumped.bump());
    }

    #[test]
    fn bottom_detection_respects_threshold() {
        // 5 px from the end still counts as bottom.
        assert!(is_at_bottom(495.0, 500.0, 1000.0));
        assert!(is_at_bottom(500.0, 500.0, 1000.0));
        // 6 px away does not.
        assert!(!is_at_bottom(494.0, 500.0, 1000.0));
    }

    #[test]
    fn empty_drafts_are_rejected() {
        assert!(draft_is_valid("C", "m3"));
        assert!(!draft_is_valid("", "m3"));
        assert!(!draft_is_valid("C", ""));
        assert!(!draft_is_valid("   ", "m3"));
        assert!(!draft_is_valid("C", "\n\t"));
    }
}
