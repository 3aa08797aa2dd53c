//! Feed-level accumulation.

use chrono_tz::Tz;

use crate::event::{RawEvent, SimplifiedEvent};
use crate::filter::select_occurrences;
use crate::window::Window;

/// What one feed contributed to the run.
#[derive(Debug, Clone)]
pub struct FeedSummary {
    /// Retained occurrences, in feed order (chronological within each event)
    pub events: Vec<SimplifiedEvent>,
    /// Raw events seen in the feed, including every skipped one
    pub event_count: usize,
}

/// Run the window filter over every raw event of one feed.
///
/// Events are processed sequentially in feed order. Per-event failures are
/// already absorbed by the filter and leave no trace beyond `event_count`;
/// the only failure that aborts a run happens earlier, when the feed itself
/// cannot be fetched or parsed.
pub fn ingest_events(events: &[RawEvent], window: &Window, reference: Tz) -> FeedSummary {
    let mut simplified = Vec::new();

    for raw in events {
        simplified.extend(select_occurrences(raw, window, reference));
    }

    FeedSummary {
        events: simplified,
        event_count: events.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RawDateTime;
    use crate::ics::parse_feed;
    use chrono::{TimeZone, Utc};

    fn utc_field(value: &str) -> Option<RawDateTime> {
        Some(RawDateTime {
            value: value.to_string(),
            tzid: None,
            is_date: false,
        })
    }

    fn window() -> Window {
        Window::next_days(Utc.with_ymd_and_hms(2025, 3, 19, 0, 0, 0).unwrap(), 7)
    }

    #[test]
    fn accumulates_in_feed_order_and_counts_every_raw_event() {
        let events = vec![
            RawEvent {
                start: utc_field("20250321T100000Z"),
                summary: Some("Later in the feed, earlier in time".to_string()),
                ..Default::default()
            },
            // Skipped: no start
            RawEvent {
                summary: Some("Placeholder".to_string()),
                ..Default::default()
            },
            RawEvent {
                start: utc_field("20250320T100000Z"),
                summary: Some("Earlier in the feed, later in time".to_string()),
                ..Default::default()
            },
        ];

        let summary = ingest_events(&events, &window(), Tz::UTC);
        assert_eq!(summary.event_count, 3);
        assert_eq!(summary.events.len(), 2);
        // Feed order wins over chronological order across events
        assert!(summary.events[0].start > summary.events[1].start);
    }

    #[test]
    fn empty_feed_yields_empty_summary() {
        let summary = ingest_events(&[], &window(), Tz::UTC);
        assert_eq!(summary.event_count, 0);
        assert!(summary.events.is_empty());
    }

    #[test]
    fn standup_scenario_end_to_end() {
        // One timed event tomorrow 09:00-09:15, no recurrence
        let ics = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:TEST\r\n\
BEGIN:VEVENT\r\n\
UID:standup\r\n\
SUMMARY:Standup\r\n\
DTSTART:20250320T090000Z\r\n\
DTEND:20250320T091500Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

        let raw = parse_feed(ics).unwrap();
        let summary = ingest_events(&raw, &window(), Tz::UTC);

        assert_eq!(summary.event_count, 1);
        assert_eq!(
            summary.events,
            vec![SimplifiedEvent {
                title: "Standup".to_string(),
                start: Utc.with_ymd_and_hms(2025, 3, 20, 9, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2025, 3, 20, 9, 15, 0).unwrap(),
            }]
        );
    }

    #[test]
    fn weekly_sync_scenario_end_to_end() {
        // Recurring weekly, anchored 30 days before the window
        let ics = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:TEST\r\n\
BEGIN:VEVENT\r\n\
UID:weekly-sync\r\n\
SUMMARY:Weekly Sync\r\n\
DTSTART:20250217T140000Z\r\n\
DTEND:20250217T143000Z\r\n\
RRULE:FREQ=WEEKLY\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

        let raw = parse_feed(ics).unwrap();
        let w = window();
        let summary = ingest_events(&raw, &w, Tz::UTC);

        assert_eq!(summary.events.len(), 1);
        let event = &summary.events[0];
        assert_eq!(event.title, "Weekly Sync");
        assert!(w.contains_inclusive(event.start));
        assert_eq!(event.start, Utc.with_ymd_and_hms(2025, 3, 24, 14, 0, 0).unwrap());
        assert_eq!(event.end - event.start, chrono::Duration::minutes(30));
    }

    #[test]
    fn broken_events_never_escape_the_ingestor() {
        let events = vec![
            RawEvent {
                start: utc_field("banana"),
                ..Default::default()
            },
            RawEvent {
                start: utc_field("20250320T090000Z"),
                rrule: Some("FREQ=NOPE".to_string()),
                ..Default::default()
            },
        ];

        let summary = ingest_events(&events, &window(), Tz::UTC);
        assert_eq!(summary.event_count, 2);
        assert!(summary.events.is_empty());
    }
}
