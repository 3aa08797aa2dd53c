//! Feed parsing using the icalendar crate's parser.
//!
//! Only the fields the engine needs survive: start, end, summary, RRULE.
//! Date values are kept as raw text with their qualifiers; interpretation is
//! the resolver's job.

use icalendar::parser::{Property, read_calendar, unfold};

use crate::error::{CalVaultError, CalVaultResult};
use crate::event::{RawDateTime, RawEvent};

/// Parse feed content into its raw events, in feed order.
///
/// An unreadable calendar is a feed-level failure; individual VEVENTs are
/// never validated here, so a feed full of half-filled events still parses.
pub fn parse_feed(content: &str) -> CalVaultResult<Vec<RawEvent>> {
    let unfolded = unfold(content);
    let calendar =
        read_calendar(&unfolded).map_err(|e| CalVaultError::FeedParse(e.to_string()))?;

    Ok(calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .map(|vevent| RawEvent {
            start: vevent.find_prop("DTSTART").map(raw_date),
            end: vevent.find_prop("DTEND").map(raw_date),
            summary: vevent.find_prop("SUMMARY").map(|p| p.val.to_string()),
            rrule: vevent.find_prop("RRULE").map(|p| p.val.to_string()),
        })
        .collect())
}

/// Lift a DTSTART/DTEND property into a raw date field, carrying the TZID
/// and VALUE=DATE qualifiers along with the text value.
fn raw_date(prop: &Property) -> RawDateTime {
    let tzid = prop
        .params
        .iter()
        .find(|p| p.key == "TZID")
        .and_then(|p| p.val.as_ref().map(|v| v.to_string()));

    let is_date = prop
        .params
        .iter()
        .any(|p| p.key == "VALUE" && p.val.as_ref().map(|v| v.as_ref()) == Some("DATE"));

    RawDateTime {
        value: prop.val.to_string(),
        tzid,
        is_date,
    }
}
