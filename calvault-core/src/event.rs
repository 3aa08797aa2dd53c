//! Feed-side and output-side event types.
//!
//! `RawEvent` is a read-only view of one VEVENT as it came off the wire: no
//! field is guaranteed present, and date values stay as text until the
//! resolver gets to them. `SimplifiedEvent`/`SimplifiedCalendar` are the
//! public-safe reduction that gets serialized and encrypted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One raw DTSTART/DTEND field: the ICS text value plus the parameters that
/// change how it must be interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDateTime {
    /// Property value as written in the feed, e.g. `20250320T150000`
    pub value: String,
    /// `TZID` parameter, if the feed qualified the value with a zone
    pub tzid: Option<String>,
    /// `VALUE=DATE` was declared (all-day event, no time component)
    pub is_date: bool,
}

/// A single event as read from a feed. Owned by the feed for the duration of
/// a run; the engine only ever borrows it.
#[derive(Debug, Clone, Default)]
pub struct RawEvent {
    pub start: Option<RawDateTime>,
    pub end: Option<RawDateTime>,
    pub summary: Option<String>,
    /// RRULE value for recurring events, e.g. `FREQ=WEEKLY;BYDAY=MO`
    pub rrule: Option<String>,
}

/// The externally visible reduction of one occurrence. No recurrence,
/// timezone or identifier metadata survives into this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedEvent {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// The full output of one run: every retained occurrence, in feed order,
/// plus the moment the collection was assembled. Built once, never mutated
/// afterwards, handed whole to the serializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedCalendar {
    pub events: Vec<SimplifiedEvent>,
    #[serde(rename = "dateCreated")]
    pub date_created: DateTime<Utc>,
}
