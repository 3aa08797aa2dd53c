//! Resolving raw ICS date fields into zone-aware instants.
//!
//! A raw value means nothing on its own: `20250320T150000` is a different
//! instant depending on the `TZID` parameter next to it, the `VALUE=DATE`
//! declaration, or a trailing `Z`. Resolution combines value and qualifiers
//! in one step so a value is never interpreted in the wrong zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{CalVaultError, CalVaultResult};
use crate::event::RawDateTime;

/// Resolve a raw date field into an absolute instant plus the zone it was
/// resolved in.
///
/// - Absent field or empty value: `MissingDate`.
/// - `VALUE=DATE` (all-day): midnight in the effective zone.
/// - Trailing `Z`: UTC, regardless of any `TZID`.
/// - Explicit `TZID`: the value is read as wall-clock time in that zone; an
///   unknown zone is `UnparsableDate`, never silently the reference zone.
/// - Otherwise (floating): wall-clock time in `reference`.
///
/// Pure function; every failure comes back as a typed error.
pub fn resolve_date(field: Option<&RawDateTime>, reference: Tz) -> CalVaultResult<DateTime<Tz>> {
    let field = field.ok_or(CalVaultError::MissingDate)?;
    let value = field.value.trim();
    if value.is_empty() {
        return Err(CalVaultError::MissingDate);
    }

    let zone = match field.tzid.as_deref() {
        Some(tzid) => tzid
            .parse::<Tz>()
            .map_err(|_| CalVaultError::UnparsableDate(format!("unknown TZID '{tzid}'")))?,
        None => reference,
    };

    if field.is_date {
        let date = parse_naive_date(value)?;
        return wall_clock_in_zone(date.and_time(NaiveTime::MIN), zone);
    }

    if let Some(stripped) = value.strip_suffix('Z') {
        let naive = NaiveDateTime::parse_from_str(stripped, "%Y%m%dT%H%M%S")
            .map_err(|_| CalVaultError::UnparsableDate(value.to_string()))?;
        return Ok(naive.and_utc().with_timezone(&Tz::UTC));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%S") {
        return wall_clock_in_zone(naive, zone);
    }

    // Some feeds write all-day starts without declaring VALUE=DATE
    let date = parse_naive_date(value)?;
    wall_clock_in_zone(date.and_time(NaiveTime::MIN), zone)
}

fn parse_naive_date(value: &str) -> CalVaultResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .map_err(|_| CalVaultError::UnparsableDate(value.to_string()))
}

/// Attach a zone to a wall-clock time. Times that are ambiguous or skipped
/// by a DST transition have no single instant and are rejected.
fn wall_clock_in_zone(naive: NaiveDateTime, zone: Tz) -> CalVaultResult<DateTime<Tz>> {
    zone.from_local_datetime(&naive).single().ok_or_else(|| {
        CalVaultError::UnparsableDate(format!("{naive} is ambiguous or skipped in {zone}"))
    })
}
