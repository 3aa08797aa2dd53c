//! RRULE expansion bounded to a window.
//!
//! The rule only contributes frequency and pattern; its anchor is always the
//! event's resolved start, which is synthesized into the DTSTART line handed
//! to the rrule parser.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use rrule::RRuleSet;

use crate::error::{CalVaultError, CalVaultResult};
use crate::window::Window;

/// Instance cap per rule, so a dense rule cannot blow up a run. The window
/// is seven days in practice, which stays far below this.
const MAX_OCCURRENCES: u16 = 365;

/// Build an iCalendar DTSTART line for the rrule crate parser, carrying the
/// zone the start was resolved in.
fn build_dtstart(start: &DateTime<Tz>) -> String {
    match start.timezone() {
        Tz::UTC => format!("DTSTART:{}", start.format("%Y%m%dT%H%M%SZ")),
        tz => format!("DTSTART;TZID={}:{}", tz.name(), start.format("%Y%m%dT%H%M%S")),
    }
}

/// Expand `rule` anchored at `start` into every occurrence whose start lies
/// inside the window, both edges inclusive, in ascending order.
///
/// A pattern entirely outside the window yields an empty Vec. A rule that
/// fails to parse is `InvalidRule`; the caller drops the whole event rather
/// than falling back to a single occurrence.
pub fn expand_rule(
    rule: &str,
    start: DateTime<Tz>,
    window: &Window,
) -> CalVaultResult<Vec<DateTime<Utc>>> {
    let source = format!("{}\nRRULE:{}", build_dtstart(&start), rule);

    let rrule_set: RRuleSet = source
        .parse()
        .map_err(|e| CalVaultError::InvalidRule(format!("{rule}: {e}")))?;

    // after/before are exclusive; pad by a second to keep both window edges
    let after = (window.start - Duration::seconds(1)).with_timezone(&rrule::Tz::UTC);
    let before = (window.end + Duration::seconds(1)).with_timezone(&rrule::Tz::UTC);

    let result = rrule_set.after(after).before(before).all(MAX_OCCURRENCES);

    Ok(result
        .dates
        .iter()
        .map(|occ| occ.with_timezone(&Utc))
        .filter(|occ| window.contains_inclusive(*occ))
        .collect())
}
