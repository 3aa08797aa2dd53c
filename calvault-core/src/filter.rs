//! Per-event windowing: resolve, expand, simplify.

use chrono::Duration;
use chrono_tz::Tz;

use crate::event::{RawEvent, SimplifiedEvent};
use crate::recurrence::expand_rule;
use crate::resolve::resolve_date;
use crate::window::Window;

/// Reduce one raw event to the simplified occurrences that fall inside the
/// window.
///
/// Feeds routinely contain partially specified entries (template and
/// placeholder events), so nothing here is fatal: an unresolvable start, or
/// a recurrence rule that fails to parse, drops the whole event and returns
/// an empty Vec. There is no single-occurrence fallback for a broken rule.
///
/// Boundary policies differ on purpose: recurrence occurrences are kept on
/// the window edges, single events only strictly inside (see [`Window`]).
pub fn select_occurrences(
    raw: &RawEvent,
    window: &Window,
    reference: Tz,
) -> Vec<SimplifiedEvent> {
    let Ok(start) = resolve_date(raw.start.as_ref(), reference) else {
        return Vec::new();
    };

    // End that is absent or unresolvable means a zero-length occurrence.
    // A resolved end before the start gives a negative duration, passed
    // through untouched to keep whatever the feed author wrote visible.
    let duration = match resolve_date(raw.end.as_ref(), reference) {
        Ok(end) => end.with_timezone(&chrono::Utc) - start.with_timezone(&chrono::Utc),
        Err(_) => Duration::zero(),
    };

    let title = raw.summary.clone().unwrap_or_default();

    if let Some(rule) = &raw.rrule {
        let Ok(occurrences) = expand_rule(rule, start, window) else {
            return Vec::new();
        };
        return occurrences
            .into_iter()
            .map(|occ| SimplifiedEvent {
                title: title.clone(),
                start: occ,
                end: occ + duration,
            })
            .collect();
    }

    let start = start.with_timezone(&chrono::Utc);
    if window.contains_strict(start) {
        vec![SimplifiedEvent {
            title,
            start,
            end: start + duration,
        }]
    } else {
        Vec::new()
    }
}
