//! The run window and its two containment policies.

use chrono::{DateTime, Duration, Utc};

/// Absolute time interval a run selects events from, nominally
/// `[now, now + 7 days)`. Every engine function takes it as a parameter, so
/// tests (and future callers) can use any bounds.
///
/// Two containment policies exist side by side and both are externally
/// observable: single events are kept only when strictly inside the window,
/// while recurrence occurrences are kept on the edges too. The asymmetry is
/// inherited behavior, kept deliberately rather than unified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Window {
    /// Window covering `days` days forward from `start`.
    pub fn next_days(start: DateTime<Utc>, days: i64) -> Self {
        Window {
            start,
            end: start + Duration::days(days),
        }
    }

    /// Exclusive on both edges; applied to non-recurring events.
    pub fn contains_strict(&self, t: DateTime<Utc>) -> bool {
        self.start < t && t < self.end
    }

    /// Inclusive on both edges; applied to recurrence occurrences.
    pub fn contains_inclusive(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t <= self.end
    }
}
