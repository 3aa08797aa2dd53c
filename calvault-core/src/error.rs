//! Error types for the calvault engine.

use thiserror::Error;

/// Errors that can occur while turning raw feed events into occurrences.
///
/// The first three variants are per-event: the ingest loop recovers from
/// them by dropping the event. `FeedParse` is per-feed and propagates to the
/// caller, which aborts the run.
#[derive(Error, Debug)]
pub enum CalVaultError {
    #[error("Event has no start date")]
    MissingDate,

    #[error("Unparsable date: {0}")]
    UnparsableDate(String),

    #[error("Invalid recurrence rule: {0}")]
    InvalidRule(String),

    #[error("Feed parse error: {0}")]
    FeedParse(String),
}

/// Result type alias for calvault engine operations.
pub type CalVaultResult<T> = Result<T, CalVaultError>;
