//! Core engine for calvault.
//!
//! This crate holds everything with algorithmic content and no I/O:
//! - `event`: raw feed-event views and the simplified output types
//! - `resolve`: raw ICS date fields to zone-aware instants
//! - `recurrence`: RRULE expansion bounded to a window
//! - `filter` / `ingest`: per-event windowing and feed-level accumulation
//!
//! Fetching feeds, serializing, encrypting and writing the artifact live in
//! the CLI crate.

pub mod error;
pub mod event;
pub mod filter;
pub mod ics;
pub mod ingest;
pub mod recurrence;
pub mod resolve;
pub mod window;

// Re-export the main types at crate root for convenience
pub use error::{CalVaultError, CalVaultResult};
pub use event::{RawDateTime, RawEvent, SimplifiedCalendar, SimplifiedEvent};
pub use ingest::FeedSummary;
pub use window::Window;
