//! Data models for scraped records and search results.
//!
//! Records serialize with `serde` so the output writers can dump them
//! directly as CSV rows or JSON tables.

mod job;
mod paper;
mod scholar;

pub use job::{ConferenceYearJob, jobs_for};
pub use paper::{PaperRecord, ScheduleRecord, normalize_title};
pub use scholar::{AuthorPaperEntry, AuthorProfile, Lookup, Publication};
