//! Scraping stages.
//!
//! Each pipeline is a chain of these stages:
//! - Listing (A/B): [`listing_url`] → fetch → [`parse_listing`] → [`enrich_all`]
//! - Schedule (C): [`schedule_url`] → fetch → [`parse_schedule`] → [`correlate_all`]

mod correlate;
mod enrich;
mod listing;
mod schedule;
mod urls;

pub use correlate::{Resolution, correlate_all, correlate_record};
pub use enrich::{EnrichReport, enrich_all, enrich_record};
pub use listing::{clean_title, parse_listing};
pub use schedule::parse_schedule;
pub use urls::{listing_url, schedule_url};
