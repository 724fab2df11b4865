//! Fuzzing library for conference-scraper.
//!
//! This crate provides fuzzing targets for the HTML extractors. None of them
//! may panic on arbitrary input.
//!
//! # Usage
//!
//! ```bash
//! cd crates/scrape-fuzz
//! cargo +nightly fuzz run fuzz_listing_parse -- -max_total_time=60
//! ```

pub use conference_scraper::{scholar, scrape};
