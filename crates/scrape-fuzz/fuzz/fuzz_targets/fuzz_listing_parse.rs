#![no_main]

use conference_scraper::scrape::{parse_listing, parse_schedule};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Listing and schedule pages share nothing but must both reject bad markup
    // with an error, never a panic.
    if let Ok(html) = std::str::from_utf8(data) {
        let _ = parse_listing(html);
        let _ = parse_schedule(html);
    }
});
