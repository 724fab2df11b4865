#![no_main]

use conference_scraper::scholar::{
    parse_author_publications, parse_author_search, parse_publication_search,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(html) = std::str::from_utf8(data) {
        let _ = parse_publication_search(html);
        let _ = parse_author_search(html);
        if let Ok(rows) = parse_author_publications(html) {
            for row in rows {
                let _ = row.citation_count();
            }
        }
    }
});
