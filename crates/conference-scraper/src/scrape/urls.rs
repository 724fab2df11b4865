//! Page URLs for a conference and year.

use crate::error::ScrapeError;

/// DBLP listing page for a conference year.
///
/// DBLP files NeurIPS under `nips`; its page ids switched from `nips{year}`
/// to `neurips{year}` in 2020.
#[must_use]
pub fn listing_url(base_url: &str, conference: &str, year: i32) -> String {
    let conference = conference.to_lowercase();
    let (segment, page_id) = if conference == "neurips" || conference == "nips" {
        let prefix = if year > 2019 { "neurips" } else { "nips" };
        ("nips".to_string(), format!("{prefix}{year}"))
    } else {
        let page_id = format!("{conference}{year}");
        (conference, page_id)
    };

    format!("{}/db/conf/{segment}/{page_id}.html", base_url.trim_end_matches('/'))
}

/// Conference schedule page (poster listing) for a year.
///
/// With `base_url` set, the page is looked up there instead of on the
/// conference's own site.
pub fn schedule_url(
    base_url: Option<&str>,
    conference: &str,
    year: i32,
) -> Result<String, ScrapeError> {
    let base = match base_url {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => format!("https://{}", schedule_host(conference)?),
    };

    Ok(format!("{base}/Conferences/{year}/Schedule"))
}

fn schedule_host(conference: &str) -> Result<&'static str, ScrapeError> {
    match conference.to_lowercase().as_str() {
        "neurips" | "nips" => Ok("nips.cc"),
        "icml" => Ok("icml.cc"),
        _ => Err(ScrapeError::UnsupportedConference(conference.to_string())),
    }
}
