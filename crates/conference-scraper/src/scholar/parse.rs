//! Extraction from Google Scholar result pages.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;
use crate::html::inner_text;
use crate::models::{AuthorPaperEntry, AuthorProfile, Publication};

static RESULT: LazyLock<Selector> = LazyLock::new(|| selector("div.gs_ri"));
static RESULT_TITLE: LazyLock<Selector> = LazyLock::new(|| selector("h3.gs_rt"));
static RESULT_TITLE_LINK: LazyLock<Selector> = LazyLock::new(|| selector("h3.gs_rt a"));
static RESULT_SNIPPET: LazyLock<Selector> = LazyLock::new(|| selector("div.gs_rs"));
static RESULT_LINKS: LazyLock<Selector> = LazyLock::new(|| selector("div.gs_fl a"));

static AUTHOR: LazyLock<Selector> = LazyLock::new(|| selector("div.gs_ai"));
static AUTHOR_LINK: LazyLock<Selector> = LazyLock::new(|| selector("h3.gs_ai_name a"));
static AUTHOR_AFFILIATION: LazyLock<Selector> = LazyLock::new(|| selector("div.gs_ai_aff"));

static PAPER_ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr.gsc_a_tr"));
static PAPER_TITLE: LazyLock<Selector> = LazyLock::new(|| selector("a.gsc_a_at"));
static PAPER_CITATIONS: LazyLock<Selector> = LazyLock::new(|| selector("a.gsc_a_ac"));

static CITED_BY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Cited by (\d+)").expect("valid cited-by pattern"));
static USER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]user=([\w-]+)").expect("valid user id pattern"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid static selector")
}

fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(inner_text).filter(|text| !text.is_empty())
}

/// Read the first result of a publication search page.
///
/// Returns `None` when the page has no results.
#[must_use]
pub fn parse_publication_search(html: &str) -> Option<Publication> {
    let document = Html::parse_document(html);
    let result = document.select(&RESULT).next()?;

    // Prefer the link text; the heading also carries "[PDF]" style tags.
    let title = first_text(result, &RESULT_TITLE_LINK)
        .or_else(|| first_text(result, &RESULT_TITLE))
        .unwrap_or_default();

    let num_citations = result.select(&RESULT_LINKS).find_map(|link| {
        CITED_BY.captures(&inner_text(link)).and_then(|caps| caps[1].parse().ok())
    });

    Some(Publication { title, num_citations, r#abstract: first_text(result, &RESULT_SNIPPET) })
}

/// Read the first profile of an author search page.
///
/// Returns `None` when the page lists no profiles.
///
/// # Errors
///
/// Returns error if the first profile has no link carrying a `user=` id.
pub fn parse_author_search(html: &str) -> Result<Option<AuthorProfile>, ParseError> {
    let document = Html::parse_document(html);
    let Some(card) = document.select(&AUTHOR).next() else {
        return Ok(None);
    };

    let link =
        card.select(&AUTHOR_LINK).next().ok_or_else(|| ParseError::missing("h3.gs_ai_name a"))?;
    let scholar_id = link
        .value()
        .attr("href")
        .and_then(|href| USER_ID.captures(href))
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| ParseError::missing("user= id in author link"))?;

    Ok(Some(AuthorProfile {
        name: inner_text(link),
        scholar_id,
        affiliation: first_text(card, &AUTHOR_AFFILIATION).unwrap_or_default(),
    }))
}

/// Read every row of an author's publication table.
///
/// # Errors
///
/// Returns error if a row has no title link.
pub fn parse_author_publications(html: &str) -> Result<Vec<AuthorPaperEntry>, ParseError> {
    let document = Html::parse_document(html);

    document
        .select(&PAPER_ROW)
        .map(|row| {
            let name = row
                .select(&PAPER_TITLE)
                .next()
                .map(inner_text)
                .ok_or_else(|| ParseError::missing("a.gsc_a_at"))?;
            let citations = row.select(&PAPER_CITATIONS).next().map(inner_text);
            Ok(AuthorPaperEntry { name, citations })
        })
        .collect()
}
