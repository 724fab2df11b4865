//! DBLP listing page parser.
//!
//! Every paper on a listing page is a `cite` block. Inside it, authors and the
//! title are all `itemprop="name"` elements: author names first, then the
//! title span, which alone carries `class="title"`. The first `cite` on the
//! page is the proceedings volume and is skipped.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;
use crate::html::{Node, inner_text};
use crate::models::PaperRecord;

static BODY: LazyLock<Selector> = LazyLock::new(|| selector("body"));
static CITE: LazyLock<Selector> = LazyLock::new(|| selector("cite"));
static NAME: LazyLock<Selector> = LazyLock::new(|| selector(r#"[itemprop="name"]"#));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid static selector")
}

/// Parse a listing page into paper records, in page order.
///
/// # Errors
///
/// Returns error if a citation block does not hold exactly one title element.
pub fn parse_listing(html: &str) -> Result<Vec<PaperRecord>, ParseError> {
    let document = Html::parse_document(html);
    let body = document.select(&BODY).next().ok_or_else(|| ParseError::missing("body"))?;

    body.select(&CITE)
        .enumerate()
        .skip(1)
        .map(|(index, cite)| parse_cite(index, cite))
        .collect()
}

fn parse_cite(index: usize, cite: ElementRef<'_>) -> Result<PaperRecord, ParseError> {
    let names: Vec<ElementRef<'_>> = cite.select(&NAME).collect();

    let titles: Vec<usize> =
        names.iter().enumerate().filter(|(_, name)| is_title(name)).map(|(i, _)| i).collect();
    let &[title_at] = titles.as_slice() else {
        return Err(ParseError::TitleCount { index, found: titles.len() });
    };

    let title = clean_title(&Node::from(names[title_at]).leaf_text());
    // Names after the title belong to the venue series, not the paper.
    let authors = names[..title_at].iter().map(|name| inner_text(*name)).collect();

    Ok(PaperRecord::new(title, authors))
}

fn is_title(element: &ElementRef<'_>) -> bool {
    element.value().classes().any(|class| class == "title")
}

/// Strip the trailing period DBLP appends to every title, along with any
/// whitespace around it.
#[must_use]
pub fn clean_title(raw: &str) -> String {
    raw.trim_start().trim_end_matches(|c: char| c == '.' || c.is_whitespace()).to_string()
}
