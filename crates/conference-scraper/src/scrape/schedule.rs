//! Conference schedule page parser.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::error::ParseError;
use crate::html::inner_text;
use crate::models::ScheduleRecord;

static POSTER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.maincard.narrower.Poster").expect("valid selector"));
static CARD_BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.maincardBody").expect("valid selector"));
static CARD_FOOTER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.maincardFooter").expect("valid selector"));

/// Separator between author names in a card footer.
const AUTHOR_SEPARATOR: &str = " · ";

/// Parse every poster card into a record with no citation data.
///
/// # Errors
///
/// Returns error if a poster card lacks its body or footer.
pub fn parse_schedule(html: &str) -> Result<Vec<ScheduleRecord>, ParseError> {
    let document = Html::parse_document(html);

    document
        .select(&POSTER)
        .map(|card| {
            let name = card
                .select(&CARD_BODY)
                .next()
                .map(inner_text)
                .ok_or_else(|| ParseError::missing("div.maincardBody"))?;
            let footer = card
                .select(&CARD_FOOTER)
                .next()
                .map(inner_text)
                .ok_or_else(|| ParseError::missing("div.maincardFooter"))?;

            let authors = footer.split(AUTHOR_SEPARATOR).map(|a| a.trim().to_string()).collect();
            Ok(ScheduleRecord::new(name, authors))
        })
        .collect()
}
