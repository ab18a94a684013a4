//! Fetches a user's rendered stats card and extracts the language rows.
//!
//! The card is an SVG document; each tracked language sits in a positioned
//! group as `<text data-testid="lang-name">Rust - 11 hrs 20 mins</text>`.
//! A card with no such rows is a valid, empty observation.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::config::STATS_BASE_URL;
use crate::error::{Error, Result};
use crate::models::LanguageRecord;

static LANG_ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"g[transform] text[data-testid="lang-name"]"#).unwrap());

/// Row delimiter between the language name and its time.
const ROW_SEPARATOR: &str = " - ";

pub async fn fetch_language_stats(username: &str) -> Result<Vec<LanguageRecord>> {
    let url = format!("{}?username={}&layout=compact", *STATS_BASE_URL, username);

    let markup = reqwest::get(&url)
        .await?
        .error_for_status()?
        .text()
        .await?;

    parse_language_stats(&markup)
}

/// Pull every `(language, time)` pair out of the card markup.
pub fn parse_language_stats(markup: &str) -> Result<Vec<LanguageRecord>> {
    let document = Html::parse_document(markup);
    let mut records = Vec::new();

    for row in document.select(&LANG_ROW_SELECTOR) {
        let text = row.text().collect::<String>();
        let text = text.trim();

        let Some((language, time)) = text.split_once(ROW_SEPARATOR) else {
            return Err(Error::Scrape(format!("language row without separator: {text:?}")));
        };

        records.push(LanguageRecord {
            language: language.trim().to_string(),
            time: time.trim().parse()?,
        });
    }

    Ok(records)
}
