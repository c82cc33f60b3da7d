//! Content page parser for RRYS series pages.
//!
//! Optional fields are addressed by fixed structural position and degrade to
//! an empty string when the page layout does not match. The display title is
//! the only mandatory field: it is what proves the page describes a series.

use scraper::{ElementRef, Html, Selector};

use crate::error::{RrysError, Result};

const TITLE_BLOCK: &str = ".resource-tit h2";
const FEED_LINK: &str = ".resource-tit h2 a";
const FOREIGN_NAME: &str = ".resource-con .fl-info li:nth-child(1) > strong";
const REGION: &str = ".resource-con .fl-info li:nth-child(2) > strong";
const GENRE: &str = ".resource-con .fl-info li:nth-child(6) > strong";
const POSTER_LINK: &str = ".resource-con > div.fl-img > div.imglink > a";

/// Fields extracted from a series content page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageFields {
    pub local_name: String,
    pub foreign_name: String,
    pub feed_url: String,
    pub region: String,
    pub genre: String,
    pub poster_url: String,
}

/// Parse the fields of a series content page.
///
/// # Returns
/// * `Ok(PageFields)` when the bracketed display title is present
/// * `Err(RrysError::FieldNotFound)` when the title block is missing, empty or
///   has no `《...》` pair
pub fn parse_series_page(document: &Html) -> Result<PageFields> {
    let title_block = select_first(document, TITLE_BLOCK)
        .map(|el| el.inner_html())
        .unwrap_or_default();
    if title_block.trim().is_empty() {
        return Err(RrysError::FieldNotFound("series title block".to_string()));
    }

    let local_name = extract_bracketed_title(&title_block)
        .ok_or_else(|| RrysError::FieldNotFound("series title".to_string()))?;

    let mut foreign_name = select_text(document, FOREIGN_NAME);
    if foreign_name.is_empty() {
        let title_text = select_text(document, TITLE_BLOCK);
        foreign_name = extract_parenthesized_name(&title_text).unwrap_or_default();
    }

    Ok(PageFields {
        local_name,
        foreign_name,
        feed_url: select_attr(document, FEED_LINK, "href"),
        region: select_text(document, REGION),
        genre: select_text(document, GENRE),
        poster_url: select_attr(document, POSTER_LINK, "href"),
    })
}

/// Extract the text strictly between the first `《` and the first `》` after it.
///
/// # Examples
/// ```
/// use rrys_core::parser::extract_bracketed_title;
///
/// assert_eq!(
///     extract_bracketed_title("《权力的游戏》(Game of Thrones)"),
///     Some("权力的游戏".to_string())
/// );
/// assert_eq!(extract_bracketed_title("no brackets"), None);
/// ```
pub fn extract_bracketed_title(block: &str) -> Option<String> {
    let open = block.find('《')? + '《'.len_utf8();
    let close = block[open..].find('》')?;
    Some(block[open..open + close].to_string())
}

/// Name in parentheses directly after the closing `》`, e.g. `(Game of Thrones)`.
fn extract_parenthesized_name(title_text: &str) -> Option<String> {
    let after = title_text.split_once('》')?.1.trim_start();
    let (open, close) = match after.chars().next()? {
        '(' => ('(', ')'),
        '（' => ('（', '）'),
        _ => return None,
    };
    let inner = after.strip_prefix(open)?;
    let name = inner.split_once(close)?.0.trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

/// Trimmed text of the first element matching `selector`, or an empty string.
pub fn select_text(document: &Html, selector: &str) -> String {
    select_first(document, selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Attribute value of the first element matching `selector`, or an empty string.
pub fn select_attr(document: &Html, selector: &str, attr: &str) -> String {
    select_first(document, selector)
        .and_then(|el| el.value().attr(attr))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
