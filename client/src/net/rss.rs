//! RSS 2.0 parsing into blog card models.
//!
//! Only `item > title, link, description, pubDate` are read. Descriptions
//! usually carry escaped HTML; markup is stripped and entities decoded so the
//! card renders plain text.

#[cfg(test)]
#[path = "rss_test.rs"]
mod rss_test;

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use roxmltree::{Document, Node, ParsingOptions};

use super::feed::FeedError;
use crate::config::FeedConfig;

pub const UNTITLED_POST: &str = "Untitled Post";
pub const FALLBACK_LINK: &str = "#";
pub const RECENT_DATE: &str = "Recent";
pub const ELLIPSIS: &str = "...";

/// A tag opens only on `<` followed by a letter, `/` or `!`, as in the HTML
/// tokenizer; a bare `a < b` stays text.
static TAG_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[A-Za-z/!][^>]*>").ok());

/// One rendered blog card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    /// Plain text, cut to the configured length and suffixed with `...`.
    pub description: String,
    /// `Jan 2, 2006` style, or `Recent` when the date is missing or invalid.
    pub published: String,
    pub read_minutes: usize,
}

/// Parse a feed body into at most `config.max_posts` items in document order.
///
/// # Errors
///
/// Returns [`FeedError::Parse`] if the body is not well-formed XML. A
/// well-formed document without items is `Ok` with an empty list.
pub fn parse_feed(xml: &str, config: &FeedConfig) -> Result<Vec<FeedItem>, FeedError> {
    let options = ParsingOptions { allow_dtd: true, ..ParsingOptions::default() };
    let doc = Document::parse_with_options(xml, options).map_err(|e| FeedError::Parse(e.to_string()))?;
    Ok(doc
        .descendants()
        .filter(|n| n.is_element() && n.has_tag_name("item"))
        .take(config.max_posts)
        .map(|item| build_item(item, config))
        .collect())
}

fn build_item(item: Node<'_, '_>, config: &FeedConfig) -> FeedItem {
    let title = field_text(item, "title")
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED_POST.to_owned());
    let link = field_text(item, "link")
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| FALLBACK_LINK.to_owned());
    let text = clean_text(&field_text(item, "description").unwrap_or_default());
    let description = truncate_description(&text, config.description_limit);
    // Read time counts the card's text, not the full body.
    let read_minutes = estimate_read_minutes(&description, config.words_per_minute);

    FeedItem {
        title,
        link,
        description,
        published: format_date(field_text(item, "pubDate").as_deref()),
        read_minutes,
    }
}

/// Text content of the first descendant element named `name`.
fn field_text(item: Node<'_, '_>, name: &str) -> Option<String> {
    item.descendants()
        .skip(1)
        .find(|n| n.is_element() && n.has_tag_name(name))
        .map(|field| field.descendants().filter(Node::is_text).filter_map(|t| t.text()).collect())
}

/// Strip HTML tags, decode entities, and trim.
pub fn clean_text(html: &str) -> String {
    let stripped = match TAG_PATTERN.as_ref() {
        Some(re) => re.replace_all(html, ""),
        None => html.into(),
    };
    html_escape::decode_html_entities(&stripped).trim().to_owned()
}

/// Hard cut at `limit` characters, ignoring word boundaries, then `...`.
pub fn truncate_description(text: &str, limit: usize) -> String {
    let mut out: String = text.chars().take(limit).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Format an RFC 2822, RFC 3339, or bare `YYYY-MM-DD` date as `Jan 2, 2006`.
pub fn format_date(raw: Option<&str>) -> String {
    const DISPLAY: &str = "%b %-d, %Y";

    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return RECENT_DATE.to_owned();
    };
    if let Ok(date) = DateTime::parse_from_rfc2822(raw).or_else(|_| DateTime::parse_from_rfc3339(raw)) {
        return date.format(DISPLAY).to_string();
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_or_else(|_| RECENT_DATE.to_owned(), |date| date.format(DISPLAY).to_string())
}

/// Minutes to read `text` at `words_per_minute`, rounded, never below one.
pub fn estimate_read_minutes(text: &str, words_per_minute: usize) -> usize {
    let wpm = words_per_minute.max(1);
    let words = text.split_whitespace().count();
    ((words + wpm / 2) / wpm).max(1)
}
