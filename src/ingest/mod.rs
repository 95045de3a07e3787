// src/ingest/mod.rs
//! Candidate pool assembly: feed-item cleanup and merging with user-submitted items.
//!
//! Fetched news/RSS bodies arrive as HTML of arbitrary length. Before ranking they are
//! stripped to plain text and cut down to a short excerpt. User items are passed through
//! untouched (they are validated upstream, see `validate`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analyze::ContentItem;

/// Default excerpt length for fetched feed items, in chars.
pub const DEFAULT_NEWS_MAX_CHARS: usize = 500;

const ELLIPSIS: &str = "...";

static RE_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag regex"));
static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Remove tags, decode entities, collapse whitespace runs (incl. `&nbsp;`), trim.
pub fn strip_html(html: &str) -> String {
    let no_tags = RE_TAGS.replace_all(html, "");
    let decoded = html_escape::decode_html_entities(&no_tags);
    RE_WS.replace_all(&decoded, " ").trim().to_string()
}

/// Strip HTML, then keep at most `max_chars` chars, appending `...` when cut.
pub fn truncate_content(content: &str, max_chars: usize) -> String {
    let stripped = strip_html(content);
    if stripped.chars().count() <= max_chars {
        return stripped;
    }
    let mut out: String = stripped.chars().take(max_chars).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Clean one fetched item: plain-text title, excerpted body.
pub fn normalize_news_item(mut item: ContentItem, max_chars: usize) -> ContentItem {
    item.title = item
        .title
        .map(|t| strip_html(&t))
        .filter(|t| !t.is_empty());
    item.content = truncate_content(&item.content, max_chars);
    item
}

/// Clean a batch of fetched items, dropping those left without any text.
pub fn normalize_news_items(items: Vec<ContentItem>, max_chars: usize) -> Vec<ContentItem> {
    items
        .into_iter()
        .map(|it| normalize_news_item(it, max_chars))
        .filter(|it| !it.content.is_empty() || it.title.is_some())
        .collect()
}

/// User items first, then news items; this is the input order the ranker sees.
pub fn merge_candidates(user: Vec<ContentItem>, news: Vec<ContentItem>) -> Vec<ContentItem> {
    let mut pool = user;
    pool.reserve(news.len());
    pool.extend(news);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_html_removes_tags_and_decodes() {
        let s = "  <p>Fed&nbsp;holds <b>rates</b> &amp; signals &quot;patience&quot; &#39;24</p> ";
        assert_eq!(strip_html(s), r#"Fed holds rates & signals "patience" '24"#);
    }

    #[test]
    fn strip_html_collapses_block_whitespace() {
        let s = "<p>Fed holds</p>\n\n   <p>rates</p>\t<br/>  steady";
        assert_eq!(strip_html(s), "Fed holds rates steady");
    }

    #[test]
    fn collapsed_whitespace_does_not_eat_excerpt_budget() {
        let s = "<div>\n    <p>abc</p>\n    <p>def</p>\n</div>";
        assert_eq!(truncate_content(s, 7), "abc def");
    }

    #[test]
    fn encoded_tags_survive_as_text() {
        assert_eq!(strip_html("a &lt;b&gt; c"), "a <b> c");
    }

    #[test]
    fn truncate_appends_ellipsis_only_when_cut() {
        assert_eq!(truncate_content("short", 10), "short");
        assert_eq!(truncate_content("abcdef", 3), "abc...");
        assert_eq!(truncate_content("<i>abc</i>", 3), "abc");
    }

    #[test]
    fn truncate_is_char_based() {
        let s = "žluťoučký kůň";
        let out = truncate_content(s, 4);
        assert_eq!(out, "žluť...");
    }

    #[test]
    fn normalize_drops_empty_items_and_blank_titles() {
        let items = vec![
            ContentItem::new("Feed", "<div></div>").with_title("<b></b>"),
            ContentItem::new("Feed", "<p>Oil rallies</p>").with_title("<b></b>"),
        ];
        let out = normalize_news_items(items, DEFAULT_NEWS_MAX_CHARS);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].content, "Oil rallies");
        assert_eq!(out[0].title, None);
    }

    #[test]
    fn merge_keeps_user_items_first() {
        let user = vec![ContentItem::new("me", "note")];
        let news = vec![ContentItem::new("Reuters", "wire"), ContentItem::new("FT", "story")];
        let pool = merge_candidates(user, news);
        let srcs: Vec<_> = pool.iter().map(|i| i.source.as_str()).collect();
        assert_eq!(srcs, ["me", "Reuters", "FT"]);
    }
}
