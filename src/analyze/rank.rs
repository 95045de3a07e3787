// src/analyze/rank.rs
//! Ranking: classify + score every item of a batch, then order it for digest selection.
//!
//! Order:
//! - breaking items before non-breaking items, regardless of score,
//! - then `relevance_score` descending,
//! - equal keys keep their input order (`sort_by` is stable).
//!
//! `top_n`, `filter_by_minimum_score` and `filter_market_moving` never re-sort.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::info;

use super::classify::{classify_text, combined_text};
use super::scoring::score_text;
use crate::topic::TopicCategory;

/// Number of items the digest prompt takes from a ranked batch.
pub const DEFAULT_TOP_N: usize = 20;

/// Minimum score used by the digest's low-relevance filter.
pub const DEFAULT_MIN_SCORE: i32 = 3;

/// Entries printed by `log_ranking`.
pub const LOG_RANKING_LIMIT: usize = 20;

const DISPLAY_TITLE_CHARS: usize = 60;

/// One candidate for the digest: a user-submitted note or a fetched news/RSS item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ContentItem {
    pub fn new(source: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: content.into(),
            source: source.into(),
            url: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A `ContentItem` with its topic, score and breaking flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredContent {
    #[serde(flatten)]
    pub item: ContentItem,
    pub category: TopicCategory,
    pub relevance_score: i32,
    pub is_breaking: bool,
}

impl ScoredContent {
    /// Title if present, else the start of the content; capped at 60 chars.
    pub fn display_title(&self) -> String {
        let raw = match self.item.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => self.item.content.as_str(),
        };
        raw.chars().take(DISPLAY_TITLE_CHARS).collect()
    }
}

/// Classify and score a single item.
pub fn score_item(item: ContentItem) -> ScoredContent {
    let text = combined_text(item.title.as_deref(), &item.content);
    let category = classify_text(&text);
    let rs = score_text(item.title.as_deref(), &text, category);
    ScoredContent {
        item,
        category,
        relevance_score: rs.score,
        is_breaking: rs.is_breaking,
    }
}

fn ranking_order(a: &ScoredContent, b: &ScoredContent) -> Ordering {
    b.is_breaking
        .cmp(&a.is_breaking)
        .then_with(|| b.relevance_score.cmp(&a.relevance_score))
}

/// Score the whole batch and return it sorted (not truncated).
pub fn rank<I>(items: I) -> Vec<ScoredContent>
where
    I: IntoIterator<Item = ContentItem>,
{
    let mut scored: Vec<ScoredContent> = items.into_iter().map(score_item).collect();
    scored.sort_by(ranking_order);
    scored
}

/// First `min(n, len)` items of an already ranked list.
pub fn top_n(ranked: &[ScoredContent], n: usize) -> &[ScoredContent] {
    &ranked[..n.min(ranked.len())]
}

/// Drop items scoring below `min_score`, preserving order.
pub fn filter_by_minimum_score(ranked: Vec<ScoredContent>, min_score: i32) -> Vec<ScoredContent> {
    ranked
        .into_iter()
        .filter(|it| it.relevance_score >= min_score)
        .collect()
}

/// Keep MACRO_DATA, MARKETS, POLICY_MARKET and GEOPOLITICAL items, preserving order.
pub fn filter_market_moving(ranked: Vec<ScoredContent>) -> Vec<ScoredContent> {
    ranked
        .into_iter()
        .filter(|it| it.category.is_market_moving())
        .collect()
}

/// How a ranked batch is cut down to what the digest prompt receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub top_n: usize,
    pub min_score: Option<i32>,
    pub market_moving_only: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_score: None,
            market_moving_only: false,
        }
    }
}

impl Selection {
    /// Market-moving filter, then minimum score, then top N.
    pub fn apply(&self, ranked: Vec<ScoredContent>) -> Vec<ScoredContent> {
        let mut out = ranked;
        if self.market_moving_only {
            out = filter_market_moving(out);
        }
        if let Some(min) = self.min_score {
            out = filter_by_minimum_score(out, min);
        }
        out.truncate(self.top_n);
        out
    }
}

/// Rank a batch and apply `selection` to it.
pub fn select<I>(items: I, selection: &Selection) -> Vec<ScoredContent>
where
    I: IntoIterator<Item = ContentItem>,
{
    selection.apply(rank(items))
}

/// Debug aid: emit the top entries of a ranked list on the `ranking` target.
pub fn log_ranking(ranked: &[ScoredContent], label: &str) {
    info!(target: "ranking", label, total = ranked.len(), "content ranking");
    for (i, it) in top_n(ranked, LOG_RANKING_LIMIT).iter().enumerate() {
        let breaking = if it.is_breaking { " [BREAKING]" } else { "" };
        info!(
            target: "ranking",
            "  {}. [{}] {}{}: {}",
            i + 1,
            it.relevance_score,
            it.category,
            breaking,
            it.display_title()
        );
    }
}
