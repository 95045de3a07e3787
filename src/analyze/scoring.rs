//! Relevance scoring.
//!
//! score = category weight
//!       + 5 if any breaking keyword appears in title+content (first hit only)
//!       + 1 per MACRO_DATA/MARKETS keyword found in the title
//!
//! No clamping and no penalties; the result is a pure function of its inputs.

use serde::Serialize;

use super::classify::combined_text;
use crate::topic::{title_boost_keywords, TopicCategory, BREAKING_KEYWORDS};

/// Flat bonus for urgency wording.
pub const BREAKING_BONUS: i32 = 5;

/// Per-keyword bonus for market terms in the title.
pub const TITLE_KEYWORD_BONUS: i32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelevanceScore {
    pub score: i32,
    pub is_breaking: bool,
}

/// Score one item for the given category.
pub fn score(title: Option<&str>, content: &str, category: TopicCategory) -> RelevanceScore {
    let text = combined_text(title, content);
    score_text(title, &text, category)
}

/// Scoring on the already lower-cased combined text; the title is lower-cased here.
pub(crate) fn score_text(title: Option<&str>, text: &str, category: TopicCategory) -> RelevanceScore {
    let mut score = category.weight();

    let is_breaking = is_breaking_text(text);
    if is_breaking {
        score += BREAKING_BONUS;
    }

    let title_lower = title.unwrap_or_default().to_lowercase();
    score += title_keyword_hits(&title_lower) as i32 * TITLE_KEYWORD_BONUS;

    RelevanceScore { score, is_breaking }
}

/// True on the first breaking keyword found; later keywords are not scanned.
fn is_breaking_text(text: &str) -> bool {
    BREAKING_KEYWORDS.iter().any(|kw| text.contains(kw))
}

fn title_keyword_hits(title_lower: &str) -> usize {
    if title_lower.is_empty() {
        return 0;
    }
    title_boost_keywords()
        .filter(|kw| title_lower.contains(kw))
        .count()
}
