// src/analyze/classify.rs
//! Topic classification by keyword-hit counting.
//!
//! Each keyword contributes at most one hit to its category (presence, not frequency).
//! Categories are scanned in `TopicCategory::CANONICAL_ORDER`; the running best is only
//! replaced on a strictly greater tally, so ties go to the earlier category.

use crate::topic::TopicCategory;

/// Lower-cased `"{title} {content}"`, the text both classifier and scorer look at.
pub(crate) fn combined_text(title: Option<&str>, content: &str) -> String {
    let title = title.unwrap_or_default();
    let mut out = String::with_capacity(title.len() + content.len() + 1);
    out.push_str(title);
    out.push(' ');
    out.push_str(content);
    out.to_lowercase()
}

/// Number of `keywords` that occur anywhere in `text`.
pub(crate) fn count_hits(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text.contains(*kw)).count()
}

/// Map one item to exactly one topic. Returns `Other` when nothing matches.
pub fn classify(title: Option<&str>, content: &str) -> TopicCategory {
    let text = combined_text(title, content);
    classify_text(&text)
}

/// Same as `classify`, on already lower-cased text.
pub(crate) fn classify_text(text: &str) -> TopicCategory {
    let mut best = TopicCategory::Other;
    let mut best_hits = 0usize;

    for cat in TopicCategory::CANONICAL_ORDER {
        let hits = count_hits(text, cat.keywords());
        if hits > best_hits {
            best_hits = hits;
            best = cat;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_other() {
        assert_eq!(classify(None, ""), TopicCategory::Other);
        assert_eq!(classify(Some(""), "   \n\t "), TopicCategory::Other);
    }

    #[test]
    fn combined_text_joins_with_space_and_lowercases() {
        assert_eq!(combined_text(Some("Fed"), "CPI"), "fed cpi");
        assert_eq!(combined_text(None, "CPI"), " cpi");
    }

    #[test]
    fn keyword_counts_once_regardless_of_repetition() {
        // "tariff" x3 (+ "tariffs" once) vs two distinct geopolitical terms.
        let text = "tariffs tariff tariff. nato and putin";
        assert_eq!(count_hits(text, TopicCategory::PolicyMarket.keywords()), 2);
        assert_eq!(count_hits(text, TopicCategory::Geopolitical.keywords()), 2);
        // Tie: POLICY_MARKET comes before GEOPOLITICAL.
        assert_eq!(classify_text(text), TopicCategory::PolicyMarket);
    }

    #[test]
    fn strictly_greater_tally_wins() {
        // One macro hit vs two political hits.
        let cat = classify(Some("Powell"), "ballot and impeach");
        assert_eq!(cat, TopicCategory::Political);
    }

    #[test]
    fn tie_goes_to_earlier_category() {
        // MACRO_DATA: cpi; MARKETS: nasdaq -> tie at 1, MACRO_DATA first.
        assert_eq!(classify(None, "cpi nasdaq"), TopicCategory::MacroData);
        // CORPORATE: dividend; POLITICAL: ballot -> tie at 1, CORPORATE first.
        assert_eq!(classify(None, "dividend ballot"), TopicCategory::Corporate);
        // POLITICAL: ballot; POLICY_OTHER: pension -> POLITICAL first.
        assert_eq!(classify(None, "pension ballot"), TopicCategory::Political);
    }

    #[test]
    fn case_insensitive_substring_match() {
        assert_eq!(classify(Some("NASDAQ"), ""), TopicCategory::Markets);
        // "taper" matches inside "tapering".
        assert_eq!(classify(None, "Tapering talk"), TopicCategory::MacroData);
    }

    #[test]
    fn unicode_text_does_not_panic() {
        let cat = classify(Some("Zprávy 🚀"), "ÄÖÜ ß — 日本銀行 ✓");
        assert_eq!(cat, TopicCategory::Other);
    }
}
