// src/lib.rs
//! Relevance ranking for a macro research digest.
//!
//! Items (user notes + fetched news) are classified into a `TopicCategory`, scored,
//! and ordered so the digest prompt gets the ~20 items most likely to matter:
//!
//! ```
//! use macro_digest_ranker::{rank, top_n, ContentItem, TopicCategory};
//!
//! let ranked = rank(vec![
//!     ContentItem::new("A", "The Fed cut rates by 25bp, core CPI came in hot"),
//!     ContentItem::new("B", "Celebrity wins election campaign, huge applause"),
//! ]);
//! assert_eq!(ranked[0].category, TopicCategory::MacroData);
//! assert_eq!(top_n(&ranked, 1).len(), 1);
//! ```

pub mod analyze;
pub mod api;
pub mod config;
pub mod ingest;
pub mod metrics;
pub mod topic;
pub mod validate;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{
    classify, filter_by_minimum_score, filter_market_moving, log_ranking, rank, score,
    score_item, select, top_n, ContentItem, RelevanceScore, ScoredContent, Selection,
};
pub use crate::api::router;
pub use crate::topic::TopicCategory;
