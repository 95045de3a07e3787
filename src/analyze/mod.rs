// src/analyze/mod.rs
//! Analysis pipeline entry: classifier, scorer and ranker.

pub mod classify;
pub mod rank;
pub mod scoring;

// Re-export convenient types.
pub use crate::analyze::classify::classify;
pub use crate::analyze::rank::{
    filter_by_minimum_score, filter_market_moving, log_ranking, rank, score_item, select, top_n,
    ContentItem, ScoredContent, Selection, DEFAULT_MIN_SCORE, DEFAULT_TOP_N,
};
pub use crate::analyze::scoring::{score, RelevanceScore};
