// src/config/mod.rs
pub mod ranking;

pub use ranking::{DiagnosticsSection, IngestSection, RankingConfig};
