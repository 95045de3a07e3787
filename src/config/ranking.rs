// src/config/ranking.rs
//! Ranking service configuration (TOML + env overrides).
//!
//! Resolution:
//! 1) `$RANKING_CONFIG_PATH` (must exist if set)
//! 2) `config/ranking.toml` (optional; built-in defaults if missing)
//! 3) env overrides: RANKING_TOP_N, RANKING_MIN_SCORE, RANKING_MARKET_MOVING_ONLY,
//!    RANKING_NEWS_MAX_CHARS
//!
//! ```toml
//! [selection]
//! top_n = 20
//! min_score = 3
//! market_moving_only = false
//!
//! [ingest]
//! news_max_chars = 500
//!
//! [diagnostics]
//! log_ranking = true
//! ```

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analyze::Selection;
use crate::ingest::DEFAULT_NEWS_MAX_CHARS;

pub const DEFAULT_RANKING_CONFIG_PATH: &str = "config/ranking.toml";

pub const ENV_RANKING_CONFIG_PATH: &str = "RANKING_CONFIG_PATH";
pub const ENV_TOP_N: &str = "RANKING_TOP_N";
pub const ENV_MIN_SCORE: &str = "RANKING_MIN_SCORE";
pub const ENV_MARKET_MOVING_ONLY: &str = "RANKING_MARKET_MOVING_ONLY";
pub const ENV_NEWS_MAX_CHARS: &str = "RANKING_NEWS_MAX_CHARS";

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub selection: Selection,
    pub ingest: IngestSection,
    pub diagnostics: DiagnosticsSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IngestSection {
    pub news_max_chars: usize,
}

impl Default for IngestSection {
    fn default() -> Self {
        Self {
            news_max_chars: DEFAULT_NEWS_MAX_CHARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct DiagnosticsSection {
    /// Emit `log_ranking` output for every /rank request.
    pub log_ranking: bool,
}

impl RankingConfig {
    /// Load from env + file (see module docs).
    pub fn load() -> Result<Self> {
        let mut cfg = match std::env::var(ENV_RANKING_CONFIG_PATH) {
            Ok(p) => {
                let pb = PathBuf::from(p);
                if !pb.exists() {
                    return Err(anyhow!(
                        "{} points to non-existent path {}",
                        ENV_RANKING_CONFIG_PATH,
                        pb.display()
                    ));
                }
                Self::from_path(&pb)?
            }
            Err(_) => {
                let pb = PathBuf::from(DEFAULT_RANKING_CONFIG_PATH);
                if pb.exists() {
                    Self::from_path(&pb)?
                } else {
                    Self::default()
                }
            }
        };
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading ranking config from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing ranking config at {}", path.display()))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(n) = parse_usize_env(std::env::var(ENV_TOP_N).ok()) {
            self.selection.top_n = n;
        }
        if let Some(m) = parse_i32_env(std::env::var(ENV_MIN_SCORE).ok()) {
            self.selection.min_score = Some(m);
        }
        if let Some(b) = parse_bool_env(std::env::var(ENV_MARKET_MOVING_ONLY).ok()) {
            self.selection.market_moving_only = b;
        }
        if let Some(n) = parse_usize_env(std::env::var(ENV_NEWS_MAX_CHARS).ok()) {
            self.ingest.news_max_chars = n;
        }
    }
}

fn parse_usize_env(raw: Option<String>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
}

fn parse_i32_env(raw: Option<String>) -> Option<i32> {
    raw.and_then(|s| s.trim().parse::<i32>().ok())
}

fn parse_bool_env(raw: Option<String>) -> Option<bool> {
    match raw?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
