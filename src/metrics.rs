// src/metrics.rs
//! Prometheus wiring and ranking counters.
//!
//! Recording is a no-op until a recorder is installed (tests, library use).

use anyhow::Result;
use axum::{extract::State, http::header, response::IntoResponse, routing::get, Router};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::analyze::ScoredContent;

/// Text exposition format 0.0.4, what Prometheus scrapers expect.
const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder. Fails if one is already installed.
    pub fn init() -> Result<Self> {
        let handle = PrometheusBuilder::new().install_recorder()?;
        ensure_metrics_described();
        Ok(Self { handle })
    }

    /// `/metrics` scrape endpoint, ready to merge into the API router.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/metrics", get(scrape))
            .with_state(self.handle.clone())
    }
}

async fn scrape(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)], handle.render())
}

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("ranking_requests_total", "Rank requests served.");
        describe_counter!("ranking_items_total", "Items classified and scored.");
        describe_counter!("ranking_breaking_total", "Items flagged as breaking.");
        describe_counter!("ranking_selected_total", "Items handed on after selection.");
        describe_counter!("ranking_category_total", "Scored items per topic category.");
        describe_histogram!("ranking_rank_ms", "Time to rank one batch in milliseconds.");
    });
}

/// Count one ranked batch.
pub fn record_ranking(ranked: &[ScoredContent], elapsed_ms: f64) {
    counter!("ranking_requests_total").increment(1);
    counter!("ranking_items_total").increment(ranked.len() as u64);
    let breaking = ranked.iter().filter(|it| it.is_breaking).count();
    counter!("ranking_breaking_total").increment(breaking as u64);
    for it in ranked {
        counter!("ranking_category_total", "category" => it.category.as_str()).increment(1);
    }
    histogram!("ranking_rank_ms").record(elapsed_ms);
}

pub fn record_selected(selected: usize) {
    counter!("ranking_selected_total").increment(selected as u64);
}
