// src/api.rs
//! HTTP surface over the ranking engine. Handlers never fetch, persist or call an LLM.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::json;
use shuttle_axum::axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tracing::{debug, warn};

use crate::analyze::{
    classify, log_ranking, rank, score, ContentItem, ScoredContent, Selection,
};
use crate::config::RankingConfig;
use crate::ingest::{merge_candidates, normalize_news_items};
use crate::metrics::{record_ranking, record_selected};
use crate::topic::TopicCategory;
use crate::validate::{validate_items, ValidationError, MAX_ITEMS};

/// Upper bound for a request-supplied `topN`.
pub const MAX_TOP_N: usize = MAX_ITEMS;

#[derive(Clone)]
pub struct AppState {
    config: Arc<RankingConfig>,
}

impl AppState {
    pub fn new(config: RankingConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Build from `RankingConfig::load()`.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(RankingConfig::load()?))
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/categories", get(categories))
        .route("/classify", post(classify_one))
        .route("/rank", post(rank_batch))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Rejected request: `400 {"error": "..."}`.
pub struct ApiError(ValidationError);

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(target: "ranking", error = %self.0, "rejected rank request");
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

#[derive(Serialize)]
struct CategoryOut {
    category: TopicCategory,
    label: &'static str,
    weight: i32,
    color: &'static str,
    keywords: &'static [&'static str],
}

async fn categories() -> Json<Vec<CategoryOut>> {
    let out = TopicCategory::CANONICAL_ORDER
        .into_iter()
        .map(|c| CategoryOut {
            category: c,
            label: c.label(),
            weight: c.weight(),
            color: c.color(),
            keywords: c.keywords(),
        })
        .collect();
    Json(out)
}

#[derive(Deserialize)]
struct ClassifyReq {
    #[serde(default)]
    title: Option<String>,
    content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassifyResp {
    category: TopicCategory,
    label: &'static str,
    relevance_score: i32,
    is_breaking: bool,
}

async fn classify_one(Json(body): Json<ClassifyReq>) -> Json<ClassifyResp> {
    let title = body.title.as_deref();
    let category = classify(title, &body.content);
    let rs = score(title, &body.content, category);
    Json(ClassifyResp {
        category,
        label: category.label(),
        relevance_score: rs.score,
        is_breaking: rs.is_breaking,
    })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RankReq {
    #[serde(default)]
    items: Vec<ContentItem>,
    /// Fetched feed items; HTML is stripped and bodies truncated before ranking.
    #[serde(default)]
    news: Vec<ContentItem>,
    #[serde(default)]
    top_n: Option<i64>,
    #[serde(default)]
    min_score: Option<i32>,
    #[serde(default)]
    market_moving_only: Option<bool>,
}

#[derive(Serialize)]
struct RankResp {
    total: usize,
    selected: usize,
    items: Vec<ScoredContent>,
}

/// Request fields override the configured selection.
fn selection_for(req: &RankReq, defaults: &Selection) -> Selection {
    Selection {
        top_n: req
            .top_n
            .map(|n| n.clamp(0, MAX_TOP_N as i64) as usize)
            .unwrap_or(defaults.top_n),
        min_score: req.min_score.or(defaults.min_score),
        market_moving_only: req.market_moving_only.unwrap_or(defaults.market_moving_only),
    }
}

async fn rank_batch(
    State(state): State<AppState>,
    Json(body): Json<RankReq>,
) -> Result<Json<RankResp>, ApiError> {
    validate_items(&body.items)?;

    let cfg = state.config();
    let selection = selection_for(&body, &cfg.selection);

    let RankReq { items, news, .. } = body;
    let news = normalize_news_items(news, cfg.ingest.news_max_chars);
    let pool = merge_candidates(items, news);

    let started = Instant::now();
    let ranked = rank(pool);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1_000.0;

    if cfg.diagnostics.log_ranking {
        log_ranking(&ranked, "rank request");
    }

    let total = ranked.len();
    record_ranking(&ranked, elapsed_ms);
    let selected = selection.apply(ranked);
    record_selected(selected.len());
    debug!(target: "ranking", total, selected = selected.len(), ?selection, "ranked batch");

    Ok(Json(RankResp {
        total,
        selected: selected.len(),
        items: selected,
    }))
}
