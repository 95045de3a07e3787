// tests/metrics.rs
//
// Prometheus exposition after a /rank request. The recorder is process-global,
// so this binary installs it exactly once and keeps everything in one test.

use serde_json::json;
use shuttle_axum::axum::{
    body::{self, Body},
    http::{header, Request, StatusCode},
};
use tower::ServiceExt as _; // for `oneshot`

use macro_digest_ranker::api::{self, AppState};
use macro_digest_ranker::config::RankingConfig;
use macro_digest_ranker::metrics::Metrics;

const BODY_LIMIT: usize = 1_048_576;

#[tokio::test]
async fn rank_request_shows_up_on_metrics() {
    let metrics = Metrics::init().expect("install recorder");
    let app = api::router(AppState::new(RankingConfig::default())).merge(metrics.router());

    let payload = json!({
        "items": [
            { "source": "macro", "content": "core cpi came in hot" },
            { "source": "wire", "title": "BREAKING: nasdaq halts", "content": "stocks" }
        ],
        "topN": 1
    });
    let req = Request::builder()
        .method("POST")
        .uri("/rank")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build POST /rank");
    let resp = app.clone().oneshot(req).await.expect("oneshot /rank");
    assert_eq!(resp.status(), StatusCode::OK);

    let req = Request::get("/metrics")
        .body(Body::empty())
        .expect("build GET /metrics");
    let resp = app.oneshot(req).await.expect("oneshot /metrics");
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"), "{content_type}");

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    let text = String::from_utf8_lossy(&bytes);

    for needle in [
        "ranking_requests_total 1",
        "ranking_items_total 2",
        "ranking_breaking_total 1",
        "ranking_selected_total 1",
        "ranking_category_total{category=\"MACRO_DATA\"} 1",
        "ranking_category_total{category=\"MARKETS\"} 1",
        "ranking_rank_ms",
    ] {
        assert!(
            text.contains(needle),
            "metrics exposition missing '{needle}'\n{text}"
        );
    }
}
