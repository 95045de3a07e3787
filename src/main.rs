//! Ranking service — binary entrypoint.
//! Boots the Axum HTTP server with the ranking router and Prometheus metrics.

use macro_digest_ranker::api::{self, AppState};
use macro_digest_ranker::metrics::Metrics;
use shuttle_axum::ShuttleAxum;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Used when `RUST_LOG` is unset: ranking diagnostics at info, everything else at warn.
const DEFAULT_LOG_FILTER: &str = "ranking=info,warn";

/// Shuttle environments that count as development.
const DEV_SHUTTLE_ENVS: [&str; 3] = ["local", "development", "dev"];

/// Dev logging needs `RANKING_DEV_LOG=1` and a dev build or dev Shuttle environment.
fn dev_tracing_wanted(dev_log: Option<&str>, shuttle_env: Option<&str>, debug_build: bool) -> bool {
    let dev_env = debug_build
        || shuttle_env.is_some_and(|env| {
            DEV_SHUTTLE_ENVS
                .iter()
                .any(|dev| env.eq_ignore_ascii_case(dev))
        });
    dev_log == Some("1") && dev_env
}

/// Install a compact fmt subscriber when dev logging is wanted. Returns whether it did.
fn enable_dev_tracing() -> bool {
    let dev_log = std::env::var("RANKING_DEV_LOG").ok();
    let shuttle_env = std::env::var("SHUTTLE_ENV").ok();
    if !dev_tracing_wanted(dev_log.as_deref(), shuttle_env.as_deref(), cfg!(debug_assertions)) {
        return false;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(true))
        .try_init()
        .is_ok()
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    if enable_dev_tracing() {
        info!(target: "ranking", "dev tracing enabled");
    }

    let state = AppState::from_env()?;
    info!(
        target: "ranking",
        top_n = state.config().selection.top_n,
        min_score = ?state.config().selection.min_score,
        market_moving_only = state.config().selection.market_moving_only,
        "ranking config loaded"
    );

    let metrics = Metrics::init()?;
    let router = api::router(state).merge(metrics.router());

    Ok(router.into())
}
