use std::time::Instant;

use chrono::Utc;
use tracing::info;

/// Wraps one engine round trip with request/response timing events on the
/// dedicated `studio.timing` target.
pub async fn log_engine_timing<T, F, Fut>(
    provider: &str,
    model: &str,
    operation: &str,
    call: F,
) -> Result<T, anyhow::Error>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T, anyhow::Error>>,
{
    let started_at = Utc::now();
    let started_perf = Instant::now();
    info!(
        target: "studio.timing",
        "event=engine_request provider={} model={} operation={} started_at={}",
        provider,
        model,
        operation,
        started_at.to_rfc3339()
    );

    let result = call().await;
    let status = if result.is_ok() { "success" } else { "error" };

    let completed_at = Utc::now();
    let duration = started_perf.elapsed().as_secs_f64();
    info!(
        target: "studio.timing",
        "event=engine_response provider={} model={} operation={} completed_at={} duration_s={:.3} status={}",
        provider,
        model,
        operation,
        completed_at.to_rfc3339(),
        duration,
        status
    );

    result
}
