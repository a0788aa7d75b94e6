//! Health check handler

/// Liveness probe. Always responds 200 with a literal body.
pub async fn health_check() -> &'static str {
    "OK"
}
