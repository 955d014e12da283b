//! Health check endpoint for the App Runner health probe.

use crate::config::HEALTH_BODY;

/// Health check handler.
///
/// Liveness only: answers `OK` for any method as long as the process can serve HTTP.
pub async fn health() -> &'static str {
    HEALTH_BODY
}
