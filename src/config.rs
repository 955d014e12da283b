//! Configuration resolution and constants.
//!
//! The service is configured entirely from the process environment: `PORT`
//! selects the listening port and `COMMIT_SHA` identifies the deployed build.
//! Both are resolved once at startup into a `ServiceConfig` and never re-read.

use const_format::formatcp;

// =============================================================================
// Environment
// =============================================================================

/// Environment variable holding the listening port (set by App Runner)
pub const PORT_ENV: &str = "PORT";

/// Environment variable holding the deployed commit identifier
pub const COMMIT_SHA_ENV: &str = "COMMIT_SHA";

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: &str = "8080";

/// Commit identifier used when `COMMIT_SHA` is unset or empty
pub const DEFAULT_COMMIT_SHA: &str = "unknown";

/// Interface the listener binds to
pub const BIND_HOST: &str = "0.0.0.0";

// =============================================================================
// Responses
// =============================================================================

/// Version number shown in the root greeting
pub const GREETING_VERSION: u32 = 1;

/// Root greeting up to (and excluding) the commit identifier
pub const GREETING_PREFIX: &str = formatcp!(
    "Hello from AWS App Runner! Version {} Commit SHA:",
    GREETING_VERSION
);

/// Health check response body
pub const HEALTH_BODY: &str = "OK";

/// Cache-Control value for every response; probes must never see a cached answer
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither `--log-level` nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "apprunner_demo=info";

/// Service configuration resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Port to listen on, kept as given; validated when the listener binds
    pub port: String,
    /// Build identifier echoed in the root response
    pub commit_sha: String,
}

impl ServiceConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Unset and empty variables both fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            port: resolve(PORT_ENV, DEFAULT_PORT),
            commit_sha: resolve(COMMIT_SHA_ENV, DEFAULT_COMMIT_SHA),
        }
    }

    /// Address string the listener binds to, e.g. `0.0.0.0:8080`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", BIND_HOST, self.port)
    }

    /// Render the root greeting for this deployment.
    pub fn greeting(&self) -> String {
        format!("{} {}\n", GREETING_PREFIX, self.commit_sha)
    }
}
