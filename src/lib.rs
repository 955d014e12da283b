//! apprunner-demo: a minimal HTTP service for AWS App Runner.
//!
//! Serves a greeting carrying the deployed commit SHA on `/` and a liveness
//! probe on `/health`. Configuration comes from the `PORT` and `COMMIT_SHA`
//! environment variables, resolved once at startup.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use routes::create_router;
pub use state::AppState;
