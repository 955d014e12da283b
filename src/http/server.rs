//! Plain HTTP server startup.
//!
//! Binds `0.0.0.0:<port>` and serves the router until the process is killed.
//! A listener that cannot be bound is reported to the caller, which treats it
//! as fatal.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Parse the configured listen address.
pub fn listen_addr(config: &ServiceConfig) -> Result<SocketAddr, ServerError> {
    let addr = config.bind_address();
    addr.parse()
        .map_err(|source| ServerError::InvalidAddress { addr, source })
}

/// Bind the TCP listener for the configured port.
pub async fn bind_listener(config: &ServiceConfig) -> Result<TcpListener, ServerError> {
    bind_addr(listen_addr(config)?).await
}

async fn bind_addr(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve the router on an already bound listener.
///
/// Only returns if the accept loop fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Bind the configured port and serve the router.
pub async fn start_server(app: Router, config: &ServiceConfig) -> Result<(), ServerError> {
    let addr = listen_addr(config)?;
    let listener = bind_addr(addr).await?;
    tracing::debug!(%addr, "Listener bound");
    serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_port(port: &str) -> ServiceConfig {
        ServiceConfig {
            port: port.to_string(),
            commit_sha: "test".to_string(),
        }
    }

    #[test]
    fn default_port_resolves_to_8080() {
        let config = ServiceConfig::from_lookup(|_| None);
        let addr = listen_addr(&config).unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn explicit_port_is_used() {
        let addr = listen_addr(&config_with_port("9090")).unwrap();
        assert_eq!(addr.port(), 9090);
    }

    #[test]
    fn malformed_port_is_rejected() {
        for port in ["not-a-port", "70000", "-1"] {
            let err = listen_addr(&config_with_port(port)).unwrap_err();
            assert!(matches!(err, ServerError::InvalidAddress { .. }), "port {port}");
        }
    }

    #[tokio::test]
    async fn port_in_use_is_a_bind_error() {
        let taken = TcpListener::bind("0.0.0.0:0").await.unwrap();
        let port = taken.local_addr().unwrap().port().to_string();

        let err = bind_listener(&config_with_port(&port)).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { .. }));
    }

    #[tokio::test]
    async fn start_server_reports_startup_failures_by_kind() {
        let taken = TcpListener::bind("0.0.0.0:0").await.unwrap();
        let port = taken.local_addr().unwrap().port().to_string();
        let app = Router::new();

        let err = start_server(app.clone(), &config_with_port(&port))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ServerError::Bind { addr, .. } if addr.port().to_string() == port),
            "{err:?}"
        );

        let err = start_server(app, &config_with_port("abc")).await.unwrap_err();
        assert!(matches!(err, ServerError::InvalidAddress { .. }), "{err:?}");
    }
}
