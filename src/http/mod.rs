//! HTTP server module.
//!
//! Plain HTTP only; TLS is terminated by the hosting platform.

mod server;

pub use server::{bind_listener, listen_addr, serve, start_server, ServerError};
