//! Startup failures for the site host.

use std::io;

/// Anything that stops the host before it can serve requests.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT {value:?}")]
    InvalidPort { value: String },
    /// The Leptos options could not be loaded from metadata or `LEPTOS_*`.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: io::Error,
    },
    /// The server loop exited with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[source] io::Error),
}
