//! Startup and serve failures for the host process.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
