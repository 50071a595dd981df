//! Process configuration fixed at startup.

use std::net::SocketAddr;

/// Configuration resolved once at process start.
///
/// There is no runtime reconfiguration: the database URL and listen address
/// are read from flags or environment variables by the server binary and
/// handed to the composition root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `PostgreSQL` connection URL for the `tasks` table.
    pub database_url: String,
    /// Socket address the HTTP listener binds.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Creates a configuration from its parts.
    #[must_use]
    pub fn new(database_url: impl Into<String>, bind_addr: SocketAddr) -> Self {
        Self {
            database_url: database_url.into(),
            bind_addr,
        }
    }
}
