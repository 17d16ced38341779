//! HTTP server configuration object.

use std::net::SocketAddr;

use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) openweather_api_key: Option<String>,
    pub(crate) openai_api_key: Option<String>,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration binding to the given address, with no
    /// credentials and no database attached.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            openweather_api_key: None,
            openai_api_key: None,
            db_pool: None,
        }
    }

    /// Attach the weather-provider credential used by geocoding and both
    /// weather endpoints. Without it the server falls back to fixtures.
    #[must_use]
    pub fn with_openweather_api_key(mut self, key: Option<String>) -> Self {
        self.openweather_api_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    /// Attach the optional language-model credential.
    #[must_use]
    pub fn with_openai_api_key(mut self, key: Option<String>) -> Self {
        self.openai_api_key = key;
        self
    }

    /// Attach a database connection pool for durable record storage. Without
    /// one the server keeps records in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// The socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
