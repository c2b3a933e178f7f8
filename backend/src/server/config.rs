//! HTTP server configuration object.

use std::net::SocketAddr;

use hobbies_api::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database pool.
    ///
    /// Without one the repositories fall back to the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[must_use]
    pub fn uses_database(&self) -> bool {
        self.db_pool.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_to_the_memory_store() {
        let config = ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 8080)));

        assert!(!config.uses_database());
        assert_eq!(config.bind_addr().port(), 8080);
    }
}
