//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `HOBBIES_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::DEFAULT_MAX_CONNECTIONS;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration for the API server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HOBBIES")]
pub struct AppSettings {
    /// Socket address to listen on.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// PostgreSQL URL. Without one the in-memory store is used.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = DEFAULT_MAX_CONNECTIONS)]
    pub db_max_connections: u32,
}
