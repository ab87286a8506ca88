//! Runtime configuration from environment variables.

/// Connection string and bind address, with local defaults.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub database_url: String,
    pub bind_addr: String,
}

impl ServiceConfig {
    /// Reads `DATABASE_URL` and `BIND_ADDR`, defaulting to a local
    /// PostgreSQL and port 3000.
    pub fn from_env() -> Self {
        ServiceConfig {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/usuarios".into()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into()),
        }
    }
}
