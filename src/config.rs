use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Optional: when unset, the startup product bootstrap is skipped and the
    /// service runs purely in-memory.
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            database_url: std::env::var("DATABASE_URL").ok(),
        })
    }
}
