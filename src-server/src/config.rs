use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("CATALOG_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("invalid CATALOG_LISTEN_ADDR")?;
        let db_path =
            std::env::var("CATALOG_DB_PATH").unwrap_or_else(|_| "./db/catalog.db".into());
        let ttl_secs: u64 = std::env::var("CATALOG_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .context("invalid CATALOG_CACHE_TTL_SECS")?;
        let timeout_ms: u64 = std::env::var("CATALOG_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .context("invalid CATALOG_REQUEST_TIMEOUT_MS")?;

        Ok(Self {
            listen_addr,
            db_path,
            cache_ttl: Duration::from_secs(ttl_secs),
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
