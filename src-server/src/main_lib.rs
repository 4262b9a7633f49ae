use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use catalog_core::audit::{spawn_relay, AuditLogRepository, AuditSinkTrait};
use catalog_core::db;
use catalog_core::goods::{GoodsRepository, GoodsService, GoodsServiceTrait};
use catalog_core::listings::ListingCache;

use crate::config::Config;

pub struct AppState {
    pub goods_service: Arc<dyn GoodsServiceTrait>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let sink: Arc<dyn AuditSinkTrait> = Arc::new(AuditLogRepository::new(pool.clone()));
    let (relay, _relay_handle) = spawn_relay(sink);

    let repo = Arc::new(GoodsRepository::new(pool.clone()));
    let cache = Arc::new(ListingCache::new(config.cache_ttl));
    let goods_service: Arc<dyn GoodsServiceTrait> =
        Arc::new(GoodsService::new(repo, cache, relay));

    Ok(Arc::new(AppState { goods_service }))
}
