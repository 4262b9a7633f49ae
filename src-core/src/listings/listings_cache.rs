//! In-memory listing cache with TTL using moka

use async_trait::async_trait;
use log::{debug, info};
use moka::future::Cache;
use std::time::Duration;

use super::listings_errors::Result;
use super::listings_model::ListingPage;
use super::listings_traits::ListingCacheTrait;

/// Every listing key lives under this prefix so wholesale invalidation can
/// scan-and-delete the namespace without touching unrelated entries.
pub const LISTING_KEY_PREFIX: &str = "goodsList:";

const MAX_CACHED_PAGES: u64 = 1_000;

pub(crate) fn page_key(offset: i64, limit: i64) -> String {
    format!("{}offset={}:limit={}", LISTING_KEY_PREFIX, offset, limit)
}

/// Read-through cache of paginated listing results, invalidated wholesale
/// on any catalog mutation.
pub struct ListingCache {
    entries: Cache<String, ListingPage>,
}

impl ListingCache {
    /// Create a listing cache whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Cache::builder()
                .time_to_live(ttl)
                .max_capacity(MAX_CACHED_PAGES)
                .build(),
        }
    }

    /// Number of live entries, for tests and diagnostics.
    pub async fn entry_count(&self) -> u64 {
        self.entries.run_pending_tasks().await;
        self.entries.entry_count()
    }
}

#[async_trait]
impl ListingCacheTrait for ListingCache {
    async fn get(&self, offset: i64, limit: i64) -> Option<ListingPage> {
        self.entries.get(&page_key(offset, limit)).await
    }

    async fn put(&self, page: ListingPage) {
        let key = page_key(page.meta.offset, page.meta.limit);
        debug!("caching listing page under {}", key);
        self.entries.insert(key, page).await;
    }

    async fn invalidate_all(&self) -> Result<()> {
        let keys: Vec<_> = self.entries.iter().map(|(key, _)| key).collect();

        let mut deleted = 0usize;
        for key in keys {
            if key.starts_with(LISTING_KEY_PREFIX) {
                self.entries.invalidate(key.as_str()).await;
                deleted += 1;
            }
        }

        info!("listing cache invalidated, deleted {} keys", deleted);
        Ok(())
    }
}
