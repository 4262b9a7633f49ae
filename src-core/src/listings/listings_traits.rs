use async_trait::async_trait;

use super::listings_errors::Result;
use super::listings_model::ListingPage;

/// Trait defining the contract for the paginated listing cache.
#[async_trait]
pub trait ListingCacheTrait: Send + Sync {
    /// Returns the cached page for `(offset, limit)`, or `None` on a miss.
    async fn get(&self, offset: i64, limit: i64) -> Option<ListingPage>;

    /// Stores a page under its own `(offset, limit)` key.
    async fn put(&self, page: ListingPage);

    /// Drops every key under the listing namespace, best-effort per key.
    async fn invalidate_all(&self) -> Result<()>;
}
