use async_trait::async_trait;

use super::goods_errors::Result;
use super::goods_model::{Good, GoodUpdate, NewGood, RemovedGood, ReprioritizeRequest, ReprioritizeResult};
use crate::listings::ListingPage;

/// Trait defining the contract for goods storage operations.
///
/// `remove` and `reprioritize` return full row snapshots so callers can
/// derive both the response shape and the audit events from one read.
pub trait GoodsRepositoryTrait: Send + Sync {
    fn create(&self, new_good: NewGood) -> Result<Good>;
    fn update(&self, update: GoodUpdate) -> Result<Good>;
    fn remove(&self, id: i32, project_id: i32) -> Result<Good>;
    fn list(&self, offset: i64, limit: i64) -> Result<ListingPage>;
    fn reprioritize(&self, request: ReprioritizeRequest) -> Result<Vec<Good>>;
}

/// Trait defining the contract for goods service operations.
#[async_trait]
pub trait GoodsServiceTrait: Send + Sync {
    async fn create_good(&self, new_good: NewGood) -> Result<Good>;
    async fn update_good(&self, update: GoodUpdate) -> Result<Good>;
    async fn remove_good(&self, id: i32, project_id: i32) -> Result<RemovedGood>;
    async fn list_goods(&self, offset: i64, limit: i64) -> Result<ListingPage>;
    async fn reprioritize_good(&self, request: ReprioritizeRequest) -> Result<ReprioritizeResult>;
}
