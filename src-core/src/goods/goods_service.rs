use async_trait::async_trait;
use log::{debug, error, info};
use std::sync::Arc;

use crate::audit::{AuditRelay, ChangeEvent};
use crate::listings::{ListingCacheTrait, ListingPage};

use super::goods_errors::{GoodError, Result};
use super::goods_model::{
    Good, GoodUpdate, NewGood, PriorityAssignment, RemovedGood, ReprioritizeRequest,
    ReprioritizeResult,
};
use super::goods_traits::{GoodsRepositoryTrait, GoodsServiceTrait};

/// Service orchestrating the goods store, the listing cache and the audit
/// relay. Mutation success is determined solely by the store result; cache
/// and audit side effects run on detached tasks.
pub struct GoodsService<R: GoodsRepositoryTrait, C: ListingCacheTrait> {
    repo: Arc<R>,
    cache: Arc<C>,
    relay: AuditRelay,
}

impl<R, C> GoodsService<R, C>
where
    R: GoodsRepositoryTrait + 'static,
    C: ListingCacheTrait + 'static,
{
    /// Creates a new GoodsService instance
    pub fn new(repo: Arc<R>, cache: Arc<C>, relay: AuditRelay) -> Self {
        Self { repo, cache, relay }
    }

    /// Store calls block on SQLite; run them on the blocking pool so a
    /// slow write never stalls a runtime worker.
    async fn run_blocking<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&R) -> Result<T> + Send + 'static,
    {
        let repo = self.repo.clone();
        tokio::task::spawn_blocking(move || f(&repo))
            .await
            .map_err(|e| GoodError::DatabaseError(e.to_string()))?
    }

    /// Fire-and-forget: invalidate every cached listing page and publish one
    /// change event per mutated row. Failures are logged and never surface
    /// to the caller, and the task outlives any request cancellation.
    fn dispatch_side_effects(&self, events: Vec<ChangeEvent>) {
        let cache = self.cache.clone();
        let relay = self.relay.clone();
        tokio::spawn(async move {
            if let Err(err) = cache.invalidate_all().await {
                error!("listing cache invalidation failed: {}", err);
            }
            for event in events {
                relay.publish(event);
            }
        });
    }
}

#[async_trait]
impl<R, C> GoodsServiceTrait for GoodsService<R, C>
where
    R: GoodsRepositoryTrait + 'static,
    C: ListingCacheTrait + 'static,
{
    async fn create_good(&self, new_good: NewGood) -> Result<Good> {
        debug!("creating good in project {}", new_good.project_id);

        let good = self.run_blocking(move |repo| repo.create(new_good)).await?;
        self.dispatch_side_effects(vec![ChangeEvent::from(&good)]);

        info!("good {} created with priority {}", good.id, good.priority);
        Ok(good)
    }

    async fn update_good(&self, update: GoodUpdate) -> Result<Good> {
        debug!("updating good {} in project {}", update.id, update.project_id);

        let good = self.run_blocking(move |repo| repo.update(update)).await?;
        self.dispatch_side_effects(vec![ChangeEvent::from(&good)]);

        info!("good {} updated", good.id);
        Ok(good)
    }

    async fn remove_good(&self, id: i32, project_id: i32) -> Result<RemovedGood> {
        debug!("removing good {} in project {}", id, project_id);

        let good = self
            .run_blocking(move |repo| repo.remove(id, project_id))
            .await?;
        self.dispatch_side_effects(vec![ChangeEvent::from(&good)]);

        info!("good {} removed", good.id);
        Ok(RemovedGood {
            id: good.id,
            project_id: good.project_id,
            removed: good.removed,
        })
    }

    /// Read-through: a cache hit never touches the store; a miss queries the
    /// store and populates the cache from a detached task.
    async fn list_goods(&self, offset: i64, limit: i64) -> Result<ListingPage> {
        if let Some(page) = self.cache.get(offset, limit).await {
            debug!("listing served from cache, offset={} limit={}", offset, limit);
            return Ok(page);
        }

        let page = self
            .run_blocking(move |repo| repo.list(offset, limit))
            .await?;

        let cache = self.cache.clone();
        let snapshot = page.clone();
        tokio::spawn(async move {
            cache.put(snapshot).await;
        });

        Ok(page)
    }

    async fn reprioritize_good(&self, request: ReprioritizeRequest) -> Result<ReprioritizeResult> {
        debug!(
            "reprioritizing good {} in project {} to {}",
            request.id, request.project_id, request.new_priority
        );

        let changed = self
            .run_blocking(move |repo| repo.reprioritize(request))
            .await?;

        let events = changed.iter().map(ChangeEvent::from).collect();
        let priorities = changed
            .iter()
            .map(|good| PriorityAssignment {
                id: good.id,
                priority: good.priority,
            })
            .collect();
        self.dispatch_side_effects(events);

        info!("reprioritized {} goods", changed.len());
        Ok(ReprioritizeResult { priorities })
    }
}
