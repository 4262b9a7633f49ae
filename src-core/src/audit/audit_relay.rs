//! Asynchronous fan-out from mutation results to the audit sink.
//!
//! Producers enqueue change events without blocking; a single background
//! consumer drains the channel into the sink with a bounded retry per
//! event. Catalog mutation latency never depends on sink latency.

use log::{debug, error, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::audit_model::ChangeEvent;
use super::audit_traits::AuditSinkTrait;

const CHANNEL_CAPACITY: usize = 1024;
const MAX_DELIVERY_ATTEMPTS: u32 = 3;
const RETRY_BACKOFF: Duration = Duration::from_millis(200);

/// Producer handle given to services. Cloning is cheap; publishing never
/// blocks and never fails the caller.
#[derive(Clone)]
pub struct AuditRelay {
    tx: mpsc::Sender<ChangeEvent>,
}

impl AuditRelay {
    pub fn publish(&self, event: ChangeEvent) {
        // A full or closed channel drops the event; the sink is best-effort.
        if let Err(err) = self.tx.try_send(event) {
            error!("failed to enqueue change event: {}", err);
        }
    }
}

/// Spawns the drain loop. The loop exits once every producer handle has
/// been dropped and the channel is empty.
pub fn spawn_relay(sink: Arc<dyn AuditSinkTrait>) -> (AuditRelay, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::channel::<ChangeEvent>(CHANNEL_CAPACITY);

    let handle = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            deliver(&sink, &event).await;
        }
        debug!("audit relay drained, shutting down");
    });

    (AuditRelay { tx }, handle)
}

/// One bad event never halts the pipeline: after the retry budget is
/// spent the event is logged and dropped. Sink writes block on disk I/O,
/// so each attempt runs on the blocking pool.
async fn deliver(sink: &Arc<dyn AuditSinkTrait>, event: &ChangeEvent) {
    for attempt in 1..=MAX_DELIVERY_ATTEMPTS {
        let sink = Arc::clone(sink);
        let snapshot = event.clone();
        let result = tokio::task::spawn_blocking(move || sink.append(&snapshot)).await;

        match result {
            Ok(Ok(())) => {
                debug!("change event delivered for good {}", event.good_id);
                return;
            }
            Ok(Err(err)) if attempt < MAX_DELIVERY_ATTEMPTS => {
                warn!(
                    "audit sink write failed (attempt {}/{}): {}",
                    attempt, MAX_DELIVERY_ATTEMPTS, err
                );
                tokio::time::sleep(RETRY_BACKOFF).await;
            }
            Ok(Err(err)) => {
                error!(
                    "dropping change event for good {} after {} attempts: {}",
                    event.good_id, MAX_DELIVERY_ATTEMPTS, err
                );
            }
            Err(err) => {
                error!(
                    "audit sink task failed for good {}: {}",
                    event.good_id, err
                );
                return;
            }
        }
    }
}
