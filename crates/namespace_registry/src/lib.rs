//! An in-memory cache of namespace metadata kept fresh by a background
//! refresher and exposed to readers as lock-minimal, atomically-swapped
//! snapshots. See each submodule's docs for the piece it owns:
//!
//! - [`entry`] — the immutable per-namespace value type.
//! - [`index`] — the paired name/id snapshot a refresh cycle publishes.
//! - [`store`] — the metadata store collaborator trait.
//! - [`notifier`] — ordered, versioned change dispatch to subscribers.
//! - [`refresher`] — the drain-diff-publish-notify cycle.
//! - [`errors`] — the public error type.
//! - [`knobs`] — tunable limits, overridable by environment variable.
//! - [`metrics`] — Prometheus counters and histograms for the above.

pub mod entry;
pub mod errors;
pub mod index;
pub mod knobs;
pub mod metrics;
pub mod notifier;
pub mod refresher;
pub mod store;

use std::{
    sync::Arc,
    time::Duration,
};

use tokio::{
    sync::watch,
    task::JoinHandle,
};
use tracing::{
    info,
    warn,
};

pub use entry::Entry;
pub use errors::CacheError;
pub use index::Index;
use notifier::{
    ChangeEntry,
    Notifier,
};
pub use store::MetadataStore;

use crate::refresher::Refresher;

/// Runtime configuration for a [`NamespaceCache`]. Defaults come from
/// [`knobs`]; tests and callers that need non-default behavior construct
/// this directly instead of going through the environment.
#[derive(Clone)]
pub struct CacheConfig {
    pub refresh_interval: Duration,
    pub page_size: usize,
    pub store_call_timeout: Duration,
    pub enable_prefetch_on_start: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            refresh_interval: *knobs::REFRESH_INTERVAL,
            page_size: *knobs::PAGE_SIZE,
            store_call_timeout: *knobs::STORE_CALL_TIMEOUT,
            enable_prefetch_on_start: *knobs::ENABLE_PREFETCH_ON_START,
        }
    }
}

struct Background {
    handle: JoinHandle<()>,
    shutdown: watch::Sender<bool>,
}

/// The public façade: a lock-minimal read path over a periodically
/// refreshed snapshot of namespace metadata, plus ordered change
/// notifications for interested subscribers.
pub struct NamespaceCache {
    refresher: Arc<Refresher>,
    config: CacheConfig,
    background: parking_lot::Mutex<Option<Background>>,
}

impl NamespaceCache {
    pub fn new(store: Arc<dyn MetadataStore>, config: CacheConfig) -> Self {
        let notifier = Arc::new(Notifier::new());
        let refresher = Refresher::new(
            store,
            notifier,
            config.page_size,
            config.store_call_timeout,
        );
        Self {
            refresher: Arc::new(refresher),
            config,
            background: parking_lot::Mutex::new(None),
        }
    }

    /// Starts the cache: optionally runs one synchronous refresh (per
    /// [`CacheConfig::enable_prefetch_on_start`]), then spawns the
    /// background ticker. Fails only if prefetch is enabled and the initial
    /// refresh cannot reach the metadata store; a cache that fails to start
    /// publishes nothing and is safe to drop.
    pub async fn start(&self) -> Result<(), CacheError> {
        if self.config.enable_prefetch_on_start {
            self.refresher
                .refresh_once()
                .await
                .map_err(|err| CacheError::store_unavailable(&err))?;
        }

        let refresher = Arc::clone(&self.refresher);
        let interval = self.config.refresh_interval;
        let already_refreshed = self.config.enable_prefetch_on_start;
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            if already_refreshed {
                ticker.tick().await; // first tick fires immediately; already refreshed above.
            }
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Err(err) = refresher.refresh_once().await {
                            warn!(error = %err, "namespace cache background refresh failed");
                        }
                    }
                    _ = shutdown_rx.changed() => {
                        info!("namespace cache background refresher shutting down");
                        break;
                    }
                }
            }
        });

        *self.background.lock() = Some(Background {
            handle,
            shutdown: shutdown_tx,
        });
        info!("namespace cache started");
        Ok(())
    }

    /// Stops the background refresher. Idempotent: calling this more than
    /// once, or before [`Self::start`], is a no-op.
    pub async fn stop(&self) {
        let background = self.background.lock().take();
        if let Some(background) = background {
            let _ = background.shutdown.send(true);
            let _ = background.handle.await;
            info!("namespace cache stopped");
        }
    }

    pub fn get_namespace(&self, name: &str) -> Result<Arc<Entry>, CacheError> {
        let index = self.refresher.current().ok_or(CacheError::NotReady)?;
        index
            .lookup_by_name(name)
            .ok_or_else(|| CacheError::not_found(name))
    }

    pub fn get_namespace_by_id(&self, id: &str) -> Result<Arc<Entry>, CacheError> {
        let index = self.refresher.current().ok_or(CacheError::NotReady)?;
        index
            .lookup_by_id(id)
            .ok_or_else(|| CacheError::not_found(id))
    }

    /// Registers a change callback for `shard_id`. If `initial_version` is
    /// behind the currently published snapshot, the subscriber is caught up
    /// synchronously before this call returns. The snapshot read and the
    /// subscription insert happen under the Notifier's own lock, so this
    /// can never race a concurrent refresh's publish-and-dispatch.
    pub fn register_namespace_change_callback(
        &self,
        shard_id: impl Into<String>,
        initial_version: i64,
        prepare_fn: impl Fn() + Send + 'static,
        apply_fn: impl Fn(&[ChangeEntry]) + Send + 'static,
    ) {
        self.refresher
            .notifier()
            .register(shard_id, initial_version, prepare_fn, apply_fn);
    }

    pub fn unregister_namespace_change_callback(&self, shard_id: &str) {
        self.refresher.notifier().unregister(shard_id);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        entry::{
            NamespaceConfig,
            NamespaceInfo,
            PersistentRecord,
            ReplicationConfig,
        },
        store::testing::FakeMetadataStore,
    };

    fn record(id: &str, name: &str, version: i64) -> PersistentRecord {
        PersistentRecord {
            id: id.to_string(),
            name: name.to_string(),
            info: NamespaceInfo::default(),
            config: NamespaceConfig {
                retention: Duration::from_secs(86400),
                bad_binaries: None,
            },
            replication: ReplicationConfig {
                active_cluster: "foo".to_string(),
                clusters: vec!["foo".to_string()],
            },
            config_version: 0,
            failover_version: 0,
            failover_notification_version: 0,
            notification_version: version,
            is_global: false,
        }
    }

    fn test_config() -> CacheConfig {
        CacheConfig {
            refresh_interval: Duration::from_secs(60),
            page_size: 200,
            store_call_timeout: Duration::from_secs(5),
            enable_prefetch_on_start: true,
        }
    }

    #[tokio::test]
    async fn lookups_fail_with_not_ready_before_start() {
        let store = FakeMetadataStore::new();
        let cache = NamespaceCache::new(Arc::new(store), test_config());
        assert_eq!(cache.get_namespace("alpha"), Err(CacheError::NotReady));
    }

    #[tokio::test]
    async fn start_with_prefetch_populates_lookups() {
        let store = FakeMetadataStore::new();
        store.insert(record("i1", "alpha", 0));
        store.set_notification_version(1);
        let cache = NamespaceCache::new(Arc::new(store), test_config());

        cache.start().await.unwrap();

        let entry = cache.get_namespace("alpha").unwrap();
        assert_eq!(entry.id, "i1");
        let by_id = cache.get_namespace_by_id("i1").unwrap();
        assert_eq!(by_id.name, "alpha");

        cache.stop().await;
    }

    #[tokio::test]
    async fn start_fails_when_prefetch_cannot_reach_the_store() {
        let store = FakeMetadataStore::new();
        store.fail_next_calls(1);
        let cache = NamespaceCache::new(Arc::new(store), test_config());
        let result = cache.start().await;
        assert!(matches!(result, Err(CacheError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn unknown_name_and_id_return_not_found() {
        let store = FakeMetadataStore::new();
        store.insert(record("i1", "alpha", 0));
        store.set_notification_version(1);
        let cache = NamespaceCache::new(Arc::new(store), test_config());
        cache.start().await.unwrap();

        assert_eq!(
            cache.get_namespace("missing"),
            Err(CacheError::not_found("missing"))
        );
        assert_eq!(
            cache.get_namespace_by_id("missing"),
            Err(CacheError::not_found("missing"))
        );
        cache.stop().await;
    }

    #[tokio::test]
    async fn stop_is_idempotent() {
        let store = FakeMetadataStore::new();
        let cache = NamespaceCache::new(Arc::new(store), test_config());
        cache.start().await.unwrap();
        cache.stop().await;
        cache.stop().await;
    }

    #[tokio::test]
    async fn register_callback_catches_up_to_the_started_snapshot() {
        let store = FakeMetadataStore::new();
        store.insert(record("i1", "alpha", 0));
        store.set_notification_version(1);
        let cache = NamespaceCache::new(Arc::new(store), test_config());
        cache.start().await.unwrap();

        let delivered = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let delivered_clone = Arc::clone(&delivered);
        cache.register_namespace_change_callback(
            "shard-1",
            0,
            || {},
            move |changes| {
                for change in changes {
                    delivered_clone
                        .lock()
                        .push(change.next.as_ref().unwrap().id.clone());
                }
            },
        );

        assert_eq!(*delivered.lock(), vec!["i1".to_string()]);
        cache.stop().await;
    }
}
