//! The background refresh cycle: drain the metadata store, build a fresh
//! [`Index`], and hand it to the [`Notifier`] to publish and dispatch in one
//! atomic step. The [`Notifier`] holds the single published snapshot; reads
//! go through [`Refresher::current`], which delegates to it and never
//! blocks on a refresh in flight.

use std::{
    future::Future,
    sync::Arc,
    time::Duration,
};

use tracing::{
    debug,
    info,
    warn,
};

use crate::{
    entry::Entry,
    index::Index,
    metrics,
    notifier::{
        ChangeEntry,
        Notifier,
    },
    store::MetadataStore,
};

/// Drives one crate's worth of refresh cycles against a single
/// [`MetadataStore`], publishing [`Index`] snapshots and notifying
/// subscribers of the resulting changes.
pub struct Refresher {
    store: Arc<dyn MetadataStore>,
    notifier: Arc<Notifier>,
    in_flight: tokio::sync::Mutex<()>,
    page_size: usize,
    store_call_timeout: Duration,
}

impl Refresher {
    pub fn new(
        store: Arc<dyn MetadataStore>,
        notifier: Arc<Notifier>,
        page_size: usize,
        store_call_timeout: Duration,
    ) -> Self {
        Self {
            store,
            notifier,
            in_flight: tokio::sync::Mutex::new(()),
            page_size,
            store_call_timeout,
        }
    }

    /// The most recently published index, or `None` before the first
    /// successful refresh.
    pub fn current(&self) -> Option<Arc<Index>> {
        self.notifier.current()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Runs one refresh cycle to completion. Concurrent callers serialize on
    /// an internal lock rather than racing independent cycles against the
    /// store; at most one cycle is ever in flight.
    pub async fn refresh_once(&self) -> anyhow::Result<()> {
        let _serialize = self.in_flight.lock().await;
        let _timer = metrics::refresh_timer();
        let started_at = std::time::Instant::now();

        match self.run_cycle().await {
            Ok(namespace_count) => {
                metrics::log_refresh_cycle();
                info!(
                    namespace_count,
                    elapsed_ms = started_at.elapsed().as_millis() as u64,
                    "namespace cache refresh cycle completed"
                );
                Ok(())
            },
            Err(err) => {
                metrics::log_refresh_failure();
                warn!(error = %err, "namespace cache refresh cycle failed, keeping previous snapshot");
                Err(err)
            },
        }
    }

    async fn run_cycle(&self) -> anyhow::Result<usize> {
        let store_metadata = self.call_with_timeout(self.store.get_metadata()).await?;
        let notification_version_bound = store_metadata.notification_version;

        let mut entries = Vec::new();
        let mut page_token = None;
        loop {
            let page = self.call_with_timeout(
                self.store
                    .list_namespaces(self.page_size, page_token.clone()),
            )
            .await?;
            let page_len = page.namespaces.len();
            for record in page.namespaces {
                if record.notification_version >= notification_version_bound {
                    continue;
                }
                entries.push(Entry::from_persistent_state(record));
            }
            debug!(page_len, total_so_far = entries.len(), "drained a ListNamespaces page");
            match page.next_page_token {
                Some(next) => page_token = Some(next),
                None => break,
            }
        }

        let new_index = Index::build(entries);
        let namespace_count = new_index.len();
        let old_index = self.notifier.current();
        let mut changes = compute_changes(old_index.as_deref(), &new_index);
        crate::notifier::sort_changes(&mut changes);

        metrics::log_namespaces_indexed(namespace_count);
        self.notifier
            .publish_and_dispatch(Arc::new(new_index), &changes);

        Ok(namespace_count)
    }

    async fn call_with_timeout<F, T>(&self, fut: F) -> anyhow::Result<T>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        match tokio::time::timeout(self.store_call_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(anyhow::anyhow!(
                "metadata store call exceeded the {:?} timeout",
                self.store_call_timeout
            )),
        }
    }
}

/// Computes the (prev, next) change set between `old` and `new`: every entry
/// in `new` whose id is absent from `old` or whose `notification_version`
/// differs, plus a deletion entry for every id present in `old` but absent
/// from `new`.
fn compute_changes(old: Option<&Index>, new: &Index) -> Vec<ChangeEntry> {
    let mut changes = Vec::new();

    for next in new.iter() {
        let prev = old.and_then(|old| old.lookup_by_id(&next.id));
        let changed = match &prev {
            Some(prev) => prev.notification_version != next.notification_version,
            None => true,
        };
        if changed {
            changes.push(ChangeEntry {
                prev,
                next: Some(Arc::clone(next)),
            });
        }
    }

    if let Some(old) = old {
        for prev in old.iter() {
            if new.lookup_by_id(&prev.id).is_none() {
                changes.push(ChangeEntry {
                    prev: Some(Arc::clone(prev)),
                    next: None,
                });
            }
        }
    }

    changes
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

    fn refresher_with(store: FakeMetadataStore) -> Refresher {
        Refresher::new(
            Arc::new(store),
            Arc::new(Notifier::new()),
            200,
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn refresh_once_populates_index_from_all_pages() {
        let store = FakeMetadataStore::new();
        for i in 0..5 {
            store.insert(record(&format!("i{i}"), &format!("ns{i}"), i as i64));
        }
        store.set_notification_version(5);
        let refresher = refresher_with(store);

        refresher.refresh_once().await.unwrap();

        let index = refresher.current().unwrap();
        assert_eq!(index.len(), 5);
        for i in 0..5 {
            assert!(index.lookup_by_id(&format!("i{i}")).is_some());
        }
    }

    #[tokio::test]
    async fn refresh_once_drops_records_at_or_past_the_notification_version_bound() {
        let store = FakeMetadataStore::new();
        store.insert(record("i1", "ns1", 0));
        store.insert(record("i2", "ns2", 1));
        // Simulate a write landing mid-enumeration: this record's version is
        // >= the bound captured at the start of the cycle, so it must be
        // excluded and picked up by the next cycle instead.
        store.insert(record("i3", "ns3", 2));
        store.set_notification_version(2);
        let refresher = refresher_with(store);

        refresher.refresh_once().await.unwrap();

        let index = refresher.current().unwrap();
        assert_eq!(index.len(), 2);
        assert!(index.lookup_by_id("i3").is_none());
    }

    #[tokio::test]
    async fn refresh_once_detects_deletions_against_the_previous_index() {
        let store = FakeMetadataStore::new();
        store.insert(record("i1", "ns1", 0));
        store.insert(record("i2", "ns2", 1));
        store.set_notification_version(2);
        let refresher = refresher_with(store);
        refresher.refresh_once().await.unwrap();
        assert_eq!(refresher.current().unwrap().len(), 2);

        // A second refresher sharing the first's notifier stands in for a
        // second cycle against a store where "i2" was deleted in between;
        // sharing the notifier means it already sees the first's published
        // index without any separate seeding step.
        let store = FakeMetadataStore::new();
        store.insert(record("i1", "ns1", 0));
        store.set_notification_version(2);
        let refresher2 = Refresher::new(
            Arc::new(store),
            Arc::clone(&refresher.notifier),
            200,
            Duration::from_secs(5),
        );
        refresher2.refresh_once().await.unwrap();
        let index = refresher2.current().unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.lookup_by_id("i2").is_none());
    }

    #[tokio::test]
    async fn refresh_once_propagates_store_errors_and_keeps_previous_snapshot() {
        let store = FakeMetadataStore::new();
        store.insert(record("i1", "ns1", 0));
        store.set_notification_version(1);
        let store = Arc::new(store);
        let refresher = Refresher::new(
            Arc::clone(&store),
            Arc::new(Notifier::new()),
            200,
            Duration::from_secs(5),
        );
        refresher.refresh_once().await.unwrap();
        let before = refresher.current().unwrap();
        assert_eq!(before.len(), 1);

        // The next cycle's first store call fails; the previously published
        // index must remain untouched and reachable from GetNamespace.
        store.fail_next_calls(1);
        let result = refresher.refresh_once().await;
        assert!(result.is_err());
        let after = refresher.current().unwrap();
        assert!(Arc::ptr_eq(&before, &after));
        assert!(after.lookup_by_name("ns1").is_some());
    }

    #[tokio::test]
    async fn refresh_once_drains_an_explicit_page_token_sequence() {
        let store = FakeMetadataStore::new();
        store.insert(record("i1", "alpha", 0));
        store.insert(record("i2", "beta", 1));
        store.insert(record("i3", "gamma", 2));
        store.set_notification_version(3);
        // A page size of one forces the store to hand back a token after
        // each page, exercising the multi-page drain loop end to end.
        let refresher = Refresher::new(
            Arc::new(store),
            Arc::new(Notifier::new()),
            1,
            Duration::from_secs(5),
        );

        refresher.refresh_once().await.unwrap();

        let index = refresher.current().unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.lookup_by_name("beta").unwrap().id, "i2");
        assert_eq!(index.lookup_by_id("i3").unwrap().name, "gamma");
    }

    struct HangingStore;

    #[async_trait::async_trait]
    impl MetadataStore for HangingStore {
        async fn get_metadata(&self) -> anyhow::Result<crate::store::StoreMetadata> {
            Ok(crate::store::StoreMetadata {
                notification_version: 1,
            })
        }

        async fn list_namespaces(
            &self,
            _page_size: usize,
            _page_token: Option<String>,
        ) -> anyhow::Result<crate::store::NamespacePage> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn refresh_once_treats_a_timed_out_store_call_as_a_failure() {
        let refresher = Refresher::new(
            Arc::new(HangingStore),
            Arc::new(Notifier::new()),
            200,
            Duration::from_millis(20),
        );
        let result = refresher.refresh_once().await;
        assert!(result.is_err());
        assert!(refresher.current().is_none());
    }

    #[tokio::test]
    async fn compute_changes_emits_only_changed_and_new_entries() {
        let old = Index::build(vec![
            Entry::from_persistent_state(record("i1", "ns1", 0)),
            Entry::from_persistent_state(record("i2", "ns2", 1)),
        ]);
        let new = Index::build(vec![
            Entry::from_persistent_state(record("i1", "ns1", 0)), // unchanged
            Entry::from_persistent_state(record("i2", "ns2", 3)), // updated
            Entry::from_persistent_state(record("i3", "ns3", 4)), // new
        ]);
        let changes = compute_changes(Some(&old), &new);
        let mut changed_ids: Vec<&str> = changes
            .iter()
            .map(|c| c.next.as_ref().unwrap().id.as_str())
            .collect();
        changed_ids.sort_unstable();
        assert_eq!(changed_ids, vec!["i2", "i3"]);
    }
}
