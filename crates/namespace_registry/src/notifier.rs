//! Ordered, versioned change dispatch. The [`Notifier`] owns both the
//! subscription set and the published [`Index`] snapshot behind the same
//! mutex: register, unregister, and publish-and-dispatch all serialize
//! through it, so a newly-registered subscriber either sees a full catch-up
//! snapshot of the index as it stood at registration or is guaranteed to
//! receive the very next dispatch — never a gap between the two. Plain
//! reads of the published index ([`Notifier::current`]) go through a
//! separate `RwLock` and never contend with subscribers.

use std::{
    collections::BTreeMap,
    sync::Arc,
};

use parking_lot::{
    Mutex,
    RwLock,
};
use tracing::debug;

use crate::{
    entry::Entry,
    index::Index,
    metrics,
};

/// One (prev, next) change pair. `prev` is `None` for newly-created or
/// catch-up-synthesized entries; `next` is `None` for deletions.
#[derive(Clone)]
pub struct ChangeEntry {
    pub prev: Option<Arc<Entry>>,
    pub next: Option<Arc<Entry>>,
}

impl ChangeEntry {
    /// The sort key: the new entry's version, or the old one's for a
    /// deletion.
    fn notification_version(&self) -> i64 {
        match (&self.next, &self.prev) {
            (Some(next), _) => next.notification_version,
            (None, Some(prev)) => prev.notification_version,
            (None, None) => unreachable!("a ChangeEntry must carry a prev or a next"),
        }
    }

    fn id(&self) -> &str {
        match (&self.next, &self.prev) {
            (Some(next), _) => &next.id,
            (None, Some(prev)) => &prev.id,
            (None, None) => unreachable!("a ChangeEntry must carry a prev or a next"),
        }
    }
}

/// Sorts `changes` the way the refresher's protocol requires: entries with
/// a `next` (creations and updates) ascending by the new notification
/// version, ties broken by id; deletions (`next = None`) appended at the
/// tail, ascending by the old notification version.
pub fn sort_changes(changes: &mut [ChangeEntry]) {
    changes.sort_by(|a, b| {
        let a_deleted = a.next.is_none();
        let b_deleted = b.next.is_none();
        a_deleted
            .cmp(&b_deleted)
            .then_with(|| a.notification_version().cmp(&b.notification_version()))
            .then_with(|| a.id().cmp(b.id()))
    });
}

type PrepareFn = Box<dyn Fn() + Send + 'static>;
type ApplyFn = Box<dyn Fn(&[ChangeEntry]) + Send + 'static>;

struct SubscriptionState {
    last_acked_version: i64,
    prepare_fn: PrepareFn,
    apply_fn: ApplyFn,
}

/// Subscription registry, ordered dispatcher, and published-index holder.
#[derive(Default)]
pub struct Notifier {
    subscriptions: Mutex<BTreeMap<String, SubscriptionState>>,
    published: RwLock<Option<Arc<Index>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently published index, or `None` before the first
    /// successful refresh. Lock-minimal: does not contend with register,
    /// unregister, or publish_and_dispatch.
    pub fn current(&self) -> Option<Arc<Index>> {
        self.published.read().clone()
    }

    /// Registers `shard_id` against the index as it stands at the moment
    /// this call takes the subscription lock — not a snapshot read earlier
    /// by the caller, so a registration can never straddle a concurrent
    /// [`Self::publish_and_dispatch`]. If `initial_version` is behind the
    /// index's contents, the subscriber is caught up immediately and
    /// synchronously, before this call returns.
    pub fn register(
        &self,
        shard_id: impl Into<String>,
        initial_version: i64,
        prepare_fn: impl Fn() + Send + 'static,
        apply_fn: impl Fn(&[ChangeEntry]) + Send + 'static,
    ) {
        let shard_id = shard_id.into();
        let mut subscriptions = self.subscriptions.lock();
        let published = self.published.read();
        let empty = Index::default();
        let current_index = published.as_deref().unwrap_or(&empty);

        let mut catch_up: Vec<ChangeEntry> = current_index
            .entries_since(initial_version)
            .into_iter()
            .map(|entry| ChangeEntry {
                prev: None,
                next: Some(entry),
            })
            .collect();
        sort_changes(&mut catch_up);
        drop(published);

        let last_acked_version = match catch_up.iter().map(ChangeEntry::notification_version).max() {
            Some(max_version) => {
                prepare_fn();
                apply_fn(&catch_up);
                metrics::log_change_notifications_dispatched(catch_up.len());
                max_version
            },
            None => initial_version,
        };

        subscriptions.insert(
            shard_id,
            SubscriptionState {
                last_acked_version,
                prepare_fn: Box::new(prepare_fn),
                apply_fn: Box::new(apply_fn),
            },
        );
    }

    pub fn unregister(&self, shard_id: &str) {
        self.subscriptions.lock().remove(shard_id);
    }

    /// Publishes `new_index` and delivers `changes` (already sorted by
    /// [`sort_changes`]) to every subscription not already caught up, both
    /// under the same subscription lock [`Self::register`] takes — so a
    /// registration racing a refresh either observes `new_index` already
    /// published (and catches up to it directly) or is inserted before
    /// this dispatch runs (and receives it normally). Returns the number
    /// of (subscription, change) deliveries, for metrics.
    pub fn publish_and_dispatch(&self, new_index: Arc<Index>, changes: &[ChangeEntry]) -> usize {
        let mut subscriptions = self.subscriptions.lock();
        *self.published.write() = Some(new_index);
        self.dispatch_locked(&mut subscriptions, changes)
    }

    /// Delivers `changes` (already sorted by [`sort_changes`]) to every
    /// subscription not already caught up, without touching the published
    /// index. Returns the number of (subscription, change) deliveries, for
    /// metrics.
    pub fn dispatch(&self, changes: &[ChangeEntry]) -> usize {
        let mut subscriptions = self.subscriptions.lock();
        self.dispatch_locked(&mut subscriptions, changes)
    }

    fn dispatch_locked(
        &self,
        subscriptions: &mut BTreeMap<String, SubscriptionState>,
        changes: &[ChangeEntry],
    ) -> usize {
        if changes.is_empty() {
            return 0;
        }
        let batch_max_version = changes
            .iter()
            .map(ChangeEntry::notification_version)
            .max()
            .expect("checked non-empty above");

        debug!(
            change_count = changes.len(),
            subscriber_count = subscriptions.len(),
            "dispatching change batch to subscribers"
        );
        let mut delivered = 0usize;
        for state in subscriptions.values_mut() {
            if state.last_acked_version >= batch_max_version {
                continue;
            }
            let filtered: Vec<ChangeEntry> = changes
                .iter()
                .filter(|change| change.notification_version() > state.last_acked_version)
                .cloned()
                .collect();
            if filtered.is_empty() {
                continue;
            }
            let max_delivered_version = filtered
                .iter()
                .map(ChangeEntry::notification_version)
                .max()
                .expect("checked non-empty above");

            (state.prepare_fn)();
            (state.apply_fn)(&filtered);
            delivered += filtered.len();
            state.last_acked_version = max_delivered_version;
        }
        metrics::log_change_notifications_dispatched(delivered);
        delivered
    }

    #[cfg(test)]
    fn last_acked_version(&self, shard_id: &str) -> Option<i64> {
        self.subscriptions
            .lock()
            .get(shard_id)
            .map(|s| s.last_acked_version)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.subscriptions.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{
            AtomicUsize,
            Ordering,
        },
        time::Duration,
    };

    use super::*;
    use crate::entry::{
        NamespaceConfig,
        NamespaceInfo,
        ReplicationConfig,
    };

    fn entry(id: &str, name: &str, version: i64) -> Arc<Entry> {
        Arc::new(Entry {
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
        })
    }

    #[test]
    fn register_with_zero_catches_up_every_entry_ascending() {
        let index = Index::build(vec![
            (*entry("i1", "alpha", 0)).clone(),
            (*entry("i2", "beta", 1)).clone(),
            (*entry("i3", "gamma", 2)).clone(),
        ]);
        let notifier = Notifier::new();
        *notifier.published.write() = Some(Arc::new(index));

        let prepare_calls = Arc::new(AtomicUsize::new(0));
        let delivered: Arc<Mutex<Vec<(Option<String>, i64)>>> = Arc::new(Mutex::new(Vec::new()));

        let prepare_calls_clone = Arc::clone(&prepare_calls);
        let delivered_clone = Arc::clone(&delivered);
        notifier.register(
            "shard-1",
            0,
            move || {
                prepare_calls_clone.fetch_add(1, Ordering::SeqCst);
            },
            move |changes| {
                let mut delivered = delivered_clone.lock();
                for change in changes {
                    assert!(change.prev.is_none());
                    let next = change.next.as_ref().unwrap();
                    delivered.push((Some(next.id.clone()), next.notification_version));
                }
            },
        );

        assert_eq!(prepare_calls.load(Ordering::SeqCst), 1);
        let delivered = delivered.lock();
        let versions: Vec<i64> = delivered.iter().map(|(_, v)| *v).collect();
        assert_eq!(versions, vec![0, 1, 2]);
        assert_eq!(notifier.last_acked_version("shard-1"), Some(2));
    }

    #[test]
    fn register_past_current_max_does_not_trigger_catch_up() {
        let index = Index::build(vec![(*entry("i1", "alpha", 0)).clone()]);
        let notifier = Notifier::new();
        *notifier.published.write() = Some(Arc::new(index));
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        notifier.register(
            "shard-1",
            5,
            || {},
            move |_| {
                calls_clone.fetch_add(1, Ordering::SeqCst);
            },
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(notifier.last_acked_version("shard-1"), Some(5));
    }

    #[test]
    fn dispatch_delivers_in_ascending_order_and_advances_acked_version() {
        let notifier = Notifier::new();
        let delivered: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));
        let delivered_clone = Arc::clone(&delivered);
        notifier.register("shard-1", 0, || {}, move |changes| {
            for change in changes {
                delivered_clone
                    .lock()
                    .push(change.next.as_ref().unwrap().notification_version);
            }
        });

        let e2 = entry("i2", "beta", 2);
        let e1 = entry("i1", "alpha", 3);
        let mut changes = vec![
            ChangeEntry {
                prev: Some(entry("i1", "alpha", 1)),
                next: Some(e1),
            },
            ChangeEntry {
                prev: Some(entry("i2", "beta", 0)),
                next: Some(e2),
            },
        ];
        sort_changes(&mut changes);

        let count = notifier.dispatch(&changes);
        assert_eq!(count, 2);
        assert_eq!(*delivered.lock(), vec![2, 3]);
        assert_eq!(notifier.last_acked_version("shard-1"), Some(3));
    }

    #[test]
    fn dispatch_skips_subscriptions_already_caught_up() {
        let notifier = Notifier::new();
        notifier.register("shard-1", 10, || {}, |_| {
            panic!("should not be invoked: subscriber already past this batch");
        });

        let changes = vec![ChangeEntry {
            prev: None,
            next: Some(entry("i1", "alpha", 3)),
        }];
        let count = notifier.dispatch(&changes);
        assert_eq!(count, 0);
        assert_eq!(notifier.last_acked_version("shard-1"), Some(10));
    }

    #[test]
    fn unregister_then_dispatch_does_not_invoke_callback() {
        let notifier = Notifier::new();
        notifier.register("shard-1", 0, || {}, |_| {
            panic!("should not be invoked after unregister");
        });
        notifier.unregister("shard-1");
        assert_eq!(notifier.len(), 0);

        let changes = vec![ChangeEntry {
            prev: None,
            next: Some(entry("i1", "alpha", 1)),
        }];
        let count = notifier.dispatch(&changes);
        assert_eq!(count, 0);
    }

    #[test]
    fn register_after_publish_and_dispatch_catches_up_to_the_published_snapshot() {
        let notifier = Notifier::new();
        let index = Index::build(vec![(*entry("i1", "alpha", 0)).clone()]);
        let changes = vec![ChangeEntry {
            prev: None,
            next: Some(entry("i1", "alpha", 0)),
        }];
        notifier.publish_and_dispatch(Arc::new(index), &changes);

        // A registration arriving after publish_and_dispatch must see the
        // snapshot it just published, not a stale one the caller read
        // earlier — there is no separate lock for it to race against.
        let delivered: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));
        let delivered_clone = Arc::clone(&delivered);
        notifier.register("shard-1", 0, || {}, move |changes| {
            for change in changes {
                delivered_clone
                    .lock()
                    .push(change.next.as_ref().unwrap().notification_version);
            }
        });

        assert_eq!(*delivered.lock(), vec![0]);
        assert_eq!(notifier.last_acked_version("shard-1"), Some(0));
    }

    #[test]
    fn publish_and_dispatch_does_not_redeliver_to_a_subscriber_already_caught_up_by_register() {
        let notifier = Notifier::new();
        let index = Index::build(vec![(*entry("i1", "alpha", 0)).clone()]);
        notifier.publish_and_dispatch(Arc::new(index), &[]);

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        notifier.register("shard-1", 0, || {}, move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.last_acked_version("shard-1"), Some(0));

        // The next refresh re-publishes the same unchanged entry; dispatch
        // must see the subscriber is already at that version and skip it.
        let changes = vec![ChangeEntry {
            prev: Some(entry("i1", "alpha", 0)),
            next: Some(entry("i1", "alpha", 0)),
        }];
        let delivered = notifier.dispatch(&changes);
        assert_eq!(delivered, 0);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn sort_changes_places_deletions_at_the_tail() {
        let mut changes = vec![
            ChangeEntry {
                prev: Some(entry("i1", "alpha", 0)),
                next: None,
            },
            ChangeEntry {
                prev: None,
                next: Some(entry("i2", "beta", 5)),
            },
        ];
        sort_changes(&mut changes);
        assert!(changes[0].next.is_some());
        assert!(changes[1].next.is_none());
    }
}
