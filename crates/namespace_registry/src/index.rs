//! [`Index`] is the paired name→[`Entry`] and id→`Entry` mapping published
//! by the refresher. Construction happens offline, during a refresh cycle;
//! once built, an `Index` is immutable and is published behind an `Arc` so
//! readers always see a complete, internally-consistent snapshot.

use std::{
    collections::HashMap,
    sync::Arc,
};

use crate::entry::Entry;

/// Immutable, dual-keyed view over the namespace collection at one point in
/// time. `by_name` and `by_id` reference the same `Arc<Entry>` objects —
/// neither is authoritative alone.
#[derive(Debug, Default)]
pub struct Index {
    by_name: HashMap<String, Arc<Entry>>,
    by_id: HashMap<String, Arc<Entry>>,
    max_seen_version: i64,
}

impl Index {
    /// Builds an `Index` from a complete set of entries for one refresh
    /// cycle. Panics in debug builds if `(id, name)` is not a bijection,
    /// which would indicate a bug in the refresher or a metadata-store
    /// invariant violation upstream.
    pub fn build(entries: Vec<Entry>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_id = HashMap::with_capacity(entries.len());
        let mut max_seen_version = 0i64;

        for entry in entries {
            max_seen_version = max_seen_version.max(entry.notification_version);
            let entry = Arc::new(entry);
            debug_assert!(
                !by_id.contains_key(&entry.id),
                "duplicate namespace id in one refresh cycle: {}",
                entry.id
            );
            debug_assert!(
                !by_name.contains_key(&entry.name),
                "duplicate namespace name in one refresh cycle: {}",
                entry.name
            );
            by_name.insert(entry.name.clone(), Arc::clone(&entry));
            by_id.insert(entry.id.clone(), entry);
        }

        Self {
            by_name,
            by_id,
            max_seen_version,
        }
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<Arc<Entry>> {
        self.by_name.get(name).cloned()
    }

    pub fn lookup_by_id(&self, id: &str) -> Option<Arc<Entry>> {
        self.by_id.get(id).cloned()
    }

    pub fn max_seen_version(&self) -> i64 {
        self.max_seen_version
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// All entries with `notification_version` greater than or equal to
    /// `since`, in unspecified order. Used for subscriber catch-up: `since`
    /// is the lowest version the subscriber has not yet seen, so the entry
    /// sitting exactly at that version is included.
    pub fn entries_since(&self, since: i64) -> Vec<Arc<Entry>> {
        self.by_id
            .values()
            .filter(|entry| entry.notification_version >= since)
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Entry>> {
        self.by_id.values()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::entry::{
        NamespaceConfig,
        NamespaceInfo,
        ReplicationConfig,
    };

    fn entry(id: &str, name: &str, version: i64) -> Entry {
        Entry {
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

    #[test]
    fn by_id_and_by_name_agree() {
        let index = Index::build(vec![entry("i1", "alpha", 0), entry("i2", "beta", 1)]);
        for id in ["i1", "i2"] {
            let by_id = index.lookup_by_id(id).unwrap();
            let by_name = index.lookup_by_name(&by_id.name).unwrap();
            assert!(Arc::ptr_eq(&by_id, &by_name));
        }
    }

    #[test]
    fn max_seen_version_is_the_maximum_notification_version() {
        let index = Index::build(vec![entry("i1", "alpha", 5), entry("i2", "beta", 2)]);
        assert_eq!(index.max_seen_version(), 5);
    }

    #[test]
    fn entries_since_includes_the_boundary_version() {
        let index = Index::build(vec![
            entry("i1", "alpha", 0),
            entry("i2", "beta", 1),
            entry("i3", "gamma", 2),
        ]);
        let mut versions: Vec<i64> = index
            .entries_since(0)
            .into_iter()
            .map(|e| e.notification_version)
            .collect();
        versions.sort_unstable();
        assert_eq!(versions, vec![0, 1, 2]);
    }

    #[test]
    fn entries_since_excludes_versions_below_the_cutoff() {
        let index = Index::build(vec![
            entry("i1", "alpha", 0),
            entry("i2", "beta", 1),
            entry("i3", "gamma", 2),
        ]);
        let mut versions: Vec<i64> = index
            .entries_since(1)
            .into_iter()
            .map(|e| e.notification_version)
            .collect();
        versions.sort_unstable();
        assert_eq!(versions, vec![1, 2]);
    }

    #[test]
    fn empty_index_has_zero_max_seen_version() {
        let index = Index::build(vec![]);
        assert_eq!(index.max_seen_version(), 0);
        assert!(index.is_empty());
    }
}
