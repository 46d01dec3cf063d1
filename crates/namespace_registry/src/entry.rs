//! [`Entry`] is the immutable, per-namespace value record the rest of the
//! crate indexes, diffs, and hands to subscribers. It is built once per
//! refresh cycle by [`Entry::from_persistent_state`] and never mutated after
//! that; every derived query below is a pure function of the `Entry` and its
//! arguments.

use std::{
    collections::{
        hash_map::DefaultHasher,
        HashMap,
    },
    hash::{
        Hash,
        Hasher,
    },
    time::Duration,
};

use tracing::warn;

use crate::metrics;

/// Well-known `info.data` key carrying the extended retention, in days, for
/// sampled workflows.
pub const SAMPLE_RETENTION_DAYS_KEY: &str = "sample-retention-days";
/// Well-known `info.data` key carrying the sampling rate in `[0, 1]`.
pub const SAMPLE_RETENTION_RATE_KEY: &str = "sample-retention-rate";

/// Free-form namespace metadata: description, owner, and an arbitrary
/// string-to-string bag used for feature flags like retention sampling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamespaceInfo {
    pub description: String,
    pub owner_email: String,
    pub data: HashMap<String, String>,
}

/// Per-namespace configuration: base retention and an optional deny-list of
/// known-bad worker binary checksums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceConfig {
    pub retention: Duration,
    pub bad_binaries: Option<HashMap<String, String>>,
}

/// Replication topology: the single active cluster plus the full
/// participant set. Cluster ordering within `clusters` carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicationConfig {
    pub active_cluster: String,
    pub clusters: Vec<String>,
}

/// The wire-ish shape returned by the metadata store's `ListNamespaces`.
/// This is the only type the [`crate::store::MetadataStore`] collaborator
/// needs to produce; everything downstream works with [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistentRecord {
    pub id: String,
    pub name: String,
    pub info: NamespaceInfo,
    pub config: NamespaceConfig,
    pub replication: ReplicationConfig,
    pub config_version: i64,
    pub failover_version: i64,
    pub failover_notification_version: i64,
    pub notification_version: i64,
    pub is_global: bool,
}

/// Immutable snapshot of one namespace. See the module docs for the
/// construct-once, never-mutate lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub info: NamespaceInfo,
    pub config: NamespaceConfig,
    pub replication: ReplicationConfig,
    pub config_version: i64,
    pub failover_version: i64,
    pub failover_notification_version: i64,
    pub notification_version: i64,
    pub is_global: bool,
}

/// Options accepted by [`Entry::clone_with`], mirroring the host platform's
/// `With*` option convention for structural copies.
#[derive(Default)]
pub struct CloneOptions {
    pub active_cluster: Option<String>,
    pub is_global: Option<bool>,
    pub config_version: Option<i64>,
    pub failover_version: Option<i64>,
    pub notification_version: Option<i64>,
    pub data: Option<HashMap<String, String>>,
}

impl CloneOptions {
    pub fn with_active_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.active_cluster = Some(cluster.into());
        self
    }

    pub fn with_global_flag(mut self, is_global: bool) -> Self {
        self.is_global = Some(is_global);
        self
    }

    pub fn with_config_version(mut self, version: i64) -> Self {
        self.config_version = Some(version);
        self
    }

    pub fn with_failover_version(mut self, version: i64) -> Self {
        self.failover_version = Some(version);
        self
    }

    pub fn with_notification_version(mut self, version: i64) -> Self {
        self.notification_version = Some(version);
        self
    }

    pub fn with_data(mut self, data: HashMap<String, String>) -> Self {
        self.data = Some(data);
        self
    }
}

impl Entry {
    /// Pure projection from the store's wire shape to our immutable value
    /// type. Never fails: malformed `data` keys are only interpreted lazily,
    /// by [`Entry::retention`], not at construction time.
    pub fn from_persistent_state(record: PersistentRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            info: record.info,
            config: record.config,
            replication: record.replication,
            config_version: record.config_version,
            failover_version: record.failover_version,
            failover_notification_version: record.failover_notification_version,
            notification_version: record.notification_version,
            is_global: record.is_global,
        }
    }

    /// Structural copy with `options` applied. The receiver is untouched.
    pub fn clone_with(&self, options: CloneOptions) -> Self {
        let mut next = self.clone();
        if let Some(active_cluster) = options.active_cluster {
            next.replication.active_cluster = active_cluster;
        }
        if let Some(is_global) = options.is_global {
            next.is_global = is_global;
        }
        if let Some(config_version) = options.config_version {
            next.config_version = config_version;
        }
        if let Some(failover_version) = options.failover_version {
            next.failover_version = failover_version;
        }
        if let Some(notification_version) = options.notification_version {
            next.notification_version = notification_version;
        }
        if let Some(data) = options.data {
            next.info.data = data;
        }
        next
    }

    /// True iff `clusterName` is where this namespace currently runs.
    ///
    /// Non-global namespaces are local to every cluster they exist on, so
    /// this always returns `true` for them regardless of `cluster_name` —
    /// preserved intentionally, see DESIGN.md.
    pub fn active_in_cluster(&self, cluster_name: &str) -> bool {
        if !self.is_global {
            return true;
        }
        self.replication.active_cluster == cluster_name
    }

    fn sampling_config(&self) -> Option<(u64, f64)> {
        let days_str = self.info.data.get(SAMPLE_RETENTION_DAYS_KEY)?;
        let rate_str = self.info.data.get(SAMPLE_RETENTION_RATE_KEY)?;
        let days = match days_str.parse::<u64>() {
            Ok(days) => days,
            Err(_) => {
                warn!(namespace = %self.name, value = %days_str, "malformed sample-retention-days, falling back to base retention");
                metrics::log_config_parse_fallback();
                return None;
            },
        };
        let rate = match rate_str.parse::<f64>() {
            Ok(rate) if (0.0..=1.0).contains(&rate) => rate,
            _ => {
                warn!(namespace = %self.name, value = %rate_str, "malformed sample-retention-rate, falling back to base retention");
                metrics::log_config_parse_fallback();
                return None;
            },
        };
        Some((days, rate))
    }

    /// True iff both `sample-retention-days` and `sample-retention-rate`
    /// are present in `info.data` and parse successfully, regardless of the
    /// rate's value.
    pub fn is_sampled_for_longer_retention_enabled(&self) -> bool {
        self.sampling_config().is_some()
    }

    /// True iff sampling is enabled and `workflow_id`'s deterministic hash
    /// falls within the sampling rate.
    pub fn is_sampled_for_longer_retention(&self, workflow_id: &str) -> bool {
        match self.sampling_config() {
            Some((_, rate)) => unit_hash(workflow_id) < rate,
            None => false,
        }
    }

    /// The effective retention for `workflow_id`: the sampled retention if
    /// sampling is enabled and this id falls within the rate, otherwise the
    /// namespace's base retention. Malformed sampling keys silently fall
    /// back to base retention; they never fail the call.
    pub fn retention(&self, workflow_id: &str) -> Duration {
        match self.sampling_config() {
            Some((days, rate)) if unit_hash(workflow_id) < rate => {
                Duration::from_secs(days * 24 * 60 * 60)
            },
            _ => self.config.retention,
        }
    }
}

/// Deterministic digest of `s`, uniform on `[0, 1)`.
///
/// Pinned to [`DefaultHasher`] over the UTF-8 bytes, taking the upper 53
/// bits of the 64-bit digest divided by `2^53` — the same stable-within-a-
/// build hashing primitive the host platform's retention-partitioning logic
/// uses for analogous bucketing (see `database::retention::partition_chunk`).
/// The exact digest is not load-bearing for correctness, but callers and
/// tests rely on it being deterministic across calls within a build.
fn unit_hash(s: &str) -> f64 {
    let mut hasher = DefaultHasher::new();
    s.hash(&mut hasher);
    let digest = hasher.finish();
    ((digest >> 11) as f64) / (1u64 << 53) as f64
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn base_entry() -> Entry {
        Entry {
            id: "ns-id-1".to_string(),
            name: "alpha".to_string(),
            info: NamespaceInfo {
                description: "test namespace".to_string(),
                owner_email: "owner@example.com".to_string(),
                data: HashMap::new(),
            },
            config: NamespaceConfig {
                retention: Duration::from_secs(7 * 24 * 60 * 60),
                bad_binaries: None,
            },
            replication: ReplicationConfig {
                active_cluster: "foo".to_string(),
                clusters: vec!["foo".to_string()],
            },
            config_version: 0,
            failover_version: 0,
            failover_notification_version: 0,
            notification_version: 0,
            is_global: false,
        }
    }

    #[test]
    fn active_in_cluster_is_always_true_for_non_global() {
        let entry = base_entry();
        assert!(!entry.is_global);
        assert!(entry.active_in_cluster("foo"));
        assert!(entry.active_in_cluster("bar"));
    }

    #[test]
    fn active_in_cluster_checks_active_cluster_for_global() {
        let entry = base_entry().clone_with(CloneOptions::default().with_global_flag(true));
        assert!(entry.active_in_cluster("foo"));
        assert!(!entry.active_in_cluster("bar"));
    }

    #[test]
    fn retention_without_sampling_keys_is_base_retention() {
        let entry = base_entry();
        assert_eq!(
            entry.retention("any-workflow-id"),
            Duration::from_secs(7 * 24 * 60 * 60)
        );
        assert!(!entry.is_sampled_for_longer_retention_enabled());
    }

    #[test]
    fn retention_rate_zero_is_always_base() {
        let mut data = HashMap::new();
        data.insert(SAMPLE_RETENTION_DAYS_KEY.to_string(), "30".to_string());
        data.insert(SAMPLE_RETENTION_RATE_KEY.to_string(), "0".to_string());
        let entry = base_entry().clone_with(CloneOptions::default().with_data(data));
        for wid in ["a", "b", "some-long-workflow-id-value"] {
            assert_eq!(entry.retention(wid), Duration::from_secs(7 * 24 * 60 * 60));
        }
    }

    #[test]
    fn retention_rate_one_is_always_sampled() {
        let mut data = HashMap::new();
        data.insert(SAMPLE_RETENTION_DAYS_KEY.to_string(), "30".to_string());
        data.insert(SAMPLE_RETENTION_RATE_KEY.to_string(), "1".to_string());
        let entry = base_entry().clone_with(CloneOptions::default().with_data(data));
        for wid in ["a", "b", "some-long-workflow-id-value"] {
            assert_eq!(
                entry.retention(wid),
                Duration::from_secs(30 * 24 * 60 * 60)
            );
        }
    }

    #[test]
    fn retention_sampling_is_deterministic_across_calls() {
        let workflow_id = "3aef42a8-db0a-4a3b-b8b7-9829d74b4ebf";
        let mut data = HashMap::new();
        data.insert(SAMPLE_RETENTION_DAYS_KEY.to_string(), "30".to_string());
        data.insert(SAMPLE_RETENTION_RATE_KEY.to_string(), "0.5".to_string());
        let entry = base_entry().clone_with(CloneOptions::default().with_data(data));
        let first = entry.retention(workflow_id);
        let second = entry.retention(workflow_id);
        assert_eq!(first, second);
        assert_eq!(
            entry.is_sampled_for_longer_retention(workflow_id),
            entry.is_sampled_for_longer_retention(workflow_id)
        );
    }

    #[test]
    fn sampling_decision_is_monotonic_in_rate() {
        let workflow_id = "3aef42a8-db0a-4a3b-b8b7-9829d74b4ebf";

        let mut low_rate_data = HashMap::new();
        low_rate_data.insert(SAMPLE_RETENTION_DAYS_KEY.to_string(), "30".to_string());
        low_rate_data.insert(SAMPLE_RETENTION_RATE_KEY.to_string(), "0.8".to_string());
        let at_low_rate = base_entry().clone_with(CloneOptions::default().with_data(low_rate_data));

        let mut high_rate_data = HashMap::new();
        high_rate_data.insert(SAMPLE_RETENTION_DAYS_KEY.to_string(), "30".to_string());
        high_rate_data.insert(SAMPLE_RETENTION_RATE_KEY.to_string(), "0.9".to_string());
        let at_high_rate =
            base_entry().clone_with(CloneOptions::default().with_data(high_rate_data));

        if at_low_rate.is_sampled_for_longer_retention(workflow_id) {
            assert!(at_high_rate.is_sampled_for_longer_retention(workflow_id));
        }
    }

    #[test]
    fn malformed_sampling_keys_fall_back_to_base_retention() {
        let mut data = HashMap::new();
        data.insert(SAMPLE_RETENTION_DAYS_KEY.to_string(), "not-a-number".to_string());
        data.insert(SAMPLE_RETENTION_RATE_KEY.to_string(), "0.5".to_string());
        let entry = base_entry().clone_with(CloneOptions::default().with_data(data));
        assert!(!entry.is_sampled_for_longer_retention_enabled());
        assert_eq!(
            entry.retention("any-workflow-id"),
            Duration::from_secs(7 * 24 * 60 * 60)
        );

        let mut data = HashMap::new();
        data.insert(SAMPLE_RETENTION_DAYS_KEY.to_string(), "30".to_string());
        data.insert(SAMPLE_RETENTION_RATE_KEY.to_string(), "1.5".to_string());
        let entry = base_entry().clone_with(CloneOptions::default().with_data(data));
        assert!(!entry.is_sampled_for_longer_retention_enabled());
    }

    #[test]
    fn clone_with_does_not_mutate_source() {
        let entry = base_entry();
        let clone = entry.clone_with(CloneOptions::default().with_active_cluster("bar"));
        assert_eq!(entry.replication.active_cluster, "foo");
        assert_eq!(clone.replication.active_cluster, "bar");
    }
}
