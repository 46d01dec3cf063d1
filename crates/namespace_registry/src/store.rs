//! Abstract collaborator for the persistent metadata store. Production
//! implementations live outside this crate; the test module below ships a
//! [`FakeMetadataStore`] used throughout the crate's own test suite.

use async_trait::async_trait;

use crate::entry::PersistentRecord;

/// Result of `GetMetadata`: the store's current global notification version,
/// used by the refresher as the upper bound for one drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreMetadata {
    pub notification_version: i64,
}

/// One page of `ListNamespaces`. `next_page_token` is `None` on the last
/// page; tokens are opaque and store-supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespacePage {
    pub namespaces: Vec<PersistentRecord>,
    pub next_page_token: Option<String>,
}

/// The persistent source of truth the refresher drains on each cycle.
#[async_trait]
pub trait MetadataStore: Send + Sync + 'static {
    async fn get_metadata(&self) -> anyhow::Result<StoreMetadata>;

    async fn list_namespaces(
        &self,
        page_size: usize,
        page_token: Option<String>,
    ) -> anyhow::Result<NamespacePage>;
}

#[cfg(any(test, feature = "testing"))]
pub mod testing {
    use std::sync::atomic::{
        AtomicUsize,
        Ordering,
    };

    use parking_lot::Mutex;

    use super::*;

    /// In-memory [`MetadataStore`] used by this crate's own tests. Records
    /// are served back paginated in insertion order; `fail_next_calls` lets
    /// tests inject store failures to exercise the refresher's failure
    /// path without a real backing service.
    pub struct FakeMetadataStore {
        records: Mutex<Vec<PersistentRecord>>,
        notification_version: Mutex<i64>,
        fail_next_calls: AtomicUsize,
    }

    impl FakeMetadataStore {
        pub fn new() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                notification_version: Mutex::new(0),
                fail_next_calls: AtomicUsize::new(0),
            }
        }

        /// Appends `record` and bumps the store's notification version to
        /// `record.notification_version` if it is larger.
        pub fn insert(&self, record: PersistentRecord) {
            let mut version = self.notification_version.lock();
            *version = (*version).max(record.notification_version);
            self.records.lock().push(record);
        }

        pub fn set_notification_version(&self, version: i64) {
            *self.notification_version.lock() = version;
        }

        /// Removes the record with `id`, simulating a namespace deletion at
        /// the store layer. Does not itself bump the notification version;
        /// call [`Self::set_notification_version`] to make the deletion
        /// visible to the next refresh cycle.
        pub fn remove(&self, id: &str) {
            self.records.lock().retain(|record| record.id != id);
        }

        /// The next `n` calls to either store method return an error.
        pub fn fail_next_calls(&self, n: usize) {
            self.fail_next_calls.store(n, Ordering::SeqCst);
        }

        fn maybe_fail(&self) -> anyhow::Result<()> {
            let remaining = self.fail_next_calls.load(Ordering::SeqCst);
            if remaining > 0 {
                self.fail_next_calls.store(remaining - 1, Ordering::SeqCst);
                anyhow::bail!("injected metadata store failure");
            }
            Ok(())
        }
    }

    impl Default for FakeMetadataStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl MetadataStore for FakeMetadataStore {
        async fn get_metadata(&self) -> anyhow::Result<StoreMetadata> {
            self.maybe_fail()?;
            Ok(StoreMetadata {
                notification_version: *self.notification_version.lock(),
            })
        }

        async fn list_namespaces(
            &self,
            page_size: usize,
            page_token: Option<String>,
        ) -> anyhow::Result<NamespacePage> {
            self.maybe_fail()?;
            let records = self.records.lock();
            let start: usize = match page_token {
                Some(token) => token.parse().unwrap_or(0),
                None => 0,
            };
            let end = (start + page_size).min(records.len());
            let namespaces = records[start..end].to_vec();
            let next_page_token = if end < records.len() {
                Some(end.to_string())
            } else {
                None
            };
            Ok(NamespacePage {
                namespaces,
                next_page_token,
            })
        }
    }
}
