//! Tunable limits and parameters for the namespace cache.
//!
//! Every knob here can be overridden locally with an environment variable,
//! following the host platform's convention: a knob's documented default
//! is used unless the matching `NAMESPACE_CACHE_*` variable is set and
//! parses.

use std::{
    sync::LazyLock,
    time::Duration,
};

use cmd_util::env::env_config;

/// How often the background refresher polls the metadata store.
pub static REFRESH_INTERVAL: LazyLock<Duration> = LazyLock::new(|| {
    Duration::from_secs(env_config(
        "NAMESPACE_CACHE_REFRESH_INTERVAL_SECONDS",
        10u64,
    ))
});

/// Page size used when draining `ListNamespaces`.
pub static PAGE_SIZE: LazyLock<usize> =
    LazyLock::new(|| env_config("NAMESPACE_CACHE_PAGE_SIZE", 200usize));

/// Per-call deadline for metadata store RPCs.
pub static STORE_CALL_TIMEOUT: LazyLock<Duration> = LazyLock::new(|| {
    Duration::from_secs(env_config(
        "NAMESPACE_CACHE_STORE_CALL_TIMEOUT_SECONDS",
        30u64,
    ))
});

/// Whether `start()` blocks on the initial refresh before returning.
pub static ENABLE_PREFETCH_ON_START: LazyLock<bool> = LazyLock::new(|| {
    env_config("NAMESPACE_CACHE_ENABLE_PREFETCH_ON_START", true)
});
