use ::metrics::{
    log_counter,
    log_distribution,
    register_convex_counter,
    register_convex_histogram,
    Timer,
};
use prometheus::VMHistogram;

register_convex_counter!(
    NAMESPACE_CACHE_REFRESH_CYCLES_TOTAL,
    "Number of namespace cache refresh cycles that completed successfully"
);
pub fn log_refresh_cycle() {
    log_counter(&NAMESPACE_CACHE_REFRESH_CYCLES_TOTAL, 1);
}

register_convex_counter!(
    NAMESPACE_CACHE_REFRESH_FAILURES_TOTAL,
    "Number of namespace cache refresh cycles that failed and were retried"
);
pub fn log_refresh_failure() {
    log_counter(&NAMESPACE_CACHE_REFRESH_FAILURES_TOTAL, 1);
}

register_convex_histogram!(
    NAMESPACE_CACHE_REFRESH_DURATION_SECONDS,
    "Wall time of one namespace cache refresh cycle"
);
pub fn refresh_timer() -> Timer<VMHistogram> {
    Timer::new(&NAMESPACE_CACHE_REFRESH_DURATION_SECONDS)
}

register_convex_histogram!(
    NAMESPACE_CACHE_NAMESPACES_INDEXED_TOTAL,
    "Number of namespaces in the most recently published index"
);
pub fn log_namespaces_indexed(count: usize) {
    log_distribution(&NAMESPACE_CACHE_NAMESPACES_INDEXED_TOTAL, count as f64);
}

register_convex_counter!(
    NAMESPACE_CACHE_CHANGE_NOTIFICATIONS_DISPATCHED_TOTAL,
    "Number of (prev, next) change pairs delivered to subscribers"
);
pub fn log_change_notifications_dispatched(count: usize) {
    log_counter(
        &NAMESPACE_CACHE_CHANGE_NOTIFICATIONS_DISPATCHED_TOTAL,
        count as u64,
    );
}

register_convex_counter!(
    NAMESPACE_CACHE_CONFIG_PARSE_FALLBACK_TOTAL,
    "Number of times retention sampling fell back to base retention due to \
     malformed `data` keys"
);
pub fn log_config_parse_fallback() {
    log_counter(&NAMESPACE_CACHE_CONFIG_PARSE_FALLBACK_TOTAL, 1);
}
