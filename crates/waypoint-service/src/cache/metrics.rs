//! Cache observability counters.
//!
//! Hit, miss, and invalidation events are recorded as counters tagged by
//! collection rather than printed, so they can be scraped alongside the
//! rest of the process metrics.

use metrics::{counter, describe_counter};

/// Metric names for the caching layer.
pub mod names {
    /// Total cache hits.
    pub const CACHE_HITS_TOTAL: &str = "waypoint_cache_hits_total";
    /// Total cache misses (including degraded reads).
    pub const CACHE_MISSES_TOTAL: &str = "waypoint_cache_misses_total";
    /// Total cache invalidations performed by the write paths.
    pub const CACHE_INVALIDATIONS_TOTAL: &str = "waypoint_cache_invalidations_total";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(names::CACHE_HITS_TOTAL, "Total number of cache hits");
    describe_counter!(
        names::CACHE_MISSES_TOTAL,
        "Total number of cache misses, including reads degraded by cache errors"
    );
    describe_counter!(
        names::CACHE_INVALIDATIONS_TOTAL,
        "Total number of cache invalidations performed by write paths"
    );
}

/// Records a cache hit for a collection.
pub fn record_hit(collection: &'static str) {
    counter!(names::CACHE_HITS_TOTAL, "collection" => collection).increment(1);
}

/// Records a cache miss for a collection.
pub fn record_miss(collection: &'static str) {
    counter!(names::CACHE_MISSES_TOTAL, "collection" => collection).increment(1);
}

/// Records a cache invalidation for a collection.
pub fn record_invalidation(collection: &'static str) {
    counter!(names::CACHE_INVALIDATIONS_TOTAL, "collection" => collection).increment(1);
}
