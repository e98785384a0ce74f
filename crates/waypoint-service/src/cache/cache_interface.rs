//! Cache interface trait for abstracted caching operations.

use super::metrics;
use async_trait::async_trait;
use shaku::Interface;
use std::time::Duration;
use tracing::warn;
use waypoint_core::WaypointResult;

/// Cache interface for storing and retrieving cached data.
///
/// This trait provides an abstraction over caching implementations,
/// allowing for easy swapping between Redis, in-memory, or other cache
/// backends.
///
/// Uses JSON strings for type-erased storage to maintain dyn-compatibility.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> WaypointResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> WaypointResult<()>;

    /// Delete a value from the cache. Deleting an absent key is a no-op.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> WaypointResult<bool>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;

    /// The TTL applied uniformly to cache writes.
    fn ttl(&self) -> Duration;
}

/// Extension trait with typed methods for convenience.
///
/// This trait provides generic get/set methods that work with any
/// serializable type, plus the degraded-read and invalidation helpers used
/// by the read and write paths.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> WaypointResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> WaypointResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }

    /// Get a typed value, degrading a cache failure to a miss.
    ///
    /// Returns the cached value (if any) and whether the cache backend was
    /// reachable. When it was not, the caller must fall through to the
    /// store and skip population.
    async fn get_or_degrade<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> (Option<T>, bool) {
        match self.get::<T>(key).await {
            Ok(value) => (value, true),
            Err(e) => {
                warn!(key, error = %e, "Cache read failed; degrading to store access");
                (None, false)
            }
        }
    }

    /// Delete a key on behalf of a write path.
    ///
    /// A failed invalidation leaves at worst a TTL-bounded stale entry, so
    /// it is logged rather than raised.
    async fn invalidate(&self, collection: &'static str, key: &str) {
        match self.delete(key).await {
            Ok(_) => metrics::record_invalidation(collection),
            Err(e) => {
                warn!(key, error = %e, "Cache invalidation failed; entry expires with its TTL");
            }
        }
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
