//! Caching infrastructure for the service layer.
//!
//! This module provides a cache abstraction with a Redis implementation,
//! the deterministic key scheme for cached collections, and counters for
//! hit / miss / invalidation events.

mod cache_interface;
pub mod cache_keys;
pub mod metrics;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use redis_cache::{RedisCacheService, RedisCacheServiceParameters, DEFAULT_TTL};
