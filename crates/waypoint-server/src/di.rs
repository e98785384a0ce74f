//! Dependency injection module using Shaku.
//!
//! All process-wide dependencies (database pool, repositories, cache
//! client, services) are built once at startup and injected into the
//! components that need them.

use deadpool_redis::Runtime;
use shaku::module;
use std::sync::Arc;
use waypoint_config::{CacheConfig, RedisConfig};
use waypoint_repository::{
    DatabasePool, DatabasePoolParameters, MySqlProfileRepository, MySqlUserRepository,
};
use waypoint_service::{
    ProfileServiceComponent, RedisCacheService, RedisCacheServiceParameters, UserServiceComponent,
};
use waypoint_core::{WaypointError, WaypointResult};

module! {
    pub AppModule {
        components = [
            DatabasePool,
            MySqlUserRepository,
            MySqlProfileRepository,
            RedisCacheService,
            UserServiceComponent,
            ProfileServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the application module with all dependencies.
pub fn build_app_module(
    db_pool: &DatabasePool,
    redis_config: &RedisConfig,
    cache_config: &CacheConfig,
) -> WaypointResult<Arc<AppModule>> {
    // Create Redis cache pool (if enabled)
    let cache_pool = if redis_config.enabled {
        let redis_cfg = deadpool_redis::Config::from_url(&redis_config.url);
        let pool = redis_cfg.create_pool(Some(Runtime::Tokio1)).map_err(|e| {
            WaypointError::Cache(format!("Failed to create Redis pool: {}", e))
        })?;
        Some(Arc::new(pool))
    } else {
        None
    };

    let module = AppModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
            pool: cache_pool,
            default_ttl: cache_config.ttl(),
        })
        .build();

    Ok(Arc::new(module))
}
