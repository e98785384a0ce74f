//! Profile service implementation.
//!
//! Follows the same read-through / write-invalidate protocol as the user
//! service, on the `profile` collection. Profile codes are caller-assigned
//! strings, so they are validated against the reserved listing token before
//! any key is derived.

use crate::cache::cache_keys::{self, PROFILE_COLLECTION};
use crate::cache::{metrics, CacheExt, CacheInterface};
use crate::dto::{CreateProfileRequest, ProfileResponse};
use crate::profile_service::ProfileService;
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};
use waypoint_core::{Profile, ValidateExt, WaypointError, WaypointResult};
use waypoint_repository::{ProfileRepository, UserRepository};

/// Profile service with read-through caching and write invalidation.
#[derive(Component)]
#[shaku(interface = ProfileService)]
pub struct ProfileServiceComponent {
    #[shaku(inject)]
    profile_repository: Arc<dyn ProfileRepository>,
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
}

#[async_trait]
impl ProfileService for ProfileServiceComponent {
    async fn create_profile(
        &self,
        request: CreateProfileRequest,
    ) -> WaypointResult<ProfileResponse> {
        debug!("Creating profile: {}", request.code);

        request.validate_request()?;
        // Reject codes that would collide with the listing key.
        cache_keys::validate_id(&request.code)?;

        self.cache
            .invalidate(PROFILE_COLLECTION, &cache_keys::profile_list_key())
            .await;

        let owner = self
            .user_repository
            .find_by_id(request.user_id)
            .await?
            .ok_or_else(|| WaypointError::not_found("User", request.user_id))?;

        if owner.user_type != request.kind {
            return Err(WaypointError::Validation(format!(
                "Profile kind '{}' does not match account type '{}'",
                request.kind, owner.user_type
            )));
        }

        if self.profile_repository.exists_by_code(&request.code).await? {
            return Err(WaypointError::Conflict(format!(
                "Profile code '{}' already exists",
                request.code
            )));
        }

        let profile = Profile::new(
            request.code,
            request.user_id,
            request.kind,
            request.home_address,
            request.vehicle_plate,
        );

        let saved = self.profile_repository.insert(&profile).await?;

        info!("Profile created: {}", saved.code);
        Ok(ProfileResponse::from(saved))
    }

    async fn get_profile(&self, code: &str) -> WaypointResult<ProfileResponse> {
        debug!("Getting profile: {}", code);

        let cache_key = cache_keys::profile_key(code)?;

        let (cached, cache_available) = self
            .cache
            .get_or_degrade::<ProfileResponse>(&cache_key)
            .await;
        if let Some(profile) = cached {
            metrics::record_hit(PROFILE_COLLECTION);
            debug!("Cache hit for profile: {}", code);
            return Ok(profile);
        }
        metrics::record_miss(PROFILE_COLLECTION);

        let profile = self
            .profile_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| WaypointError::not_found("Profile", code))?;

        let response = ProfileResponse::from(profile);

        if cache_available {
            if let Err(e) = self
                .cache
                .set(&cache_key, &response, self.cache.ttl())
                .await
            {
                warn!("Failed to cache profile {}: {}", code, e);
            }
        }

        Ok(response)
    }

    async fn list_profiles(&self) -> WaypointResult<Vec<ProfileResponse>> {
        debug!("Listing profiles");

        let cache_key = cache_keys::profile_list_key();

        let (cached, cache_available) = self
            .cache
            .get_or_degrade::<Vec<ProfileResponse>>(&cache_key)
            .await;
        if let Some(profiles) = cached {
            metrics::record_hit(PROFILE_COLLECTION);
            debug!("Cache hit for profile listing ({} profiles)", profiles.len());
            return Ok(profiles);
        }
        metrics::record_miss(PROFILE_COLLECTION);

        let profiles = self.profile_repository.find_all().await?;
        let response: Vec<ProfileResponse> =
            profiles.into_iter().map(ProfileResponse::from).collect();

        if cache_available {
            if let Err(e) = self
                .cache
                .set(&cache_key, &response, self.cache.ttl())
                .await
            {
                warn!("Failed to cache profile listing: {}", e);
            }
        }

        Ok(response)
    }

    async fn delete_profile(&self, code: &str) -> WaypointResult<()> {
        debug!("Deleting profile: {}", code);

        // The code is captured from the argument before the delete executes.
        let entity_key = cache_keys::profile_key(code)?;
        self.cache
            .invalidate(PROFILE_COLLECTION, &cache_keys::profile_list_key())
            .await;
        self.cache.invalidate(PROFILE_COLLECTION, &entity_key).await;

        let deleted = self.profile_repository.delete(code).await?;

        if !deleted {
            return Err(WaypointError::not_found("Profile", code));
        }

        info!("Profile deleted: {}", code);
        Ok(())
    }
}

impl std::fmt::Debug for ProfileServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileServiceComponent").finish_non_exhaustive()
    }
}
