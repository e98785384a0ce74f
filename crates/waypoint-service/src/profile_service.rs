//! Profile service trait definition.

use crate::dto::{CreateProfileRequest, ProfileResponse};
use async_trait::async_trait;
use shaku::Interface;
use waypoint_core::WaypointResult;

/// Profile service trait.
#[async_trait]
pub trait ProfileService: Interface + Send + Sync {
    /// Creates a role-specific profile for a user account.
    ///
    /// Fails with a validation error when the profile kind does not match
    /// the owning account's type.
    async fn create_profile(&self, request: CreateProfileRequest)
        -> WaypointResult<ProfileResponse>;

    /// Gets a profile by its code.
    async fn get_profile(&self, code: &str) -> WaypointResult<ProfileResponse>;

    /// Lists all profiles.
    async fn list_profiles(&self) -> WaypointResult<Vec<ProfileResponse>>;

    /// Deletes a profile by its code.
    async fn delete_profile(&self, code: &str) -> WaypointResult<()>;
}
