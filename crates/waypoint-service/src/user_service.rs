//! User service trait definition.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use async_trait::async_trait;
use shaku::Interface;
use waypoint_core::{UserId, WaypointResult};

/// User service trait.
///
/// Read operations go through the cache; write operations invalidate the
/// affected entries before mutating the store.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Creates a new user.
    async fn create_user(&self, request: CreateUserRequest) -> WaypointResult<UserResponse>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> WaypointResult<UserResponse>;

    /// Lists all users.
    async fn list_users(&self) -> WaypointResult<Vec<UserResponse>>;

    /// Updates a user.
    async fn update_user(
        &self,
        id: UserId,
        request: UpdateUserRequest,
    ) -> WaypointResult<UserResponse>;

    /// Deletes a user.
    async fn delete_user(&self, id: UserId) -> WaypointResult<()>;
}
