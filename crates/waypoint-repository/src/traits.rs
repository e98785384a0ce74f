//! Repository trait definitions.

use async_trait::async_trait;
use shaku::Interface;
use waypoint_core::{Profile, User, UserId, WaypointResult};

/// User repository trait.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> WaypointResult<Option<User>>;

    /// Returns all users.
    async fn find_all(&self) -> WaypointResult<Vec<User>>;

    /// Checks if an email exists.
    async fn exists_by_email(&self, email: &str) -> WaypointResult<bool>;

    /// Inserts a new user.
    async fn insert(&self, user: &User) -> WaypointResult<User>;

    /// Updates an existing user.
    async fn update(&self, user: &User) -> WaypointResult<User>;

    /// Deletes a user by ID. Returns `false` if the id was absent.
    async fn delete(&self, id: UserId) -> WaypointResult<bool>;
}

/// Profile repository trait.
#[async_trait]
pub trait ProfileRepository: Interface + Send + Sync {
    /// Finds a profile by its code.
    async fn find_by_code(&self, code: &str) -> WaypointResult<Option<Profile>>;

    /// Returns all profiles.
    async fn find_all(&self) -> WaypointResult<Vec<Profile>>;

    /// Checks if a profile code exists.
    async fn exists_by_code(&self, code: &str) -> WaypointResult<bool>;

    /// Inserts a new profile.
    async fn insert(&self, profile: &Profile) -> WaypointResult<Profile>;

    /// Deletes a profile by code. Returns `false` if the code was absent.
    async fn delete(&self, code: &str) -> WaypointResult<bool>;
}
