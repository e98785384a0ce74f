//! MySQL user repository implementation.

use crate::{traits::UserRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;
use waypoint_core::{Email, User, UserId, UserType, WaypointError, WaypointResult};

/// MySQL user repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = UserRepository)]
pub struct MySqlUserRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlUserRepository {
    /// Creates a new MySQL user repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: String, // MySQL stores UUID as CHAR(36)
    email: String,
    user_type: String,
    first_name: Option<String>,
    last_name: Option<String>,
    is_active: bool,
    is_staff: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = WaypointError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| WaypointError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(User {
            id: UserId::from_uuid(id),
            email: Email::new_unchecked(row.email),
            user_type: UserType::parse(&row.user_type).unwrap_or_default(),
            first_name: row.first_name,
            last_name: row.last_name,
            is_active: row.is_active,
            is_staff: row.is_staff,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: UserId) -> WaypointResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, user_type, first_name, last_name,
                   is_active, is_staff, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner().to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> WaypointResult<Vec<User>> {
        debug!("Finding all users");

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, user_type, first_name, last_name,
                   is_active, is_staff, created_at, updated_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn exists_by_email(&self, email: &str) -> WaypointResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM users WHERE LOWER(email) = LOWER(?) LIMIT 1")
                .bind(email)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn insert(&self, user: &User) -> WaypointResult<User> {
        debug!("Inserting new user: {}", user.email);

        let id_str = user.id.into_inner().to_string();

        // MySQL doesn't support RETURNING, so insert then select
        sqlx::query(
            r#"
            INSERT INTO users (id, email, user_type, first_name, last_name,
                               is_active, is_staff, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id_str)
        .bind(user.email.as_str())
        .bind(user.user_type.as_str())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.is_active)
        .bind(user.is_staff)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(user.id)
            .await?
            .ok_or_else(|| WaypointError::Internal("Failed to fetch inserted user".to_string()))
    }

    async fn update(&self, user: &User) -> WaypointResult<User> {
        debug!("Updating user: {}", user.id);

        let id_str = user.id.into_inner().to_string();

        sqlx::query(
            r#"
            UPDATE users
            SET email = ?, user_type = ?, first_name = ?, last_name = ?,
                is_active = ?, is_staff = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(user.email.as_str())
        .bind(user.user_type.as_str())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.is_active)
        .bind(user.is_staff)
        .bind(user.updated_at)
        .bind(&id_str)
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(user.id)
            .await?
            .ok_or_else(|| WaypointError::Internal("Failed to fetch updated user".to_string()))
    }

    async fn delete(&self, id: UserId) -> WaypointResult<bool> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.into_inner().to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserRepository").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> UserRow {
        UserRow {
            id: "018f4e2a-9d35-7cc1-b6a0-111111111111".to_string(),
            email: "Test@Example.com".to_string(),
            user_type: "rider".to_string(),
            first_name: Some("Test".to_string()),
            last_name: None,
            is_active: true,
            is_staff: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_maps_to_entity() {
        let user = User::try_from(sample_row()).unwrap();
        assert_eq!(user.email.as_str(), "test@example.com");
        assert_eq!(user.user_type, UserType::Rider);
        assert_eq!(user.first_name, Some("Test".to_string()));
        assert!(user.is_active);
    }

    #[test]
    fn test_row_with_invalid_uuid_is_rejected() {
        let mut row = sample_row();
        row.id = "not-a-uuid".to_string();
        assert!(User::try_from(row).is_err());
    }

    #[test]
    fn test_row_with_unknown_type_defaults_to_passenger() {
        let mut row = sample_row();
        row.user_type = "mystery".to_string();
        let user = User::try_from(row).unwrap();
        assert_eq!(user.user_type, UserType::Passenger);
    }
}
