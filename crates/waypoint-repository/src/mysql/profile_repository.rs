//! MySQL profile repository implementation.

use crate::{traits::ProfileRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;
use waypoint_core::{Profile, UserId, UserType, WaypointError, WaypointResult};

/// MySQL profile repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = ProfileRepository)]
pub struct MySqlProfileRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlProfileRepository {
    /// Creates a new MySQL profile repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a profile.
#[derive(Debug, FromRow)]
struct ProfileRow {
    code: String,
    user_id: String,
    kind: String,
    home_address: Option<String>,
    vehicle_plate: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = WaypointError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let user_id = Uuid::parse_str(&row.user_id)
            .map_err(|e| WaypointError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(Profile {
            code: row.code,
            user_id: UserId::from_uuid(user_id),
            kind: UserType::parse(&row.kind).unwrap_or_default(),
            home_address: row.home_address,
            vehicle_plate: row.vehicle_plate,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn find_by_code(&self, code: &str) -> WaypointResult<Option<Profile>> {
        debug!("Finding profile by code: {}", code);

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT code, user_id, kind, home_address, vehicle_plate,
                   created_at, updated_at
            FROM profiles
            WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Profile::try_from).transpose()
    }

    async fn find_all(&self) -> WaypointResult<Vec<Profile>> {
        debug!("Finding all profiles");

        let rows = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT code, user_id, kind, home_address, vehicle_plate,
                   created_at, updated_at
            FROM profiles
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter()
            .map(Profile::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn exists_by_code(&self, code: &str) -> WaypointResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM profiles WHERE code = ? LIMIT 1")
                .bind(code)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn insert(&self, profile: &Profile) -> WaypointResult<Profile> {
        debug!("Inserting new profile: {}", profile.code);

        sqlx::query(
            r#"
            INSERT INTO profiles (code, user_id, kind, home_address, vehicle_plate,
                                  created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&profile.code)
        .bind(profile.user_id.into_inner().to_string())
        .bind(profile.kind.as_str())
        .bind(&profile.home_address)
        .bind(&profile.vehicle_plate)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(self.pool.inner())
        .await?;

        self.find_by_code(&profile.code)
            .await?
            .ok_or_else(|| WaypointError::Internal("Failed to fetch inserted profile".to_string()))
    }

    async fn delete(&self, code: &str) -> WaypointResult<bool> {
        debug!("Deleting profile: {}", code);

        let result = sqlx::query("DELETE FROM profiles WHERE code = ?")
            .bind(code)
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for MySqlProfileRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlProfileRepository").finish_non_exhaustive()
    }
}
