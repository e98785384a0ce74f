//! Role-specific profile entity.

use super::super::value_objects::UserType;
use super::user::User;
use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role-specific profile attached to a user account.
///
/// A profile of a given kind may only be attached to an account whose
/// `user_type` matches that kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Caller-assigned identifier (e.g. "P12345").
    pub code: String,

    /// The owning user account.
    pub user_id: UserId,

    /// Which kind of profile this is.
    pub kind: UserType,

    /// Home address (passenger profiles).
    pub home_address: Option<String>,

    /// Vehicle plate (rider profiles).
    pub vehicle_plate: Option<String>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a new profile.
    #[must_use]
    pub fn new(
        code: String,
        user_id: UserId,
        kind: UserType,
        home_address: Option<String>,
        vehicle_plate: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            code,
            user_id,
            kind,
            home_address,
            vehicle_plate,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks that the profile kind matches the owning account's type.
    #[must_use]
    pub fn matches_owner(&self, owner: &User) -> bool {
        self.user_id == owner.id && self.kind == owner.user_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Email;

    fn passenger_user() -> User {
        User::new(
            Email::new("passenger@example.com").unwrap(),
            UserType::Passenger,
            None,
            None,
        )
    }

    #[test]
    fn test_profile_creation() {
        let user = passenger_user();
        let profile = Profile::new(
            "P12345".to_string(),
            user.id,
            UserType::Passenger,
            Some("123 Test St".to_string()),
            None,
        );

        assert_eq!(profile.code, "P12345");
        assert_eq!(profile.kind, UserType::Passenger);
        assert!(profile.matches_owner(&user));
    }

    #[test]
    fn test_profile_kind_mismatch() {
        let user = passenger_user();
        let profile = Profile::new("R67890".to_string(), user.id, UserType::Rider, None, None);
        assert!(!profile.matches_owner(&user));
    }

    #[test]
    fn test_profile_wrong_owner() {
        let user = passenger_user();
        let other = User::new(
            Email::new("other@example.com").unwrap(),
            UserType::Passenger,
            None,
            None,
        );
        let profile = Profile::new(
            "P11111".to_string(),
            other.id,
            UserType::Passenger,
            None,
            None,
        );
        assert!(!profile.matches_owner(&user));
    }
}
