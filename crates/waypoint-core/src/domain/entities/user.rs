//! User entity.

use super::super::value_objects::{Email, UserType};
use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity representing an account in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// User's email address (unique across accounts).
    pub email: Email,

    /// The kind of account (passenger or rider).
    pub user_type: UserType,

    /// User's first name.
    pub first_name: Option<String>,

    /// User's last name.
    pub last_name: Option<String>,

    /// Whether the account is active.
    pub is_active: bool,

    /// Whether the account has staff privileges.
    pub is_staff: bool,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active user with the given details.
    #[must_use]
    pub fn new(
        email: Email,
        user_type: UserType,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email,
            user_type,
            first_name,
            last_name,
            is_active: true,
            is_staff: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a new staff user.
    #[must_use]
    pub fn new_staff(email: Email, user_type: UserType) -> Self {
        let mut user = Self::new(email, user_type, None, None);
        user.is_staff = true;
        user
    }

    /// Returns the user's full name.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }

    /// Returns the display name (full name or email).
    #[must_use]
    pub fn display_name(&self) -> String {
        self.full_name()
            .unwrap_or_else(|| self.email.as_str().to_string())
    }

    /// Updates the user's name fields.
    pub fn update_details(&mut self, first_name: Option<String>, last_name: Option<String>) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.updated_at = Utc::now();
    }

    /// Changes the user's email address.
    pub fn change_email(&mut self, email: Email) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Sets the account's active flag.
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_user(email: &str) -> User {
        User::new(
            Email::new(email).unwrap(),
            UserType::Passenger,
            None,
            None,
        )
    }

    #[test]
    fn test_user_creation() {
        let user = User::new(
            Email::new("john@example.com").unwrap(),
            UserType::Passenger,
            Some("John".to_string()),
            Some("Doe".to_string()),
        );

        assert_eq!(user.email.as_str(), "john@example.com");
        assert_eq!(user.user_type, UserType::Passenger);
        assert_eq!(user.full_name(), Some("John Doe".to_string()));
        assert!(user.is_active);
        assert!(!user.is_staff);
    }

    #[test]
    fn test_new_staff_user() {
        let user = User::new_staff(Email::new("ops@example.com").unwrap(), UserType::Rider);
        assert!(user.is_staff);
        assert!(user.is_active);
        assert_eq!(user.user_type, UserType::Rider);
    }

    #[test]
    fn test_user_id_is_unique() {
        let user1 = create_user("a@example.com");
        let user2 = create_user("b@example.com");
        assert_ne!(user1.id, user2.id);
    }

    #[test]
    fn test_full_name_variants() {
        let mut user = create_user("x@example.com");
        assert_eq!(user.full_name(), None);

        user.update_details(Some("Ada".to_string()), None);
        assert_eq!(user.full_name(), Some("Ada".to_string()));

        user.update_details(None, Some("Lovelace".to_string()));
        assert_eq!(user.full_name(), Some("Lovelace".to_string()));

        user.update_details(Some("Ada".to_string()), Some("Lovelace".to_string()));
        assert_eq!(user.full_name(), Some("Ada Lovelace".to_string()));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = create_user("fallback@example.com");
        assert_eq!(user.display_name(), "fallback@example.com");
    }

    #[test]
    fn test_change_email() {
        let mut user = create_user("old@example.com");
        user.change_email(Email::new("new@example.com").unwrap());
        assert_eq!(user.email.as_str(), "new@example.com");
    }

    #[test]
    fn test_set_active() {
        let mut user = create_user("x@example.com");
        user.set_active(false);
        assert!(!user.is_active);
        user.set_active(true);
        assert!(user.is_active);
    }
}
