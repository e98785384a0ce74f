//! Cache key generators for consistent key naming.
//!
//! Keys follow the scheme `<collection>_list` for the collection-wide
//! listing and `<collection>_<id>` for a single entity. The `list` token is
//! reserved: entity ids are validated to be non-empty and distinct from it,
//! so the two key families can never collide. Presence of an id is encoded
//! in which function is called, never in the truthiness of a value.

use waypoint_core::{UserId, WaypointError, WaypointResult};

/// Collection name for user accounts.
pub const USER_COLLECTION: &str = "user";

/// Collection name for role-specific profiles.
pub const PROFILE_COLLECTION: &str = "profile";

/// Reserved token naming the collection-wide listing entry.
const LIST_TOKEN: &str = "list";

/// Validates a string entity id for use in a cache key.
pub fn validate_id(id: &str) -> WaypointResult<()> {
    if id.is_empty() {
        return Err(WaypointError::Validation(
            "Entity id must not be empty".to_string(),
        ));
    }
    if id == LIST_TOKEN {
        return Err(WaypointError::Validation(format!(
            "Entity id '{}' is reserved for the listing key",
            LIST_TOKEN
        )));
    }
    Ok(())
}

/// Generate the listing cache key for a collection.
#[must_use]
pub fn list_key(collection: &str) -> String {
    format!("{}_{}", collection, LIST_TOKEN)
}

/// Generate the cache key for a single entity of a collection.
pub fn entity_key(collection: &str, id: &str) -> WaypointResult<String> {
    validate_id(id)?;
    Ok(format!("{}_{}", collection, id))
}

/// Generate the cache key for the user listing.
#[must_use]
pub fn user_list_key() -> String {
    list_key(USER_COLLECTION)
}

/// Generate the cache key for a user by ID.
///
/// UUID ids are never empty and never spell the reserved listing token, so
/// this cannot fail.
#[must_use]
pub fn user_key(id: UserId) -> String {
    format!("{}_{}", USER_COLLECTION, id)
}

/// Generate the cache key for the profile listing.
#[must_use]
pub fn profile_list_key() -> String {
    list_key(PROFILE_COLLECTION)
}

/// Generate the cache key for a profile by code.
pub fn profile_key(code: &str) -> WaypointResult<String> {
    entity_key(PROFILE_COLLECTION, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_key_format() {
        assert_eq!(list_key("user"), "user_list");
        assert_eq!(user_list_key(), "user_list");
        assert_eq!(profile_list_key(), "profile_list");
    }

    #[test]
    fn test_entity_key_format() {
        assert_eq!(entity_key("user", "5").unwrap(), "user_5");
        assert_eq!(profile_key("P12345").unwrap(), "profile_P12345");
    }

    #[test]
    fn test_user_key_contains_id() {
        let id = UserId::new();
        let key = user_key(id);
        assert!(key.starts_with("user_"));
        assert!(key.contains(&id.to_string()));
    }

    #[test]
    fn test_list_key_never_equals_entity_key() {
        // The reserved token is rejected as an id, so the families are disjoint.
        for id in ["5", "abc", "list2", "P12345"] {
            assert_ne!(entity_key("user", id).unwrap(), list_key("user"));
        }
        assert_ne!(user_key(UserId::new()), user_list_key());
    }

    #[test]
    fn test_entity_key_rejects_reserved_token() {
        assert!(entity_key("user", "list").is_err());
        assert!(profile_key("list").is_err());
    }

    #[test]
    fn test_entity_key_rejects_empty_id() {
        assert!(entity_key("user", "").is_err());
        assert!(profile_key("").is_err());
    }

    #[test]
    fn test_keys_are_injective_per_id() {
        assert_ne!(
            entity_key("user", "1").unwrap(),
            entity_key("user", "2").unwrap()
        );
        assert_ne!(
            entity_key("user", "1").unwrap(),
            entity_key("profile", "1").unwrap()
        );
    }
}
