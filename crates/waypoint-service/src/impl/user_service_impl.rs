//! User service implementation.
//!
//! Read operations are read-through: a cache hit is returned verbatim, a
//! miss consults the repository and populates the cache. Write operations
//! invalidate the affected keys for the identity known before the store
//! mutation commits; a spurious invalidation is acceptable, a stale hit
//! is not.

use crate::cache::cache_keys::{self, USER_COLLECTION};
use crate::cache::{metrics, CacheExt, CacheInterface};
use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};
use waypoint_core::{Email, User, UserId, ValidateExt, WaypointError, WaypointResult};
use waypoint_repository::UserRepository;

/// User service with read-through caching and write invalidation.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceComponent {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
}

#[async_trait]
impl UserService for UserServiceComponent {
    async fn create_user(&self, request: CreateUserRequest) -> WaypointResult<UserResponse> {
        debug!("Creating user: {}", request.email);

        request.validate_request()?;

        // The listing goes stale the instant the new row lands.
        self.cache
            .invalidate(USER_COLLECTION, &cache_keys::user_list_key())
            .await;

        if self.user_repository.exists_by_email(&request.email).await? {
            return Err(WaypointError::Conflict(format!(
                "Email '{}' already exists",
                request.email
            )));
        }

        let email =
            Email::new(&request.email).map_err(|e| WaypointError::Validation(e.to_string()))?;

        let user = User::new(
            email,
            request.user_type,
            request.first_name,
            request.last_name,
        );

        // Not cached preemptively; the next read populates it.
        let saved = self.user_repository.insert(&user).await?;

        info!("User created: {}", saved.id);
        Ok(UserResponse::from(saved))
    }

    async fn get_user(&self, id: UserId) -> WaypointResult<UserResponse> {
        debug!("Getting user: {}", id);

        let cache_key = cache_keys::user_key(id);

        let (cached, cache_available) = self.cache.get_or_degrade::<UserResponse>(&cache_key).await;
        if let Some(user) = cached {
            metrics::record_hit(USER_COLLECTION);
            debug!("Cache hit for user: {}", id);
            return Ok(user);
        }
        metrics::record_miss(USER_COLLECTION);

        // NotFound propagates before any cache write happens.
        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| WaypointError::not_found("User", id))?;

        let response = UserResponse::from(user);

        if cache_available {
            if let Err(e) = self
                .cache
                .set(&cache_key, &response, self.cache.ttl())
                .await
            {
                warn!("Failed to cache user {}: {}", id, e);
            }
        }

        Ok(response)
    }

    async fn list_users(&self) -> WaypointResult<Vec<UserResponse>> {
        debug!("Listing users");

        let cache_key = cache_keys::user_list_key();

        let (cached, cache_available) = self
            .cache
            .get_or_degrade::<Vec<UserResponse>>(&cache_key)
            .await;
        if let Some(users) = cached {
            metrics::record_hit(USER_COLLECTION);
            debug!("Cache hit for user listing ({} users)", users.len());
            return Ok(users);
        }
        metrics::record_miss(USER_COLLECTION);

        let users = self.user_repository.find_all().await?;
        let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

        if cache_available {
            if let Err(e) = self
                .cache
                .set(&cache_key, &response, self.cache.ttl())
                .await
            {
                warn!("Failed to cache user listing: {}", e);
            }
        }

        Ok(response)
    }

    async fn update_user(
        &self,
        id: UserId,
        request: UpdateUserRequest,
    ) -> WaypointResult<UserResponse> {
        debug!("Updating user: {}", id);

        request.validate_request()?;

        // Invalidate for the identity known up front, even if the store
        // mutation fails afterwards.
        self.cache
            .invalidate(USER_COLLECTION, &cache_keys::user_list_key())
            .await;
        self.cache
            .invalidate(USER_COLLECTION, &cache_keys::user_key(id))
            .await;

        let mut user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| WaypointError::not_found("User", id))?;

        if let Some(email) = request.email {
            let email =
                Email::new(&email).map_err(|e| WaypointError::Validation(e.to_string()))?;
            user.change_email(email);
        }
        user.update_details(request.first_name, request.last_name);
        if let Some(active) = request.is_active {
            user.set_active(active);
        }

        let updated = self.user_repository.update(&user).await?;

        info!("User updated: {}", id);
        Ok(UserResponse::from(updated))
    }

    async fn delete_user(&self, id: UserId) -> WaypointResult<()> {
        debug!("Deleting user: {}", id);

        // The id is captured from the argument before the delete executes.
        self.cache
            .invalidate(USER_COLLECTION, &cache_keys::user_list_key())
            .await;
        self.cache
            .invalidate(USER_COLLECTION, &cache_keys::user_key(id))
            .await;

        let deleted = self.user_repository.delete(id).await?;

        if !deleted {
            return Err(WaypointError::not_found("User", id));
        }

        info!("User deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for UserServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceComponent").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{InMemoryCache, MockUserRepository};
    use super::*;
    use std::sync::atomic::Ordering;
    use waypoint_core::UserType;

    fn create_test_user(email: &str) -> User {
        User::new(
            Email::new(email).unwrap(),
            UserType::Passenger,
            Some("Test".to_string()),
            Some("User".to_string()),
        )
    }

    fn create_request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.to_string(),
            user_type: UserType::Passenger,
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
        }
    }

    fn service(
        repo: MockUserRepository,
        cache: InMemoryCache,
    ) -> (UserServiceComponent, Arc<MockUserRepository>, Arc<InMemoryCache>) {
        let repo = Arc::new(repo);
        let cache = Arc::new(cache);
        let component = UserServiceComponent {
            user_repository: repo.clone(),
            cache: cache.clone(),
        };
        (component, repo, cache)
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let (svc, _, _) = service(MockUserRepository::new(), InMemoryCache::new());

        let created = svc.create_user(create_request("new@example.com")).await.unwrap();
        let fetched = svc.get_user(created.id).await.unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.email, "new@example.com");
        assert_eq!(fetched.first_name, Some("Test".to_string()));
        assert_eq!(fetched.user_type, UserType::Passenger);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let existing = create_test_user("taken@example.com");
        let (svc, _, _) = service(
            MockUserRepository::with_users(vec![existing]),
            InMemoryCache::new(),
        );

        let result = svc.create_user(create_request("taken@example.com")).await;
        match result.unwrap_err() {
            WaypointError::Conflict(msg) => assert!(msg.contains("taken@example.com")),
            other => panic!("Expected Conflict error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_user_invalid_email() {
        let (svc, _, _) = service(MockUserRepository::new(), InMemoryCache::new());

        let result = svc.create_user(create_request("not-an-email")).await;
        assert!(matches!(result.unwrap_err(), WaypointError::Validation(_)));
    }

    #[tokio::test]
    async fn test_cold_list_populates_cache_and_second_read_is_a_hit() {
        let users = vec![
            create_test_user("a@example.com"),
            create_test_user("b@example.com"),
        ];
        let (svc, repo, cache) =
            service(MockUserRepository::with_users(users), InMemoryCache::new());

        let first = svc.list_users().await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(repo.find_all_calls.load(Ordering::SeqCst), 1);

        let raw_after_first = cache.raw("user_list").expect("listing should be cached");

        let second = svc.list_users().await.unwrap();
        assert_eq!(second, first);
        // The hit is served from the cache; the store is not consulted again.
        assert_eq!(repo.find_all_calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.raw("user_list").unwrap(), raw_after_first);
    }

    #[tokio::test]
    async fn test_get_user_second_read_is_a_hit() {
        let user = create_test_user("cached@example.com");
        let user_id = user.id;
        let (svc, repo, cache) =
            service(MockUserRepository::with_users(vec![user]), InMemoryCache::new());

        svc.get_user(user_id).await.unwrap();
        assert!(cache.contains(&format!("user_{}", user_id)));
        assert_eq!(repo.find_by_id_calls.load(Ordering::SeqCst), 1);

        svc.get_user(user_id).await.unwrap();
        assert_eq!(repo.find_by_id_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found_and_never_cached() {
        let (svc, _, cache) = service(MockUserRepository::new(), InMemoryCache::new());
        let missing = UserId::new();

        let result = svc.get_user(missing).await;
        assert!(matches!(result.unwrap_err(), WaypointError::NotFound { .. }));
        assert!(!cache.contains(&format!("user_{}", missing)));
    }

    #[tokio::test]
    async fn test_create_invalidates_listing() {
        let seeded = create_test_user("first@example.com");
        let (svc, repo, cache) =
            service(MockUserRepository::with_users(vec![seeded]), InMemoryCache::new());

        svc.list_users().await.unwrap();
        assert!(cache.contains("user_list"));

        svc.create_user(create_request("second@example.com")).await.unwrap();
        assert!(!cache.contains("user_list"));

        // The follow-up listing is a miss that observes the new row.
        let listed = svc.list_users().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(repo.find_all_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_update_invalidates_listing_and_entity() {
        let user = create_test_user("before@example.com");
        let user_id = user.id;
        let (svc, _, cache) =
            service(MockUserRepository::with_users(vec![user]), InMemoryCache::new());

        svc.list_users().await.unwrap();
        svc.get_user(user_id).await.unwrap();
        assert!(cache.contains("user_list"));
        assert!(cache.contains(&format!("user_{}", user_id)));

        let request = UpdateUserRequest {
            email: None,
            first_name: Some("Updated".to_string()),
            last_name: Some("Name".to_string()),
            is_active: None,
        };
        svc.update_user(user_id, request).await.unwrap();

        assert!(!cache.contains("user_list"));
        assert!(!cache.contains(&format!("user_{}", user_id)));

        // The next read is a miss returning the fresh fields.
        let fetched = svc.get_user(user_id).await.unwrap();
        assert_eq!(fetched.first_name, Some("Updated".to_string()));
        assert_eq!(fetched.last_name, Some("Name".to_string()));
    }

    #[tokio::test]
    async fn test_listing_reflects_email_update_after_invalidation() {
        let user_a = create_test_user("a@x.com");
        let user_b = create_test_user("b@x.com");
        let user_b_id = user_b.id;
        let (svc, _, _) = service(
            MockUserRepository::with_users(vec![user_a, user_b]),
            InMemoryCache::new(),
        );

        let first = svc.list_users().await.unwrap();
        let emails: Vec<&str> = first.iter().map(|u| u.email.as_str()).collect();
        assert!(emails.contains(&"a@x.com"));
        assert!(emails.contains(&"b@x.com"));

        let request = UpdateUserRequest {
            email: Some("c@x.com".to_string()),
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
            is_active: None,
        };
        svc.update_user(user_b_id, request).await.unwrap();

        let second = svc.list_users().await.unwrap();
        let emails: Vec<&str> = second.iter().map(|u| u.email.as_str()).collect();
        assert!(emails.contains(&"a@x.com"));
        assert!(emails.contains(&"c@x.com"));
        assert!(!emails.contains(&"b@x.com"));
    }

    #[tokio::test]
    async fn test_update_missing_user_still_invalidates() {
        let (svc, _, cache) = service(MockUserRepository::new(), InMemoryCache::new());
        let missing = UserId::new();

        // Seed entries as if an earlier read had populated them.
        cache.seed("user_list", "[]");
        cache.seed(&format!("user_{}", missing), "{}");

        let request = UpdateUserRequest {
            email: None,
            first_name: None,
            last_name: None,
            is_active: None,
        };
        let result = svc.update_user(missing, request).await;

        assert!(matches!(result.unwrap_err(), WaypointError::NotFound { .. }));
        assert!(!cache.contains("user_list"));
        assert!(!cache.contains(&format!("user_{}", missing)));
    }

    #[tokio::test]
    async fn test_delete_user_invalidates_and_second_delete_is_not_found() {
        let user = create_test_user("gone@example.com");
        let user_id = user.id;
        let (svc, _, cache) =
            service(MockUserRepository::with_users(vec![user]), InMemoryCache::new());

        svc.list_users().await.unwrap();
        svc.get_user(user_id).await.unwrap();

        svc.delete_user(user_id).await.unwrap();
        assert!(!cache.contains("user_list"));
        assert!(!cache.contains(&format!("user_{}", user_id)));

        let result = svc.delete_user(user_id).await;
        assert!(matches!(result.unwrap_err(), WaypointError::NotFound { .. }));
        assert!(!cache.contains("user_list"));
        assert!(!cache.contains(&format!("user_{}", user_id)));
    }

    #[tokio::test]
    async fn test_read_degrades_to_store_when_cache_is_unreachable() {
        let user = create_test_user("degraded@example.com");
        let user_id = user.id;
        let (svc, repo, cache) = service(
            MockUserRepository::with_users(vec![user]),
            InMemoryCache::failing_reads(),
        );

        let fetched = svc.get_user(user_id).await.unwrap();
        assert_eq!(fetched.email, "degraded@example.com");
        // Degraded reads skip population.
        assert!(!cache.contains(&format!("user_{}", user_id)));

        let listed = svc.list_users().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(!cache.contains("user_list"));
        assert_eq!(repo.find_all_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_population_does_not_fail_the_read() {
        let user = create_test_user("setfail@example.com");
        let user_id = user.id;
        let (svc, _, cache) = service(
            MockUserRepository::with_users(vec![user]),
            InMemoryCache::failing_writes(),
        );

        let fetched = svc.get_user(user_id).await.unwrap();
        assert_eq!(fetched.email, "setfail@example.com");
        assert!(!cache.contains(&format!("user_{}", user_id)));
    }

    #[tokio::test]
    async fn test_failed_invalidation_does_not_fail_the_write() {
        let user = create_test_user("stubborn@example.com");
        let user_id = user.id;
        let (svc, _, _) = service(
            MockUserRepository::with_users(vec![user]),
            InMemoryCache::failing_deletes(),
        );

        let request = UpdateUserRequest {
            email: None,
            first_name: Some("Still".to_string()),
            last_name: Some("Works".to_string()),
            is_active: None,
        };
        let updated = svc.update_user(user_id, request).await.unwrap();
        assert_eq!(updated.first_name, Some("Still".to_string()));

        svc.delete_user(user_id).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_can_deactivate_account() {
        let user = create_test_user("active@example.com");
        let user_id = user.id;
        let (svc, _, _) =
            service(MockUserRepository::with_users(vec![user]), InMemoryCache::new());

        let request = UpdateUserRequest {
            email: None,
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
            is_active: Some(false),
        };
        let updated = svc.update_user(user_id, request).await.unwrap();
        assert!(!updated.is_active);
    }
}
