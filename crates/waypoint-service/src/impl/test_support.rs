//! Shared test doubles for the service layer.

use crate::cache::CacheInterface;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use waypoint_core::{Profile, User, UserId, WaypointError, WaypointResult};
use waypoint_repository::{ProfileRepository, UserRepository};

/// In-memory cache with switchable failure modes.
///
/// TTLs are accepted but not enforced; expiry is irrelevant to the
/// protocol assertions made by the service tests.
pub(crate) struct InMemoryCache {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: bool,
    fail_writes: bool,
    fail_deletes: bool,
}

impl InMemoryCache {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fail_reads: false,
            fail_writes: false,
            fail_deletes: false,
        }
    }

    pub(crate) fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::new()
        }
    }

    pub(crate) fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    pub(crate) fn failing_deletes() -> Self {
        Self {
            fail_deletes: true,
            ..Self::new()
        }
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub(crate) fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub(crate) fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl CacheInterface for InMemoryCache {
    fn is_enabled(&self) -> bool {
        true
    }

    fn ttl(&self) -> Duration {
        Duration::from_secs(300)
    }

    async fn get_raw(&self, key: &str) -> WaypointResult<Option<String>> {
        if self.fail_reads {
            return Err(WaypointError::Cache("simulated read failure".to_string()));
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: &str, _ttl: Duration) -> WaypointResult<()> {
        if self.fail_writes {
            return Err(WaypointError::Cache("simulated write failure".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> WaypointResult<bool> {
        if self.fail_deletes {
            return Err(WaypointError::Cache("simulated delete failure".to_string()));
        }
        Ok(self.entries.lock().unwrap().remove(key).is_some())
    }
}

/// In-memory user repository with store-access counters.
pub(crate) struct MockUserRepository {
    users: Mutex<HashMap<UserId, User>>,
    pub(crate) find_by_id_calls: AtomicUsize,
    pub(crate) find_all_calls: AtomicUsize,
}

impl MockUserRepository {
    pub(crate) fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            find_by_id_calls: AtomicUsize::new(0),
            find_all_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_users(users: Vec<User>) -> Self {
        let repo = Self::new();
        for user in users {
            repo.users.lock().unwrap().insert(user.id, user);
        }
        repo
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: UserId) -> WaypointResult<Option<User>> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> WaypointResult<Vec<User>> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        let mut users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }

    async fn exists_by_email(&self, email: &str) -> WaypointResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|u| u.email.as_str().eq_ignore_ascii_case(email)))
    }

    async fn insert(&self, user: &User) -> WaypointResult<User> {
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn update(&self, user: &User) -> WaypointResult<User> {
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> WaypointResult<bool> {
        Ok(self.users.lock().unwrap().remove(&id).is_some())
    }
}

/// In-memory profile repository with store-access counters.
pub(crate) struct MockProfileRepository {
    profiles: Mutex<HashMap<String, Profile>>,
    pub(crate) find_by_code_calls: AtomicUsize,
    pub(crate) find_all_calls: AtomicUsize,
}

impl MockProfileRepository {
    pub(crate) fn new() -> Self {
        Self {
            profiles: Mutex::new(HashMap::new()),
            find_by_code_calls: AtomicUsize::new(0),
            find_all_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn find_by_code(&self, code: &str) -> WaypointResult<Option<Profile>> {
        self.find_by_code_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.profiles.lock().unwrap().get(code).cloned())
    }

    async fn find_all(&self) -> WaypointResult<Vec<Profile>> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        let mut profiles: Vec<Profile> = self.profiles.lock().unwrap().values().cloned().collect();
        profiles.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(profiles)
    }

    async fn exists_by_code(&self, code: &str) -> WaypointResult<bool> {
        Ok(self.profiles.lock().unwrap().contains_key(code))
    }

    async fn insert(&self, profile: &Profile) -> WaypointResult<Profile> {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.code.clone(), profile.clone());
        Ok(profile.clone())
    }

    async fn delete(&self, code: &str) -> WaypointResult<bool> {
        Ok(self.profiles.lock().unwrap().remove(code).is_some())
    }
}
