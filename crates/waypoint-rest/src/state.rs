//! Application state for Axum handlers.

use shaku::{HasComponent, Module};
use std::sync::Arc;
use waypoint_service::{ProfileService, UserService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub profile_service: Arc<dyn ProfileService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        user_service: Arc<dyn UserService>,
        profile_service: Arc<dyn ProfileService>,
    ) -> Self {
        Self {
            user_service,
            profile_service,
        }
    }

    /// Creates application state by resolving services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn UserService> + HasComponent<dyn ProfileService>,
    {
        Self {
            user_service: module.resolve(),
            profile_service: module.resolve(),
        }
    }
}
