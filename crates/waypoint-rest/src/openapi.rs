//! OpenAPI documentation configuration.
//!
//! This module provides OpenAPI/Swagger documentation generation for the
//! REST API.

use utoipa::OpenApi;
use waypoint_core::{ErrorResponse, FieldError, UserId, UserType};
use waypoint_service::{
    CreateProfileRequest, CreateUserRequest, ProfileResponse, UpdateUserRequest, UserResponse,
};

/// OpenAPI documentation for the Waypoint account service API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Waypoint Account Service API",
        version = "1.0.0",
        description = "RESTful API for Waypoint user accounts and role profiles",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // User endpoints
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::delete_user,
        // Profile endpoints
        crate::controllers::profile_controller::list_profiles,
        crate::controllers::profile_controller::create_profile,
        crate::controllers::profile_controller::get_profile,
        crate::controllers::profile_controller::delete_profile,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            // Core types
            UserId,
            UserType,
            ErrorResponse,
            FieldError,
            // User DTOs
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            // Profile DTOs
            CreateProfileRequest,
            ProfileResponse,
        )
    ),
    tags(
        (name = "users", description = "User account endpoints"),
        (name = "profiles", description = "Role profile endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
