//! Profile management controller.

use crate::{
    responses::{created, no_content, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;
use waypoint_service::{CreateProfileRequest, ProfileResponse};

/// Creates the profile router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_profiles).post(create_profile))
        .route("/:code", get(get_profile).delete(delete_profile))
}

/// List all profiles.
#[utoipa::path(
    get,
    path = "/profiles",
    tag = "profiles",
    responses(
        (status = 200, description = "All profiles", body = [ProfileResponse])
    )
)]
pub async fn list_profiles(State(state): State<AppState>) -> ApiResult<Vec<ProfileResponse>> {
    debug!("List profiles request");

    let response = state.profile_service.list_profiles().await?;
    ok(response)
}

/// Create a role-specific profile.
#[utoipa::path(
    post,
    path = "/profiles",
    tag = "profiles",
    request_body = CreateProfileRequest,
    responses(
        (status = 201, description = "Profile created", body = ProfileResponse),
        (status = 400, description = "Invalid fields or kind/account type mismatch"),
        (status = 404, description = "Owning user not found"),
        (status = 409, description = "Profile code already exists")
    )
)]
pub async fn create_profile(
    State(state): State<AppState>,
    Json(request): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProfileResponse>>), AppError> {
    debug!("Create profile request: {}", request.code);

    let response = state.profile_service.create_profile(request).await?;
    Ok(created(response))
}

/// Get a profile by code.
#[utoipa::path(
    get,
    path = "/profiles/{code}",
    tag = "profiles",
    params(("code" = String, Path, description = "Profile code")),
    responses(
        (status = 200, description = "The profile", body = ProfileResponse),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<ProfileResponse> {
    debug!("Get profile request: {}", code);

    let response = state.profile_service.get_profile(&code).await?;
    ok(response)
}

/// Delete a profile.
#[utoipa::path(
    delete,
    path = "/profiles/{code}",
    tag = "profiles",
    params(("code" = String, Path, description = "Profile code")),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete profile request: {}", code);

    state.profile_service.delete_profile(&code).await?;

    Ok(no_content())
}
