//! Profile-related DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use waypoint_core::{Profile, UserId, UserType};

/// Request to create a role-specific profile.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1, max = 32, message = "Code must be 1-32 characters"))]
    pub code: String,

    pub user_id: UserId,

    pub kind: UserType,

    #[validate(length(max = 255))]
    pub home_address: Option<String>,

    #[validate(length(max = 32))]
    pub vehicle_plate: Option<String>,
}

/// Profile response DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub code: String,
    pub user_id: UserId,
    pub kind: UserType,
    pub home_address: Option<String>,
    pub vehicle_plate: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            code: profile.code,
            user_id: profile.user_id,
            kind: profile.kind,
            home_address: profile.home_address,
            vehicle_plate: profile.vehicle_plate,
            created_at: profile.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_profile_request_valid() {
        let request = CreateProfileRequest {
            code: "P12345".to_string(),
            user_id: UserId::new(),
            kind: UserType::Passenger,
            home_address: Some("123 Test St".to_string()),
            vehicle_plate: None,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_profile_request_empty_code() {
        let request = CreateProfileRequest {
            code: String::new(),
            user_id: UserId::new(),
            kind: UserType::Passenger,
            home_address: None,
            vehicle_plate: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_profile_response_from_entity() {
        let profile = Profile::new(
            "R67890".to_string(),
            UserId::new(),
            UserType::Rider,
            None,
            Some("WAY-1234".to_string()),
        );
        let response: ProfileResponse = profile.clone().into();

        assert_eq!(response.code, profile.code);
        assert_eq!(response.kind, UserType::Rider);
        assert_eq!(response.vehicle_plate, Some("WAY-1234".to_string()));
    }
}
