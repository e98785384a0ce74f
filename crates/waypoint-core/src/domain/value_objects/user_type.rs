//! User type value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of account a user holds.
///
/// Role-specific profiles (passenger or rider) may only be attached to an
/// account carrying the matching type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// A passenger account.
    #[default]
    Passenger,
    /// A rider (driver) account.
    Rider,
}

impl UserType {
    /// Returns the canonical string form stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Passenger => "passenger",
            Self::Rider => "rider",
        }
    }

    /// Parses a user type from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "passenger" => Some(Self::Passenger),
            "rider" => Some(Self::Rider),
            _ => None,
        }
    }

    /// All available user types.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Passenger, Self::Rider]
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
