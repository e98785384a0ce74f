//! Result type aliases for the Waypoint account service.

use crate::WaypointError;

/// A specialized `Result` type for Waypoint operations.
pub type WaypointResult<T> = Result<T, WaypointError>;
