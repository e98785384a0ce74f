//! # Waypoint Service
//!
//! Business logic service layer for the Waypoint account service.
//! Implements the read-through / write-invalidate caching protocol in
//! front of the repositories.

pub mod cache;
pub mod dto;
pub mod profile_service;
pub mod user_service;

mod r#impl;

pub use cache::*;
pub use dto::*;
pub use profile_service::*;
pub use r#impl::*;
pub use user_service::*;
