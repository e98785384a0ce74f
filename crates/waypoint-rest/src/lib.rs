//! # Waypoint REST
//!
//! REST API layer using Axum for the Waypoint account service.
//! Provides HTTP endpoints for user and profile management plus health
//! checks.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
