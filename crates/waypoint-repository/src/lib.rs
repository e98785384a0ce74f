//! # Waypoint Repository
//!
//! Data access layer for the Waypoint account service.
//!
//! Exposes repository traits consumed by the service layer and their MySQL
//! implementations over SQLx. The store is treated as an ACID
//! key-value-by-id repository with a list-all operation; no caching happens
//! at this layer.

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
