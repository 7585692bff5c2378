//! Shared types for the seating workspace
//!
//! Venue, guest and plan models plus the unified error system, used by
//! the planning engine and the desk front end alike.

pub mod error;
pub mod models;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};
