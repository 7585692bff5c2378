//! Common types for the shared crate
//!
//! Identifier aliases used across the seating workspace

/// Table identifier (unique within one venue layout)
pub type TableId = i64;

/// Opaque key of a booking record owned by the check-in subsystem
pub type GuestIndex = usize;

/// Show / session identifier (e.g. "19:30" or "matinee")
pub type ShowTime = String;
