//! Data models
//!
//! Shared between seat-planner and seat-desk.
//! All table ids are `i64`, guest indices are positions in the check-in list.

pub mod guest;
pub mod plan;
pub mod table;
pub mod venue;

// Re-exports
pub use guest::*;
pub use plan::*;
pub use table::*;
pub use venue::*;
