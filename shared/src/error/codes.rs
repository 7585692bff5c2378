//! Unified error codes for the seating workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Venue errors (tables, layout, adjacency)
//! - 2xxx: Guest errors (records, parties, groups)
//! - 3xxx: Allocation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so that they survive a trip
/// through JSON unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 1xxx: Venue ====================
    /// Table not found in the layout
    TableNotFound = 1001,
    /// Table id declared twice
    DuplicateTable = 1002,
    /// Table capacity out of range
    InvalidCapacity = 1003,
    /// Adjacency group references an unknown table
    UnknownAdjacencyTable = 1004,
    /// Adjacency group is malformed
    InvalidAdjacencyGroup = 1005,
    /// Layout declares no tables
    EmptyLayout = 1006,

    // ==================== 2xxx: Guest ====================
    /// Guest group size out of range
    InvalidGroupSize = 2001,
    /// Party has fewer than two members
    PartyTooSmall = 2002,
    /// Guest index appears more than once
    DuplicateGuest = 2003,
    /// Groups from different shows in one planning call
    MixedShowTimes = 2004,

    // ==================== 3xxx: Allocation ====================
    /// No table or table combination fits the group
    NoFitFound = 3001,
    /// Table already used by another arrangement
    TableAlreadyUsed = 3002,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9002,
    /// IO error
    IoError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::InvalidFormat => "Invalid format",

            // Venue
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::DuplicateTable => "Table id is declared more than once",
            ErrorCode::InvalidCapacity => "Table capacity is out of range",
            ErrorCode::UnknownAdjacencyTable => "Adjacency group references an unknown table",
            ErrorCode::InvalidAdjacencyGroup => "Adjacency group is malformed",
            ErrorCode::EmptyLayout => "Venue layout has no tables",

            // Guest
            ErrorCode::InvalidGroupSize => "Guest group size is out of range",
            ErrorCode::PartyTooSmall => "Party must link at least two bookings",
            ErrorCode::DuplicateGuest => "Guest index appears more than once",
            ErrorCode::MixedShowTimes => "Guest groups belong to different shows",

            // Allocation
            ErrorCode::NoFitFound => "No suitable table, needs manual seating",
            ErrorCode::TableAlreadyUsed => "Table is already used in this plan",

            // System
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::IoError => "IO error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            6 => Ok(ErrorCode::InvalidFormat),

            // Venue
            1001 => Ok(ErrorCode::TableNotFound),
            1002 => Ok(ErrorCode::DuplicateTable),
            1003 => Ok(ErrorCode::InvalidCapacity),
            1004 => Ok(ErrorCode::UnknownAdjacencyTable),
            1005 => Ok(ErrorCode::InvalidAdjacencyGroup),
            1006 => Ok(ErrorCode::EmptyLayout),

            // Guest
            2001 => Ok(ErrorCode::InvalidGroupSize),
            2002 => Ok(ErrorCode::PartyTooSmall),
            2003 => Ok(ErrorCode::DuplicateGuest),
            2004 => Ok(ErrorCode::MixedShowTimes),

            // Allocation
            3001 => Ok(ErrorCode::NoFitFound),
            3002 => Ok(ErrorCode::TableAlreadyUsed),

            // System
            9002 => Ok(ErrorCode::ConfigError),
            9003 => Ok(ErrorCode::IoError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
