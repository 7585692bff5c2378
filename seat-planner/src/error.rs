//! Error types for the seating engine
//!
//! "No fit" is not an error: the search returns `None` and strategies list
//! the group as unplaced. Only malformed input ends up here.

use crate::policy::{MAX_GROUP_SIZE, MAX_TABLE_CAPACITY};
use shared::error::{AppError, ErrorCode};
use shared::types::{GuestIndex, ShowTime, TableId};
use thiserror::Error;

/// Engine error types
#[derive(Debug, Error)]
pub enum PlanError {
    /// Guest group (or booking) size outside the accepted range
    #[error(
        "Guest {guest_index} has group size {count}, expected 1..={max}",
        max = MAX_GROUP_SIZE
    )]
    InvalidGroupSize { guest_index: GuestIndex, count: u32 },

    /// Party linking fewer than two distinct bookings
    #[error("Party {party} links {members} booking(s), at least 2 required")]
    PartyTooSmall { party: String, members: usize },

    /// Guest index present in more than one record or group
    #[error("Guest {0} appears more than once")]
    DuplicateGuest(GuestIndex),

    /// Planning call mixes groups from several shows
    #[error("Guest groups span several shows: {0:?}")]
    MixedShowTimes(Vec<ShowTime>),

    /// Table id declared twice
    #[error("Table {0} is declared more than once")]
    DuplicateTable(TableId),

    /// Table capacity outside the accepted range
    #[error(
        "Table {id} has capacity {capacity}, expected 1..={max}",
        max = MAX_TABLE_CAPACITY
    )]
    InvalidCapacity { id: TableId, capacity: u32 },

    /// Table id unknown to the topology
    #[error("Table {0} not found")]
    TableNotFound(TableId),

    /// Table assigned to two arrangements of one strategy
    #[error("Table {0} is used by more than one arrangement")]
    TableAlreadyUsed(TableId),

    /// Adjacency group names a table the layout does not declare
    #[error("Adjacency group references unknown table {0}")]
    UnknownAdjacencyTable(TableId),

    /// Adjacency group with too few distinct members
    #[error("Invalid adjacency group {tables:?}: {reason}")]
    InvalidAdjacencyGroup {
        tables: Vec<TableId>,
        reason: &'static str,
    },

    /// Venue configuration without tables
    #[error("Venue layout {0} has no tables")]
    EmptyLayout(String),

    /// Layout JSON could not be parsed
    #[error("Invalid layout: {0}")]
    Layout(#[from] serde_json::Error),

    /// IO error while reading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlanError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidGroupSize { .. } => ErrorCode::InvalidGroupSize,
            Self::PartyTooSmall { .. } => ErrorCode::PartyTooSmall,
            Self::DuplicateGuest(_) => ErrorCode::DuplicateGuest,
            Self::MixedShowTimes(_) => ErrorCode::MixedShowTimes,
            Self::DuplicateTable(_) => ErrorCode::DuplicateTable,
            Self::InvalidCapacity { .. } => ErrorCode::InvalidCapacity,
            Self::TableNotFound(_) => ErrorCode::TableNotFound,
            Self::TableAlreadyUsed(_) => ErrorCode::TableAlreadyUsed,
            Self::UnknownAdjacencyTable(_) => ErrorCode::UnknownAdjacencyTable,
            Self::InvalidAdjacencyGroup { .. } => ErrorCode::InvalidAdjacencyGroup,
            Self::EmptyLayout(_) => ErrorCode::EmptyLayout,
            Self::Layout(_) => ErrorCode::InvalidFormat,
            Self::Io(_) => ErrorCode::IoError,
        }
    }
}

impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            PlanError::InvalidGroupSize { guest_index, count } => app
                .with_detail("guest_index", guest_index)
                .with_detail("count", count),
            PlanError::PartyTooSmall { party, members } => app
                .with_detail("party", party)
                .with_detail("members", members),
            PlanError::DuplicateGuest(guest_index) => app.with_detail("guest_index", guest_index),
            PlanError::MixedShowTimes(shows) => app.with_detail("show_times", shows),
            PlanError::DuplicateTable(id)
            | PlanError::TableNotFound(id)
            | PlanError::TableAlreadyUsed(id)
            | PlanError::UnknownAdjacencyTable(id) => app.with_detail("table_id", id),
            PlanError::InvalidCapacity { id, capacity } => app
                .with_detail("table_id", id)
                .with_detail("capacity", capacity),
            PlanError::InvalidAdjacencyGroup { tables, .. } => app.with_detail("tables", tables),
            PlanError::EmptyLayout(name) => app.with_detail("layout", name),
            PlanError::Layout(_) | PlanError::Io(_) => app,
        }
    }
}

/// Result type for engine operations
pub type PlanResult<T> = Result<T, PlanError>;
