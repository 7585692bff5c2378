//! Check-in snapshot
//!
//! The desk reads what the check-in subsystem exported: the booking list
//! plus the party linkage, as one JSON document.

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CheckInRecord, PartyLinkage};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSnapshot {
    pub records: Vec<CheckInRecord>,
    #[serde(default)]
    pub parties: PartyLinkage,
}

pub fn parse_snapshot(json: &str) -> AppResult<GuestSnapshot> {
    serde_json::from_str(json).map_err(|e| {
        AppError::with_message(ErrorCode::InvalidFormat, format!("Invalid guest snapshot: {}", e))
            .with_detail("line", e.line())
    })
}

pub fn load_snapshot(path: &Path) -> AppResult<GuestSnapshot> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        AppError::with_message(ErrorCode::IoError, format!("Cannot read guest snapshot: {}", e))
            .with_detail("path", path.display().to_string())
    })?;
    let snapshot = parse_snapshot(&json)?;
    tracing::info!(
        path = %path.display(),
        records = snapshot.records.len(),
        parties = snapshot.parties.len(),
        "guest snapshot loaded"
    );
    Ok(snapshot)
}
