//! Venue layout loading
//!
//! Layouts are JSON documents (see `layouts/default_theatre.json`). A
//! layout is validated through [`TableTopology`] on load, and a layout
//! file without tables is rejected as misconfiguration.

use crate::error::{PlanError, PlanResult};
use crate::topology::TableTopology;
use shared::models::VenueLayout;
use std::path::Path;

const DEFAULT_THEATRE: &str = include_str!("../layouts/default_theatre.json");

/// Parse and validate a layout document
pub fn parse_layout(json: &str) -> PlanResult<VenueLayout> {
    let layout: VenueLayout = serde_json::from_str(json)?;
    if layout.tables.is_empty() {
        return Err(PlanError::EmptyLayout(layout.name));
    }
    TableTopology::from_layout(&layout)?;
    Ok(layout)
}

/// Read a layout file from disk
pub fn load_layout(path: impl AsRef<Path>) -> PlanResult<VenueLayout> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let layout = parse_layout(&json)?;
    tracing::info!(
        path = %path.display(),
        layout = %layout.name,
        tables = layout.tables.len(),
        seats = layout.total_seats(),
        "venue layout loaded"
    );
    Ok(layout)
}

/// The bundled 13-table theatre layout
pub fn default_theatre() -> PlanResult<VenueLayout> {
    parse_layout(DEFAULT_THEATRE)
}
