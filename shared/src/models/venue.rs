//! Venue Layout Model
//!
//! Static, hand-curated description of one room: its tables and which of
//! them may be combined for a single party. Adjacency is configuration and
//! is never derived from table positions.

use super::table::Table;
use crate::types::TableId;
use serde::{Deserialize, Serialize};

/// How the tables of an adjacency group relate physically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyKind {
    /// Side by side within one row
    Lateral,
    /// One directly behind the other across rows
    Vertical,
    /// Strategic three-table combination
    Block,
}

/// A set of table ids considered combinable (2+ ids)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyGroup {
    pub tables: Vec<TableId>,
    pub kind: AdjacencyKind,
}

impl AdjacencyGroup {
    pub fn new(kind: AdjacencyKind, tables: impl Into<Vec<TableId>>) -> Self {
        Self {
            tables: tables.into(),
            kind,
        }
    }

    /// Whether every id in `ids` is a member of this group
    pub fn contains_all(&self, ids: &[TableId]) -> bool {
        ids.iter().all(|id| self.tables.contains(id))
    }
}

/// Venue layout configuration (tables + adjacency groups)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueLayout {
    pub name: String,
    pub tables: Vec<Table>,
    #[serde(default)]
    pub adjacency: Vec<AdjacencyGroup>,
}

impl VenueLayout {
    /// Ids of tables currently marked occupied
    pub fn occupied_table_ids(&self) -> Vec<TableId> {
        self.tables
            .iter()
            .filter(|t| t.is_occupied)
            .map(|t| t.id)
            .collect()
    }

    /// Mark the given tables occupied (e.g. after committing an arrangement)
    pub fn mark_occupied(&mut self, ids: &[TableId]) {
        for table in self.tables.iter_mut().filter(|t| ids.contains(&t.id)) {
            table.is_occupied = true;
        }
    }

    pub fn total_seats(&self) -> u32 {
        self.tables.iter().map(|t| t.capacity).sum()
    }
}
