//! Table Model

use crate::types::TableId;
use serde::{Deserialize, Serialize};

/// Seating section (row band) a table belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Front,
    Second,
    Third,
    Back,
}

impl Section {
    /// Second and third rows form the main seating block
    pub fn is_main_seating(&self) -> bool {
        matches!(self, Section::Second | Section::Third)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Section::Front => "front",
            Section::Second => "second",
            Section::Third => "third",
            Section::Back => "back",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical table entity
///
/// `capacity` is fixed for a seating session; `is_occupied` is the only
/// field that changes between planning calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub capacity: u32,
    pub section: Section,
    #[serde(default)]
    pub is_occupied: bool,
}

impl Table {
    pub fn new(id: TableId, capacity: u32, section: Section) -> Self {
        Self {
            id,
            capacity,
            section,
            is_occupied: false,
        }
    }
}
