//! Seating Plan Model
//!
//! Engine output: arrangements and complete strategies. None of these are
//! persisted; a caller picks one arrangement and commits it elsewhere.

use super::guest::GuestGroup;
use crate::types::{GuestIndex, TableId};
use serde::{Deserialize, Serialize};

/// Qualitative efficiency band, ordered `Poor < Fair < Good < Excellent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyRating {
    Poor,
    Fair,
    Good,
    Excellent,
}

/// One guest group mapped to 1-3 tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrangement {
    pub guest_group: GuestGroup,
    pub table_ids: Vec<TableId>,
    /// Sum of base table capacities
    pub base_capacity: u32,
    /// Chairs to add beyond base capacity
    pub extra_chairs: u32,
    /// Utilization percentage, 0..=100
    pub efficiency: u32,
    pub rating: EfficiencyRating,
    pub reason: String,
}

impl Arrangement {
    /// Guest indices the caller must mark allocated when committing
    pub fn allocated_guests(&self) -> Vec<GuestIndex> {
        self.guest_group.members()
    }
}

/// Prioritization policy behind a strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    OptimalEfficiency,
    CouplesFrontRow,
    LargeGroupsMainSeating,
}

impl StrategyKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::OptimalEfficiency => "Optimal Efficiency",
            Self::CouplesFrontRow => "Couples Front-Row Priority",
            Self::LargeGroupsMainSeating => "Large Groups Main-Seating Priority",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::OptimalEfficiency => {
                "Largest groups first, each on the least wasteful table combination"
            }
            Self::CouplesFrontRow => "Couples take the front row first, everyone else best fit",
            Self::LargeGroupsMainSeating => {
                "Large groups placed in the second and third rows before everyone else"
            }
        }
    }
}

/// A complete alternative seating plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatingStrategy {
    pub kind: StrategyKind,
    pub name: String,
    pub description: String,
    pub arrangements: Vec<Arrangement>,
    /// Guest indices of groups no table combination could take
    pub unplaced: Vec<GuestIndex>,
    pub overall_efficiency: EfficiencyRating,
    /// Mean arrangement efficiency (0 when nothing was placed)
    pub average_efficiency: f64,
    pub total_extra_chairs: u32,
}

impl SeatingStrategy {
    /// All table ids consumed by this plan, in arrangement order
    pub fn used_tables(&self) -> Vec<TableId> {
        self.arrangements
            .iter()
            .flat_map(|a| a.table_ids.iter().copied())
            .collect()
    }

    /// Whether every input group received an arrangement
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}
