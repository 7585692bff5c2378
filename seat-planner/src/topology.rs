//! Table Topology
//!
//! Immutable lookup over a venue's tables and adjacency groups. Occupancy
//! is not stored here; callers pass it per planning call.

use crate::error::{PlanError, PlanResult};
use crate::policy::MAX_TABLE_CAPACITY;
use shared::models::{AdjacencyGroup, AdjacencyKind, Section, Table, VenueLayout};
use shared::types::TableId;
use std::collections::{HashMap, HashSet};

/// Static part of a table (id, capacity, section)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub id: TableId,
    pub capacity: u32,
    pub section: Section,
}

/// How two tables relate under the configured adjacency groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairAdjacency {
    /// Both in a vertical group
    Vertical,
    /// Both in some other group
    Adjacent,
    /// No group contains both
    Separate,
}

#[derive(Debug, Clone)]
pub struct TableTopology {
    tables: Vec<TableSpec>,
    index: HashMap<TableId, usize>,
    adjacency: Vec<AdjacencyGroup>,
    /// Tables named by at least one adjacency group
    listed: HashSet<TableId>,
}

impl TableTopology {
    /// Build and validate a topology
    ///
    /// Rejects duplicate ids, capacities outside `1..=MAX_TABLE_CAPACITY`,
    /// adjacency groups with fewer than two distinct tables (three for
    /// blocks) and groups naming undeclared tables. An empty table list is
    /// accepted.
    pub fn new(tables: &[Table], adjacency: &[AdjacencyGroup]) -> PlanResult<Self> {
        let mut index = HashMap::with_capacity(tables.len());
        let mut specs = Vec::with_capacity(tables.len());

        for table in tables {
            if !(1..=MAX_TABLE_CAPACITY).contains(&table.capacity) {
                return Err(PlanError::InvalidCapacity {
                    id: table.id,
                    capacity: table.capacity,
                });
            }
            if index.insert(table.id, specs.len()).is_some() {
                return Err(PlanError::DuplicateTable(table.id));
            }
            specs.push(TableSpec {
                id: table.id,
                capacity: table.capacity,
                section: table.section,
            });
        }

        for group in adjacency {
            let distinct: HashSet<TableId> = group.tables.iter().copied().collect();
            if let Some(unknown) = group.tables.iter().find(|id| !index.contains_key(id)) {
                return Err(PlanError::UnknownAdjacencyTable(*unknown));
            }
            if distinct.len() < 2 {
                return Err(PlanError::InvalidAdjacencyGroup {
                    tables: group.tables.clone(),
                    reason: "needs at least two distinct tables",
                });
            }
            if group.kind == AdjacencyKind::Block && distinct.len() < 3 {
                return Err(PlanError::InvalidAdjacencyGroup {
                    tables: group.tables.clone(),
                    reason: "a block needs at least three distinct tables",
                });
            }
        }

        let listed = adjacency
            .iter()
            .flat_map(|g| g.tables.iter().copied())
            .collect();

        Ok(Self {
            tables: specs,
            index,
            adjacency: adjacency.to_vec(),
            listed,
        })
    }

    pub fn from_layout(layout: &VenueLayout) -> PlanResult<Self> {
        Self::new(&layout.tables, &layout.adjacency)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Tables in declaration order
    pub fn tables(&self) -> &[TableSpec] {
        &self.tables
    }

    pub fn get(&self, id: TableId) -> Option<&TableSpec> {
        self.index.get(&id).map(|&i| &self.tables[i])
    }

    pub fn contains(&self, id: TableId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn capacity(&self, id: TableId) -> Option<u32> {
        self.get(id).map(|t| t.capacity)
    }

    pub fn section(&self, id: TableId) -> Option<Section> {
        self.get(id).map(|t| t.section)
    }

    pub fn tables_in_section(&self, section: Section) -> Vec<TableId> {
        self.tables
            .iter()
            .filter(|t| t.section == section)
            .map(|t| t.id)
            .collect()
    }

    pub fn total_seats(&self) -> u32 {
        self.tables.iter().map(|t| t.capacity).sum()
    }

    /// Whether some adjacency group names `id`
    ///
    /// Unlisted tables are only ever offered as single-table arrangements.
    pub fn is_listed(&self, id: TableId) -> bool {
        self.listed.contains(&id)
    }

    /// Whether some adjacency group contains all of `ids` (2 or 3 tables)
    pub fn is_adjacent(&self, ids: &[TableId]) -> bool {
        if !(2..=3).contains(&ids.len()) {
            return false;
        }
        self.adjacency.iter().any(|g| g.contains_all(ids))
    }

    pub fn is_vertical_pair(&self, a: TableId, b: TableId) -> bool {
        self.adjacency
            .iter()
            .any(|g| g.kind == AdjacencyKind::Vertical && g.contains_all(&[a, b]))
    }

    /// Whether `a`, `b`, `c` form a recognized strategic block
    pub fn is_block_triple(&self, a: TableId, b: TableId, c: TableId) -> bool {
        self.adjacency
            .iter()
            .any(|g| g.kind == AdjacencyKind::Block && g.contains_all(&[a, b, c]))
    }

    pub fn pair_adjacency(&self, a: TableId, b: TableId) -> PairAdjacency {
        if self.is_vertical_pair(a, b) {
            PairAdjacency::Vertical
        } else if self.is_adjacent(&[a, b]) {
            PairAdjacency::Adjacent
        } else {
            PairAdjacency::Separate
        }
    }
}
