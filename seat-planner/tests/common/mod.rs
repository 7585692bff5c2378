//! Shared fixtures for integration tests

#![allow(dead_code)]

use shared::models::{
    AdjacencyGroup, AdjacencyKind, CheckInRecord, GuestGroup, Section, Table, VenueLayout,
};
use shared::types::{GuestIndex, TableId};

pub const SHOW: &str = "19:30";

pub fn venue(tables: Vec<Table>, adjacency: Vec<AdjacencyGroup>) -> VenueLayout {
    VenueLayout {
        name: "test venue".to_string(),
        tables,
        adjacency,
    }
}

pub fn table(id: TableId, capacity: u32, section: Section) -> Table {
    Table::new(id, capacity, section)
}

pub fn vertical(a: TableId, b: TableId) -> AdjacencyGroup {
    AdjacencyGroup::new(AdjacencyKind::Vertical, [a, b])
}

pub fn lateral(a: TableId, b: TableId) -> AdjacencyGroup {
    AdjacencyGroup::new(AdjacencyKind::Lateral, [a, b])
}

pub fn group(idx: GuestIndex, size: u32) -> GuestGroup {
    GuestGroup::single(idx, format!("Guest {}", idx), size, SHOW)
}

pub fn record(idx: GuestIndex, count: u32) -> CheckInRecord {
    CheckInRecord::new(idx, format!("Guest {}", idx), count, SHOW)
}
