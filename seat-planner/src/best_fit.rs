//! Best-Fit Search
//!
//! For one guest count and a set of free tables, find the least wasteful
//! single table, pair or strategic triple.
//!
//! Candidates are ranked, in strict priority order, by:
//! 1. fewest extra chairs
//! 2. lowest waste score
//! 3. highest efficiency
//!
//! Remaining ties keep generation order (singles, then pairs, then
//! triples, each in table order). Tables outside every adjacency group
//! are only offered on their own.

use crate::policy::{
    self, ADJACENT_PAIR_BONUS, BLOCK_TRIPLE_BONUS, EXTRA_CHAIR_WEIGHT, LARGE_VERTICAL_BONUS,
    LARGE_VERTICAL_MIN_GUESTS, MAX_EXTRA_CHAIRS_PAIR, MAX_EXTRA_CHAIRS_SINGLE,
    MAX_EXTRA_CHAIRS_TRIPLE, MIN_GUESTS_FOR_PAIR, MIN_GUESTS_FOR_TRIPLE, PAIR_CAPACITY_SLACK,
    TRIPLE_CAPACITY_SLACK, VERTICAL_PAIR_BONUS,
};
use crate::topology::{PairAdjacency, TableSpec, TableTopology};
use shared::types::TableId;
use std::cmp::Reverse;

/// One candidate table combination for a guest count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFit {
    pub table_ids: Vec<TableId>,
    pub base_capacity: u32,
    pub extra_chairs: u32,
    pub efficiency: u32,
    pub waste_score: i32,
    pub reason: String,
}

impl TableFit {
    fn new(guest_count: u32, tables: &[&TableSpec], adjacency_bonus: i32, label: &str) -> Self {
        let base_capacity: u32 = tables.iter().map(|t| t.capacity).sum();
        let extra_chairs = guest_count.saturating_sub(base_capacity);
        let empty_seats = base_capacity.saturating_sub(guest_count);
        let waste_score =
            empty_seats as i32 + EXTRA_CHAIR_WEIGHT * extra_chairs as i32 - adjacency_bonus;

        let ids: Vec<TableId> = tables.iter().map(|t| t.id).collect();
        let mut reason = format!(
            "{} {}{}: {} guests at {} seats",
            if ids.len() == 1 { "Table" } else { "Tables" },
            ids.iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(" + "),
            label,
            guest_count,
            base_capacity,
        );
        if extra_chairs > 0 {
            reason.push_str(&format!(
                ", {} extra chair{}",
                extra_chairs,
                if extra_chairs == 1 { "" } else { "s" }
            ));
        }

        Self {
            table_ids: ids,
            base_capacity,
            extra_chairs,
            efficiency: policy::efficiency(guest_count, base_capacity),
            waste_score,
            reason,
        }
    }

    /// Sort key; smaller is better
    pub fn rank_key(&self) -> (u32, i32, Reverse<u32>) {
        (self.extra_chairs, self.waste_score, Reverse(self.efficiency))
    }
}

/// Every candidate satisfying the chair and capacity thresholds
///
/// `available` ids unknown to the topology are ignored.
pub fn candidates(
    guest_count: u32,
    available: &[TableId],
    topology: &TableTopology,
) -> Vec<TableFit> {
    if guest_count == 0 {
        return Vec::new();
    }

    let tables: Vec<&TableSpec> = available.iter().filter_map(|&id| topology.get(id)).collect();
    let mut fits = Vec::new();

    // Singles
    for &table in &tables {
        if guest_count.saturating_sub(table.capacity) <= MAX_EXTRA_CHAIRS_SINGLE {
            let label = format!(" ({} row)", table.section);
            fits.push(TableFit::new(guest_count, &[table], 0, &label));
        }
    }

    // Combinations only draw on tables some adjacency group names
    let combinable: Vec<&TableSpec> = tables
        .iter()
        .copied()
        .filter(|t| topology.is_listed(t.id))
        .collect();

    // Pairs
    if guest_count >= MIN_GUESTS_FOR_PAIR {
        let min_capacity = guest_count.saturating_sub(PAIR_CAPACITY_SLACK);
        for (i, &a) in combinable.iter().enumerate() {
            for &b in &combinable[i + 1..] {
                let capacity = a.capacity + b.capacity;
                if guest_count.saturating_sub(capacity) > MAX_EXTRA_CHAIRS_PAIR
                    || capacity < min_capacity
                {
                    continue;
                }
                let (bonus, label) = match topology.pair_adjacency(a.id, b.id) {
                    PairAdjacency::Vertical => {
                        let mut bonus = VERTICAL_PAIR_BONUS;
                        if guest_count >= LARGE_VERTICAL_MIN_GUESTS {
                            bonus += LARGE_VERTICAL_BONUS;
                        }
                        (bonus, " (vertically adjacent)")
                    }
                    PairAdjacency::Adjacent => (ADJACENT_PAIR_BONUS, " (adjacent)"),
                    PairAdjacency::Separate => (0, " (separate)"),
                };
                fits.push(TableFit::new(guest_count, &[a, b], bonus, label));
            }
        }
    }

    // Strategic triples
    if guest_count >= MIN_GUESTS_FOR_TRIPLE {
        let min_capacity = guest_count.saturating_sub(TRIPLE_CAPACITY_SLACK);
        for (i, &a) in combinable.iter().enumerate() {
            for (j, &b) in combinable.iter().enumerate().skip(i + 1) {
                for &c in &combinable[j + 1..] {
                    if !topology.is_block_triple(a.id, b.id, c.id) {
                        continue;
                    }
                    let capacity = a.capacity + b.capacity + c.capacity;
                    if guest_count.saturating_sub(capacity) > MAX_EXTRA_CHAIRS_TRIPLE
                        || capacity < min_capacity
                    {
                        continue;
                    }
                    fits.push(TableFit::new(
                        guest_count,
                        &[a, b, c],
                        BLOCK_TRIPLE_BONUS,
                        " (table block)",
                    ));
                }
            }
        }
    }

    fits
}

/// The single best candidate, or `None` when nothing meets the thresholds
pub fn find_best_fit(
    guest_count: u32,
    available: &[TableId],
    topology: &TableTopology,
) -> Option<TableFit> {
    let best = candidates(guest_count, available, topology)
        .into_iter()
        .min_by_key(TableFit::rank_key);

    match &best {
        Some(fit) => tracing::debug!(
            guests = guest_count,
            tables = ?fit.table_ids,
            extra_chairs = fit.extra_chairs,
            waste = fit.waste_score,
            "best fit found"
        ),
        None => tracing::debug!(guests = guest_count, "no suitable table"),
    }
    best
}
