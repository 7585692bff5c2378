//! Strategy Planner
//!
//! Runs the best-fit search over differently ordered batches of guest
//! groups, producing one complete [`SeatingStrategy`] per policy. Within a
//! strategy no table is handed out twice.

use crate::best_fit::{TableFit, find_best_fit};
use crate::error::{PlanError, PlanResult};
use crate::groups::validate_groups;
use crate::policy::{self, COUPLE_SIZE, GroupClass};
use crate::topology::{TableSpec, TableTopology};
use shared::models::{
    Arrangement, EfficiencyRating, GuestGroup, Section, SeatingStrategy, StrategyKind,
};
use shared::types::{GuestIndex, TableId};
use std::cmp::Reverse;
use std::collections::{BTreeSet, HashSet};

const FRONT_ROW_REASON: &str = "premium front row position";

/// Guest group tagged once with its size class
#[derive(Debug, Clone, Copy)]
struct Classified<'g> {
    group: &'g GuestGroup,
    class: GroupClass,
}

fn classify(groups: &[GuestGroup]) -> Vec<Classified<'_>> {
    groups
        .iter()
        .map(|group| Classified {
            group,
            class: GroupClass::of(group.size()),
        })
        .collect()
}

/// Large groups, then individuals, then couples; bigger first within a class
fn largest_first(mut groups: Vec<Classified<'_>>) -> Vec<Classified<'_>> {
    groups.sort_by_key(|c| (c.class.largest_first_rank(), Reverse(c.group.size())));
    groups
}

/// Mutable state of one strategy pass
struct Pass<'t> {
    topology: &'t TableTopology,
    kind: StrategyKind,
    used: HashSet<TableId>,
    arrangements: Vec<Arrangement>,
    unplaced: Vec<GuestIndex>,
}

impl<'t> Pass<'t> {
    fn new(topology: &'t TableTopology, kind: StrategyKind, occupied: &[TableId]) -> Self {
        Self {
            topology,
            kind,
            used: occupied.iter().copied().collect(),
            arrangements: Vec::new(),
            unplaced: Vec::new(),
        }
    }

    fn free_tables(&self, filter: impl Fn(&TableSpec) -> bool) -> Vec<TableId> {
        self.topology
            .tables()
            .iter()
            .filter(|&t| !self.used.contains(&t.id) && filter(t))
            .map(|t| t.id)
            .collect()
    }

    /// Best fit among free tables passing `filter`; false when nothing fits
    fn try_best_fit(&mut self, group: &GuestGroup, filter: impl Fn(&TableSpec) -> bool) -> bool {
        let available = self.free_tables(filter);
        match find_best_fit(group.size(), &available, self.topology) {
            Some(fit) => {
                self.commit(group, fit);
                true
            }
            None => false,
        }
    }

    /// General search over every free table; records the group as unplaced on failure
    fn seat_anywhere(&mut self, group: &GuestGroup) {
        if !self.try_best_fit(group, |_| true) {
            tracing::warn!(
                strategy = ?self.kind,
                guest = group.guest_index,
                size = group.size(),
                "no suitable table, needs manual seating"
            );
            self.unplaced.push(group.guest_index);
        }
    }

    /// First free front-row table that seats a couple
    fn seat_in_front_row(&mut self, group: &GuestGroup) -> bool {
        let Some(table) = self
            .topology
            .tables()
            .iter()
            .find(|t| {
                t.section == Section::Front
                    && t.capacity >= COUPLE_SIZE
                    && !self.used.contains(&t.id)
            })
            .copied()
        else {
            return false;
        };

        self.used.insert(table.id);
        self.arrangements.push(Arrangement {
            guest_group: group.clone(),
            table_ids: vec![table.id],
            base_capacity: table.capacity,
            extra_chairs: 0,
            efficiency: policy::efficiency(group.size(), table.capacity),
            rating: EfficiencyRating::Excellent,
            reason: FRONT_ROW_REASON.to_string(),
        });
        true
    }

    fn commit(&mut self, group: &GuestGroup, fit: TableFit) {
        self.used.extend(fit.table_ids.iter().copied());
        self.arrangements.push(Arrangement {
            guest_group: group.clone(),
            rating: policy::rate(fit.efficiency as f64),
            table_ids: fit.table_ids,
            base_capacity: fit.base_capacity,
            extra_chairs: fit.extra_chairs,
            efficiency: fit.efficiency,
            reason: fit.reason,
        });
    }

    fn finish(self) -> SeatingStrategy {
        let average_efficiency = if self.arrangements.is_empty() {
            0.0
        } else {
            let total: u32 = self.arrangements.iter().map(|a| a.efficiency).sum();
            total as f64 / self.arrangements.len() as f64
        };

        SeatingStrategy {
            kind: self.kind,
            name: self.kind.title().to_string(),
            description: self.kind.description().to_string(),
            total_extra_chairs: self.arrangements.iter().map(|a| a.extra_chairs).sum(),
            overall_efficiency: policy::rate(average_efficiency),
            average_efficiency,
            arrangements: self.arrangements,
            unplaced: self.unplaced,
        }
    }
}

/// Produces ranked seating strategies over one topology
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    topology: &'a TableTopology,
}

impl<'a> Planner<'a> {
    pub fn new(topology: &'a TableTopology) -> Self {
        Self { topology }
    }

    /// Run every strategy and rank them excellent → poor
    ///
    /// `occupied` tables are never assigned. Groups must all belong to one
    /// show. Groups that fit nowhere are listed in each strategy's
    /// `unplaced` rather than failing the call.
    pub fn plan(
        &self,
        groups: &[GuestGroup],
        occupied: &[TableId],
    ) -> PlanResult<Vec<SeatingStrategy>> {
        validate_groups(groups)?;

        let shows: BTreeSet<&str> = groups.iter().map(|g| g.show_time.as_str()).collect();
        if shows.len() > 1 {
            return Err(PlanError::MixedShowTimes(
                shows.into_iter().map(String::from).collect(),
            ));
        }
        if let Some(&unknown) = occupied.iter().find(|id| !self.topology.contains(**id)) {
            return Err(PlanError::TableNotFound(unknown));
        }

        let classified = classify(groups);
        let mut strategies = vec![
            self.optimal_efficiency(&classified, occupied),
            self.couples_front_row(&classified, occupied),
            self.large_groups_main_seating(&classified, occupied),
        ];
        // stable: equal ratings keep generation order
        strategies.sort_by_key(|s| Reverse(s.overall_efficiency));

        tracing::info!(
            groups = groups.len(),
            tables = self.topology.len(),
            occupied = occupied.len(),
            best = ?strategies.first().map(|s| s.kind),
            "seating strategies planned"
        );
        Ok(strategies)
    }

    fn optimal_efficiency(
        &self,
        groups: &[Classified<'_>],
        occupied: &[TableId],
    ) -> SeatingStrategy {
        let mut pass = Pass::new(self.topology, StrategyKind::OptimalEfficiency, occupied);
        for c in largest_first(groups.to_vec()) {
            pass.seat_anywhere(c.group);
        }
        pass.finish()
    }

    fn couples_front_row(
        &self,
        groups: &[Classified<'_>],
        occupied: &[TableId],
    ) -> SeatingStrategy {
        let mut pass = Pass::new(self.topology, StrategyKind::CouplesFrontRow, occupied);

        let mut remaining = Vec::with_capacity(groups.len());
        for &c in groups {
            if c.class == GroupClass::Couple && pass.seat_in_front_row(c.group) {
                continue;
            }
            remaining.push(c);
        }

        for c in largest_first(remaining) {
            pass.seat_anywhere(c.group);
        }
        pass.finish()
    }

    fn large_groups_main_seating(
        &self,
        groups: &[Classified<'_>],
        occupied: &[TableId],
    ) -> SeatingStrategy {
        let mut pass = Pass::new(self.topology, StrategyKind::LargeGroupsMainSeating, occupied);

        let (large, mut remaining): (Vec<_>, Vec<_>) = groups
            .iter()
            .copied()
            .partition(|c| c.class == GroupClass::LargeGroup);

        for c in largest_first(large) {
            if !pass.try_best_fit(c.group, |t| t.section.is_main_seating()) {
                // falls through to the general pass below
                remaining.push(c);
            }
        }

        for c in largest_first(remaining) {
            pass.seat_anywhere(c.group);
        }
        pass.finish()
    }
}

/// Check a strategy before committing it: every table known, none reused
pub fn verify_strategy(strategy: &SeatingStrategy, topology: &TableTopology) -> PlanResult<()> {
    let mut seen = HashSet::new();
    for id in strategy.used_tables() {
        if !topology.contains(id) {
            return Err(PlanError::TableNotFound(id));
        }
        if !seen.insert(id) {
            return Err(PlanError::TableAlreadyUsed(id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{AdjacencyGroup, AdjacencyKind, Table};

    fn couple(idx: GuestIndex) -> GuestGroup {
        GuestGroup::single(idx, format!("Couple {}", idx), 2, "19:30")
    }

    fn group(idx: GuestIndex, size: u32) -> GuestGroup {
        GuestGroup::single(idx, format!("Guest {}", idx), size, "19:30")
    }

    fn theatre() -> TableTopology {
        let tables = vec![
            Table::new(1, 2, Section::Front),
            Table::new(2, 2, Section::Front),
            Table::new(3, 2, Section::Front),
            Table::new(4, 4, Section::Second),
            Table::new(5, 4, Section::Second),
            Table::new(7, 4, Section::Third),
            Table::new(8, 4, Section::Third),
            Table::new(10, 5, Section::Back),
        ];
        let adjacency = vec![
            AdjacencyGroup::new(AdjacencyKind::Vertical, [4, 7]),
            AdjacencyGroup::new(AdjacencyKind::Vertical, [5, 8]),
            AdjacencyGroup::new(AdjacencyKind::Lateral, [4, 5]),
        ];
        TableTopology::new(&tables, &adjacency).unwrap()
    }

    fn strategy(strategies: &[SeatingStrategy], kind: StrategyKind) -> &SeatingStrategy {
        strategies.iter().find(|s| s.kind == kind).unwrap()
    }

    #[test]
    fn test_single_couple_single_table() {
        let topology = TableTopology::new(&[Table::new(1, 2, Section::Front)], &[]).unwrap();
        let strategies = Planner::new(&topology).plan(&[couple(0)], &[]).unwrap();

        assert_eq!(strategies.len(), 3);
        for s in &strategies {
            assert_eq!(s.arrangements.len(), 1);
            let a = &s.arrangements[0];
            assert_eq!(a.table_ids, vec![1]);
            assert_eq!(a.extra_chairs, 0);
            assert_eq!(a.efficiency, 100);
            assert_eq!(s.overall_efficiency, EfficiencyRating::Excellent);
        }
    }

    #[test]
    fn test_couples_exhaust_front_row() {
        let topology = theatre();
        let groups: Vec<GuestGroup> = (0..4).map(couple).collect();
        let strategies = Planner::new(&topology).plan(&groups, &[]).unwrap();
        let s = strategy(&strategies, StrategyKind::CouplesFrontRow);

        assert_eq!(s.arrangements.len(), 4);
        for (i, a) in s.arrangements.iter().take(3).enumerate() {
            assert_eq!(a.guest_group.guest_index, i);
            assert_eq!(a.table_ids, vec![i as TableId + 1]);
            assert_eq!(a.rating, EfficiencyRating::Excellent);
            assert_eq!(a.reason, FRONT_ROW_REASON);
        }
        let fourth = &s.arrangements[3];
        assert_eq!(fourth.guest_group.guest_index, 3);
        assert_ne!(fourth.reason, FRONT_ROW_REASON);
        assert!(!fourth.table_ids.iter().any(|id| [1, 2, 3].contains(id)));
    }

    #[test]
    fn test_optimal_processes_large_groups_first() {
        let topology = theatre();
        let groups = vec![couple(0), group(1, 6)];
        let strategies = Planner::new(&topology).plan(&groups, &[]).unwrap();
        let s = strategy(&strategies, StrategyKind::OptimalEfficiency);

        assert_eq!(s.arrangements[0].guest_group.guest_index, 1);
        assert_eq!(s.arrangements[0].table_ids, vec![4, 7]);
        assert_eq!(s.arrangements[1].guest_group.guest_index, 0);
        assert_eq!(s.arrangements[1].table_ids, vec![1]);
    }

    #[test]
    fn test_large_groups_restricted_to_main_seating() {
        let topology = theatre();
        let groups = vec![group(0, 5)];
        let strategies = Planner::new(&topology).plan(&groups, &[]).unwrap();

        // Optimal: the 5-seat back table is an exact fit
        let optimal = strategy(&strategies, StrategyKind::OptimalEfficiency);
        assert_eq!(optimal.arrangements[0].table_ids, vec![10]);

        // Main seating: second/third rows only, vertical pair preferred
        let main = strategy(&strategies, StrategyKind::LargeGroupsMainSeating);
        assert_eq!(main.arrangements[0].table_ids, vec![4, 7]);
        assert_eq!(main.arrangements[0].efficiency, 63);
    }

    #[test]
    fn test_large_group_falls_back_outside_main_seating() {
        let topology = theatre();
        let occupied = [4, 5, 7, 8];
        let strategies = Planner::new(&topology).plan(&[group(0, 5)], &occupied).unwrap();
        let main = strategy(&strategies, StrategyKind::LargeGroupsMainSeating);
        assert_eq!(main.arrangements[0].table_ids, vec![10]);
    }

    #[test]
    fn test_occupied_tables_never_assigned() {
        let topology = theatre();
        let groups = vec![couple(0), couple(1), group(2, 4)];
        let occupied = [1, 4];
        let strategies = Planner::new(&topology).plan(&groups, &occupied).unwrap();
        for s in &strategies {
            for id in s.used_tables() {
                assert!(
                    !occupied.contains(&id),
                    "{:?} used occupied table {}",
                    s.kind,
                    id
                );
            }
        }
    }

    #[test]
    fn test_unplaced_groups_reported() {
        let tables = vec![
            Table::new(1, 4, Section::Second),
            Table::new(2, 4, Section::Third),
        ];
        let topology = TableTopology::new(&tables, &[]).unwrap();
        let strategies = Planner::new(&topology).plan(&[group(0, 12)], &[]).unwrap();
        for s in &strategies {
            assert!(s.arrangements.is_empty());
            assert_eq!(s.unplaced, vec![0]);
            assert!(!s.is_complete());
            assert_eq!(s.overall_efficiency, EfficiencyRating::Poor);
            assert_eq!(s.average_efficiency, 0.0);
        }
    }

    #[test]
    fn test_empty_topology_places_nothing() {
        let topology = TableTopology::new(&[], &[]).unwrap();
        let groups = vec![couple(0), group(1, 5)];
        let strategies = Planner::new(&topology).plan(&groups, &[]).unwrap();
        for s in &strategies {
            assert!(s.arrangements.is_empty());
            assert_eq!(s.unplaced.len(), 2);
        }
    }

    #[test]
    fn test_strategies_ranked_by_rating() {
        let topology = theatre();
        let groups = vec![couple(0), couple(1), group(2, 6), group(3, 3)];
        let strategies = Planner::new(&topology).plan(&groups, &[]).unwrap();
        for pair in strategies.windows(2) {
            assert!(pair[0].overall_efficiency >= pair[1].overall_efficiency);
        }
    }

    #[test]
    fn test_equal_ratings_keep_generation_order() {
        let topology = TableTopology::new(&[Table::new(1, 2, Section::Front)], &[]).unwrap();
        let strategies = Planner::new(&topology).plan(&[couple(0)], &[]).unwrap();

        let kinds: Vec<_> = strategies.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StrategyKind::OptimalEfficiency,
                StrategyKind::CouplesFrontRow,
                StrategyKind::LargeGroupsMainSeating,
            ]
        );
        assert!(strategies.iter().all(|s| s.overall_efficiency == EfficiencyRating::Excellent));
    }

    #[test]
    fn test_rejects_mixed_shows() {
        let topology = theatre();
        let groups = vec![couple(0), GuestGroup::single(1, "Matinee", 2, "14:00")];
        let err = Planner::new(&topology).plan(&groups, &[]).unwrap_err();
        assert!(matches!(err, PlanError::MixedShowTimes(shows) if shows.len() == 2));
    }

    #[test]
    fn test_rejects_unknown_occupied_table() {
        let topology = theatre();
        let err = Planner::new(&topology).plan(&[couple(0)], &[99]).unwrap_err();
        assert!(matches!(err, PlanError::TableNotFound(99)));
    }

    #[test]
    fn test_verify_strategy_detects_reuse() {
        let topology = theatre();
        let strategies = Planner::new(&topology)
            .plan(&[couple(0), couple(1)], &[])
            .unwrap();
        let mut s = strategies[0].clone();
        assert!(verify_strategy(&s, &topology).is_ok());

        let first = s.arrangements[0].table_ids.clone();
        s.arrangements[1].table_ids = first.clone();
        assert!(matches!(
            verify_strategy(&s, &topology).unwrap_err(),
            PlanError::TableAlreadyUsed(id) if id == first[0]
        ));
    }
}
