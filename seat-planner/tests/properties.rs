//! Invariants checked over seeded random guest lists on the bundled theatre

mod common;

use common::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seat_planner::best_fit::candidates;
use seat_planner::policy::{
    self, MAX_EXTRA_CHAIRS_PAIR, MAX_EXTRA_CHAIRS_SINGLE, MAX_EXTRA_CHAIRS_TRIPLE,
};
use seat_planner::{
    TableTopology, build_guest_groups, find_best_fit, layout, plan_seating_strategies,
    verify_strategy,
};
use shared::models::{GuestGroup, PartyLinkage, VenueLayout};
use std::collections::{BTreeSet, HashSet};

const ROUNDS: u64 = 200;

fn random_groups(rng: &mut StdRng) -> Vec<GuestGroup> {
    let n = rng.gen_range(0..=10);
    (0..n).map(|i| group(i, rng.gen_range(1..=12))).collect()
}

fn random_occupancy(rng: &mut StdRng) -> VenueLayout {
    let mut venue = layout::default_theatre().unwrap();
    for table in &mut venue.tables {
        table.is_occupied = rng.gen_bool(0.15);
    }
    venue
}

#[test]
fn every_group_is_placed_or_unplaced_exactly_once() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..ROUNDS {
        let venue = random_occupancy(&mut rng);
        let groups = random_groups(&mut rng);
        let expected: BTreeSet<_> = groups.iter().map(|g| g.guest_index).collect();

        for strategy in plan_seating_strategies(&groups, &venue).unwrap() {
            let mut seen = BTreeSet::new();
            for a in &strategy.arrangements {
                assert!(seen.insert(a.guest_group.guest_index));
            }
            for &idx in &strategy.unplaced {
                assert!(seen.insert(idx), "guest {} placed and unplaced", idx);
            }
            assert_eq!(seen, expected);
        }
    }
}

#[test]
fn no_table_is_used_twice_or_while_occupied() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..ROUNDS {
        let venue = random_occupancy(&mut rng);
        let occupied: HashSet<_> = venue.occupied_table_ids().into_iter().collect();
        let topology = TableTopology::from_layout(&venue).unwrap();
        let groups = random_groups(&mut rng);

        for strategy in plan_seating_strategies(&groups, &venue).unwrap() {
            verify_strategy(&strategy, &topology).unwrap();
            for id in strategy.used_tables() {
                assert!(!occupied.contains(&id), "occupied table {} assigned", id);
            }
        }
    }
}

#[test]
fn extra_chairs_stay_within_combination_limits() {
    let mut rng = StdRng::seed_from_u64(37);
    for _ in 0..ROUNDS {
        let venue = random_occupancy(&mut rng);
        let groups = random_groups(&mut rng);

        for strategy in plan_seating_strategies(&groups, &venue).unwrap() {
            let mut chairs = 0;
            for a in &strategy.arrangements {
                let limit = match a.table_ids.len() {
                    1 => MAX_EXTRA_CHAIRS_SINGLE,
                    2 => MAX_EXTRA_CHAIRS_PAIR,
                    3 => MAX_EXTRA_CHAIRS_TRIPLE,
                    n => panic!("arrangement over {} tables", n),
                };
                assert!(a.extra_chairs <= limit);
                assert_eq!(
                    a.extra_chairs,
                    a.guest_group.size().saturating_sub(a.base_capacity)
                );
                chairs += a.extra_chairs;
            }
            assert_eq!(strategy.total_extra_chairs, chairs);
        }
    }
}

#[test]
fn efficiency_is_bounded_and_consistent() {
    let mut rng = StdRng::seed_from_u64(41);
    for _ in 0..ROUNDS {
        let venue = random_occupancy(&mut rng);
        let groups = random_groups(&mut rng);

        let strategies = plan_seating_strategies(&groups, &venue).unwrap();
        for pair in strategies.windows(2) {
            assert!(pair[0].overall_efficiency >= pair[1].overall_efficiency);
        }
        for strategy in &strategies {
            for a in &strategy.arrangements {
                assert!(a.efficiency <= 100);
                assert_eq!(
                    a.efficiency,
                    policy::efficiency(a.guest_group.size(), a.base_capacity)
                );
            }
            assert_eq!(strategy.overall_efficiency, policy::rate(strategy.average_efficiency));
        }
    }
}

#[test]
fn planning_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(53);
    for _ in 0..50 {
        let venue = random_occupancy(&mut rng);
        let groups = random_groups(&mut rng);

        let first = plan_seating_strategies(&groups, &venue).unwrap();
        let second = plan_seating_strategies(&groups, &venue).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn party_size_is_sum_of_member_counts() {
    let mut rng = StdRng::seed_from_u64(67);
    for _ in 0..ROUNDS {
        let n = rng.gen_range(2..=6);
        let records: Vec<_> = (0..n).map(|i| record(i, rng.gen_range(1..=4))).collect();
        let members: Vec<_> = (0..n).filter(|_| rng.gen_bool(0.6)).collect();
        if members.len() < 2 {
            continue;
        }
        let mut parties = PartyLinkage::new();
        parties.insert("party".into(), members.clone());

        let groups = build_guest_groups(&records, &parties).unwrap();
        let party = groups.iter().find(|g| g.is_party).unwrap();
        let expected: u32 = members.iter().map(|&m| records[m].count).sum();
        assert_eq!(party.size(), expected);
        assert_eq!(party.guest_index, members[0]);
        assert_eq!(groups.len(), n - members.len() + 1);
    }
}

#[test]
fn builder_covers_every_awaiting_guest_once() {
    let mut rng = StdRng::seed_from_u64(71);
    for _ in 0..ROUNDS {
        let n: usize = rng.gen_range(1..=12);
        let mut records: Vec<_> = (0..n).map(|i| record(i, rng.gen_range(1..=5))).collect();
        for r in &mut records {
            r.is_seated = rng.gen_bool(0.1);
        }

        let mut parties = PartyLinkage::new();
        for p in 0..rng.gen_range(0..=3) {
            let members: Vec<_> = (0..n).filter(|_| rng.gen_bool(0.3)).collect();
            if members.len() >= 2 {
                parties.insert(format!("party-{}", p), members);
            }
        }

        let groups = build_guest_groups(&records, &parties).unwrap();
        let mut covered = Vec::new();
        for g in &groups {
            if g.is_party {
                covered.extend(g.party_members.iter().copied());
            } else {
                covered.push(g.guest_index);
            }
        }
        covered.sort_unstable();

        let expected: Vec<_> = records
            .iter()
            .filter(|r| r.awaiting_table())
            .map(|r| r.guest_index)
            .collect();
        assert_eq!(covered, expected);
    }
}

#[test]
fn fewer_extra_chairs_is_never_ranked_lower() {
    let venue = layout::default_theatre().unwrap();
    let topology = TableTopology::from_layout(&venue).unwrap();
    let all: Vec<_> = topology.tables().iter().map(|t| t.id).collect();

    let mut rng = StdRng::seed_from_u64(89);
    for _ in 0..ROUNDS {
        let available: Vec<_> = all.iter().copied().filter(|_| rng.gen_bool(0.6)).collect();
        let guests = rng.gen_range(1..=16);

        let fits = candidates(guests, &available, &topology);
        match find_best_fit(guests, &available, &topology) {
            Some(best) => {
                let fewest = fits.iter().map(|f| f.extra_chairs).min().unwrap();
                assert_eq!(best.extra_chairs, fewest);
                for f in fits.iter().filter(|f| f.extra_chairs == fewest) {
                    assert!(best.rank_key() <= f.rank_key());
                }
            }
            None => assert!(fits.is_empty()),
        }
    }
}
