//! Guest Group Builder
//!
//! Turns check-in records plus party linkage into seating units. Every
//! record awaiting a table ends up in exactly one [`GuestGroup`].

use crate::error::{PlanError, PlanResult};
use crate::policy::MAX_GROUP_SIZE;
use shared::models::{CheckInRecord, GuestGroup, PartyLinkage};
use shared::types::{GuestIndex, ShowTime};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Build deduplicated guest groups
///
/// 1. Each party whose members are all awaiting a table (checked in, not
///    seated, not allocated) and share one show becomes a single group
///    sized by the sum of its members' counts.
/// 2. Every remaining awaiting record becomes its own group.
///
/// Parties are visited in linkage key order; a record already merged into
/// an earlier party is not available to a later one.
pub fn build_guest_groups(
    records: &[CheckInRecord],
    linkage: &PartyLinkage,
) -> PlanResult<Vec<GuestGroup>> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.guest_index) {
            return Err(PlanError::DuplicateGuest(record.guest_index));
        }
    }

    let awaiting: HashMap<GuestIndex, &CheckInRecord> = records
        .iter()
        .filter(|r| r.awaiting_table())
        .map(|r| (r.guest_index, r))
        .collect();

    for record in records.iter().filter(|r| r.awaiting_table()) {
        if !valid_size(record.count) {
            return Err(PlanError::InvalidGroupSize {
                guest_index: record.guest_index,
                count: record.count,
            });
        }
    }

    let mut consumed: HashSet<GuestIndex> = HashSet::new();
    let mut groups = Vec::new();

    for (party_id, members) in linkage {
        let mut distinct = Vec::with_capacity(members.len());
        for &member in members {
            if !distinct.contains(&member) {
                distinct.push(member);
            }
        }
        if distinct.len() < 2 {
            return Err(PlanError::PartyTooSmall {
                party: party_id.clone(),
                members: distinct.len(),
            });
        }

        let member_records: Option<Vec<&CheckInRecord>> = distinct
            .iter()
            .map(|idx| {
                awaiting
                    .get(idx)
                    .copied()
                    .filter(|_| !consumed.contains(idx))
            })
            .collect();
        let Some(member_records) = member_records else {
            tracing::debug!(
                party = %party_id,
                "party not fully awaiting a table, seating members individually"
            );
            continue;
        };

        let lead = member_records[0];
        if member_records.iter().any(|r| r.show_time != lead.show_time) {
            tracing::warn!(
                party = %party_id,
                "party spans several shows, seating members individually"
            );
            continue;
        }

        let party_size = member_records
            .iter()
            .try_fold(0u32, |total, r| total.checked_add(r.count))
            .unwrap_or(u32::MAX);
        if !valid_size(party_size) {
            return Err(PlanError::InvalidGroupSize {
                guest_index: lead.guest_index,
                count: party_size,
            });
        }
        consumed.extend(distinct.iter().copied());
        groups.push(GuestGroup::party(
            distinct,
            format!("{} Party", lead.name),
            party_size,
            lead.show_time.clone(),
        ));
    }

    groups.extend(
        records
            .iter()
            .filter(|r| r.awaiting_table() && !consumed.contains(&r.guest_index))
            .map(|r| {
                GuestGroup::single(r.guest_index, r.name.clone(), r.count, r.show_time.clone())
            }),
    );

    tracing::debug!(
        records = records.len(),
        awaiting = awaiting.len(),
        groups = groups.len(),
        "guest groups built"
    );
    Ok(groups)
}

fn valid_size(count: u32) -> bool {
    (1..=MAX_GROUP_SIZE).contains(&count)
}

/// Structural checks for groups handed straight to the planner
pub fn validate_groups(groups: &[GuestGroup]) -> PlanResult<()> {
    let mut seen = HashSet::new();
    for group in groups {
        if !valid_size(group.size()) {
            return Err(PlanError::InvalidGroupSize {
                guest_index: group.guest_index,
                count: group.size(),
            });
        }
        if group.is_party && group.party_members.len() < 2 {
            return Err(PlanError::PartyTooSmall {
                party: group.name.clone(),
                members: group.party_members.len(),
            });
        }
        for member in group.members() {
            if !seen.insert(member) {
                return Err(PlanError::DuplicateGuest(member));
            }
        }
    }
    Ok(())
}

/// Split groups by show, keeping input order within each show
pub fn partition_by_show(groups: &[GuestGroup]) -> BTreeMap<ShowTime, Vec<GuestGroup>> {
    let mut shows: BTreeMap<ShowTime, Vec<GuestGroup>> = BTreeMap::new();
    for group in groups {
        shows
            .entry(group.show_time.clone())
            .or_default()
            .push(group.clone());
    }
    shows
}
