//! # seat-planner
//!
//! Table allocation engine for theatre seating.
//!
//! ## Scope
//!
//! This crate decides WHERE guests sit:
//! - Guest group building (parties merged into one seating unit)
//! - Table topology and hand-curated adjacency
//! - Best-fit search over single tables, pairs and strategic triples
//! - Strategy planning (optimal, couples front row, large groups main seating)
//!
//! Check-in tracking, persistence and UI stay with the caller, which
//! commits a chosen arrangement and re-plans after every change.
//!
//! ## Example
//!
//! ```
//! use seat_planner::{build_guest_groups, layout, plan_seating_strategies};
//! use shared::models::{CheckInRecord, PartyLinkage};
//!
//! let venue = layout::default_theatre()?;
//! let records = vec![
//!     CheckInRecord::new(0, "Ada", 2, "19:30"),
//!     CheckInRecord::new(1, "Ben", 4, "19:30"),
//!     CheckInRecord::new(2, "Cy", 2, "19:30"),
//! ];
//! let mut parties = PartyLinkage::new();
//! parties.insert("ben-and-cy".into(), vec![1, 2]);
//!
//! let groups = build_guest_groups(&records, &parties)?;
//! let strategies = plan_seating_strategies(&groups, &venue)?;
//! assert_eq!(strategies.len(), 3);
//! # Ok::<(), seat_planner::PlanError>(())
//! ```

pub mod best_fit;
mod error;
pub mod groups;
pub mod layout;
pub mod planner;
pub mod policy;
pub mod topology;

// Re-exports
pub use best_fit::{TableFit, find_best_fit};
pub use error::{PlanError, PlanResult};
pub use groups::{build_guest_groups, partition_by_show};
pub use planner::{Planner, verify_strategy};
pub use policy::GroupClass;
pub use topology::{PairAdjacency, TableSpec, TableTopology};

use shared::models::{GuestGroup, SeatingStrategy, VenueLayout};

/// Plan ranked seating strategies for one show
///
/// Pure function of its inputs: tables flagged `is_occupied` in `layout`
/// are skipped, nothing is cached between calls.
pub fn plan_seating_strategies(
    groups: &[GuestGroup],
    layout: &VenueLayout,
) -> PlanResult<Vec<SeatingStrategy>> {
    let topology = TableTopology::from_layout(layout)?;
    Planner::new(&topology).plan(groups, &layout.occupied_table_ids())
}

/// Plan for the groups of one show out of a mixed snapshot
pub fn plan_for_show(
    groups: &[GuestGroup],
    layout: &VenueLayout,
    show_time: &str,
) -> PlanResult<Vec<SeatingStrategy>> {
    let show_groups: Vec<GuestGroup> = groups
        .iter()
        .filter(|g| g.show_time == show_time)
        .cloned()
        .collect();
    plan_seating_strategies(&show_groups, layout)
}
