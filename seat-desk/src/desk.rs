//! One planning run at the desk
//!
//! Loads the venue and the check-in snapshot, builds guest groups and
//! plans every show (or the configured one) on its own.

use crate::config::Config;
use crate::snapshot::{GuestSnapshot, load_snapshot};
use seat_planner::{
    TableTopology, build_guest_groups, layout, partition_by_show, plan_for_show,
    plan_seating_strategies, verify_strategy,
};
use serde::Serialize;
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{SeatingStrategy, VenueLayout};
use shared::types::ShowTime;

/// Ranked strategies for one show
#[derive(Debug, Clone, Serialize)]
pub struct ShowPlan {
    pub show_time: ShowTime,
    pub groups: usize,
    pub strategies: Vec<SeatingStrategy>,
    /// Groups the top-ranked strategy could not seat, under `NoFitFound`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_seating: Option<ApiResponse<()>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeskReport {
    pub venue: String,
    pub shows: Vec<ShowPlan>,
}

pub fn run(config: &Config) -> AppResult<DeskReport> {
    let venue = match &config.venue_layout {
        Some(path) => layout::load_layout(path)?,
        None => layout::default_theatre()?,
    };
    let snapshot = load_snapshot(config.snapshot_path()?)?;
    plan_snapshot(&venue, &snapshot, config.show_time.as_deref())
}

pub fn plan_snapshot(
    venue: &VenueLayout,
    snapshot: &GuestSnapshot,
    show_time: Option<&str>,
) -> AppResult<DeskReport> {
    let topology = TableTopology::from_layout(venue)?;
    let groups = build_guest_groups(&snapshot.records, &snapshot.parties)?;

    let mut shows = Vec::new();
    match show_time {
        Some(show) => {
            let count = groups.iter().filter(|g| g.show_time == show).count();
            let strategies = plan_for_show(&groups, venue, show)?;
            shows.push(checked_plan(show.to_string(), count, strategies, &topology)?);
        }
        None => {
            for (show, show_groups) in partition_by_show(&groups) {
                let strategies = plan_seating_strategies(&show_groups, venue)?;
                shows.push(checked_plan(show, show_groups.len(), strategies, &topology)?);
            }
        }
    }

    Ok(DeskReport {
        venue: venue.name.clone(),
        shows,
    })
}

fn checked_plan(
    show_time: ShowTime,
    groups: usize,
    strategies: Vec<SeatingStrategy>,
    topology: &TableTopology,
) -> AppResult<ShowPlan> {
    for strategy in &strategies {
        verify_strategy(strategy, topology)?;
        if !strategy.is_complete() {
            tracing::warn!(
                show = %show_time,
                strategy = %strategy.name,
                unplaced = ?strategy.unplaced,
                code = %ErrorCode::NoFitFound,
                "groups need manual seating"
            );
        }
    }

    let manual_seating = strategies
        .first()
        .filter(|best| !best.is_complete())
        .map(|best| {
            let err = AppError::new(ErrorCode::NoFitFound)
                .with_detail("strategy", best.name.clone())
                .with_detail("guest_indices", best.unplaced.clone());
            ApiResponse::error(&err)
        });

    Ok(ShowPlan {
        show_time,
        groups,
        strategies,
        manual_seating,
    })
}
