//! Allocation policy constants
//!
//! Thresholds and weights used by the best-fit search and strategy
//! planner. All of them are empirically chosen tunables.

use shared::models::EfficiencyRating;

// ========== Candidate thresholds ==========

/// Max extra chairs accepted on a single table
pub const MAX_EXTRA_CHAIRS_SINGLE: u32 = 2;
/// Max extra chairs accepted across a table pair
pub const MAX_EXTRA_CHAIRS_PAIR: u32 = 3;
/// Max extra chairs accepted across a table triple
pub const MAX_EXTRA_CHAIRS_TRIPLE: u32 = 4;

/// Pairs are only considered from this group size upward
pub const MIN_GUESTS_FOR_PAIR: u32 = 5;
/// Triples are only considered from this group size upward
pub const MIN_GUESTS_FOR_TRIPLE: u32 = 10;

/// A pair must seat at least `guests - PAIR_CAPACITY_SLACK`
pub const PAIR_CAPACITY_SLACK: u32 = 1;
/// A triple must seat at least `guests - TRIPLE_CAPACITY_SLACK`
pub const TRIPLE_CAPACITY_SLACK: u32 = 2;

// ========== Waste score weights ==========

/// Each extra chair costs this many wasted seats
pub const EXTRA_CHAIR_WEIGHT: i32 = 2;
/// Bonus for a vertically adjacent pair
pub const VERTICAL_PAIR_BONUS: i32 = 3;
/// Bonus for any other adjacent pair
pub const ADJACENT_PAIR_BONUS: i32 = 1;
/// Additional vertical-pair bonus for groups of `LARGE_VERTICAL_MIN_GUESTS`+
pub const LARGE_VERTICAL_BONUS: i32 = 2;
pub const LARGE_VERTICAL_MIN_GUESTS: u32 = 7;
/// Flat bonus for a strategic three-table block
pub const BLOCK_TRIPLE_BONUS: i32 = 2;

// ========== Ratings ==========

pub const EXCELLENT_THRESHOLD: f64 = 85.0;
pub const GOOD_THRESHOLD: f64 = 70.0;
pub const FAIR_THRESHOLD: f64 = 50.0;

// ========== Input limits ==========

/// Largest capacity a single table may declare
pub const MAX_TABLE_CAPACITY: u32 = 1_000;
/// Largest booking or aggregate party size accepted
pub const MAX_GROUP_SIZE: u32 = 10_000;

// ========== Group classes ==========

pub const COUPLE_SIZE: u32 = 2;
pub const LARGE_GROUP_MIN_SIZE: u32 = 5;

/// Fixed three-way split of guest groups by size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupClass {
    /// Exactly two people
    Couple,
    /// Five or more people
    LargeGroup,
    /// 1, 3 or 4 people
    Individual,
}

impl GroupClass {
    pub fn of(size: u32) -> Self {
        if size == COUPLE_SIZE {
            Self::Couple
        } else if size >= LARGE_GROUP_MIN_SIZE {
            Self::LargeGroup
        } else {
            Self::Individual
        }
    }

    /// Processing rank for largest-first ordering (large → individual → couple)
    pub fn largest_first_rank(&self) -> u8 {
        match self {
            Self::LargeGroup => 0,
            Self::Individual => 1,
            Self::Couple => 2,
        }
    }
}

/// Utilization percentage, rounded half up and capped at 100
///
/// The numerator is capped at `capacity` so overflow groups never report
/// more than 100%.
pub fn efficiency(guests: u32, capacity: u32) -> u32 {
    if capacity == 0 {
        return 0;
    }
    let seated = guests.min(capacity) as u64;
    let capacity = capacity as u64;
    ((200 * seated + capacity) / (2 * capacity)) as u32
}

/// Map a (mean) efficiency percentage to its rating band
pub fn rate(efficiency: f64) -> EfficiencyRating {
    if efficiency >= EXCELLENT_THRESHOLD {
        EfficiencyRating::Excellent
    } else if efficiency >= GOOD_THRESHOLD {
        EfficiencyRating::Good
    } else if efficiency >= FAIR_THRESHOLD {
        EfficiencyRating::Fair
    } else {
        EfficiencyRating::Poor
    }
}
