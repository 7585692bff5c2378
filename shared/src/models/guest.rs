//! Guest Model
//!
//! Check-in records as supplied by the check-in subsystem, and the
//! normalized [`GuestGroup`] seating unit built from them.

use crate::types::{GuestIndex, ShowTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_true() -> bool {
    true
}

/// One booking as seen by the check-in desk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInRecord {
    pub guest_index: GuestIndex,
    pub name: String,
    /// Number of people on the booking
    pub count: u32,
    pub show_time: ShowTime,
    #[serde(default = "default_true")]
    pub is_checked_in: bool,
    #[serde(default)]
    pub is_seated: bool,
    #[serde(default)]
    pub is_allocated: bool,
}

impl CheckInRecord {
    pub fn new(
        guest_index: GuestIndex,
        name: impl Into<String>,
        count: u32,
        show_time: impl Into<ShowTime>,
    ) -> Self {
        Self {
            guest_index,
            name: name.into(),
            count,
            show_time: show_time.into(),
            is_checked_in: true,
            is_seated: false,
            is_allocated: false,
        }
    }

    /// Checked in, not yet seated and not yet allocated
    pub fn awaiting_table(&self) -> bool {
        self.is_checked_in && !self.is_seated && !self.is_allocated
    }
}

/// Party / friendship linkage: party id -> member guest indices
pub type PartyLinkage = BTreeMap<String, Vec<GuestIndex>>;

/// A unit that must be seated together
///
/// For a party, `count` is the aggregate party size and `party_members`
/// lists every contributing booking; `guest_index` is the first member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestGroup {
    pub guest_index: GuestIndex,
    pub name: String,
    pub count: u32,
    pub show_time: ShowTime,
    #[serde(default)]
    pub is_party: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub party_members: Vec<GuestIndex>,
}

impl GuestGroup {
    /// Single booking group
    pub fn single(
        guest_index: GuestIndex,
        name: impl Into<String>,
        count: u32,
        show_time: impl Into<ShowTime>,
    ) -> Self {
        Self {
            guest_index,
            name: name.into(),
            count,
            show_time: show_time.into(),
            is_party: false,
            party_members: Vec::new(),
        }
    }

    /// Merged multi-booking party
    pub fn party(
        members: Vec<GuestIndex>,
        name: impl Into<String>,
        party_size: u32,
        show_time: impl Into<ShowTime>,
    ) -> Self {
        Self {
            guest_index: members.first().copied().unwrap_or_default(),
            name: name.into(),
            count: party_size,
            show_time: show_time.into(),
            is_party: true,
            party_members: members,
        }
    }

    /// Number of people to seat
    #[inline]
    pub fn size(&self) -> u32 {
        self.count
    }

    /// Every guest index covered by this group
    pub fn members(&self) -> Vec<GuestIndex> {
        if self.is_party {
            self.party_members.clone()
        } else {
            vec![self.guest_index]
        }
    }
}
