use shared::error::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// Default tracing directives when `LOG_LEVEL` is unset
pub const DEFAULT_LOG_LEVEL: &str = "seat_desk=info,seat_planner=info";

/// Desk configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | VENUE_LAYOUT | bundled theatre | Venue layout JSON file |
/// | GUEST_SNAPSHOT | (required) | Check-in snapshot JSON file |
/// | SHOW_TIME | all shows | Plan only this show |
/// | LOG_LEVEL | seat_desk=info,seat_planner=info | Tracing filter directives |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | (none) | Directory for daily rolling log files |
///
/// # Example
///
/// ```ignore
/// GUEST_SNAPSHOT=./tonight.json SHOW_TIME=19:30 cargo run -p seat-desk
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Venue layout file, bundled default theatre when `None`
    pub venue_layout: Option<PathBuf>,
    /// Check-in snapshot file
    pub guest_snapshot: Option<PathBuf>,
    /// Restrict planning to one show
    pub show_time: Option<String>,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            venue_layout: non_empty("VENUE_LAYOUT").map(PathBuf::from),
            guest_snapshot: non_empty("GUEST_SNAPSHOT").map(PathBuf::from),
            show_time: non_empty("SHOW_TIME").map(|v| v.trim().to_string()),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.into()),
            log_json: non_empty("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: non_empty("LOG_DIR"),
        }
    }

    /// Snapshot path, required for a planning run
    pub fn snapshot_path(&self) -> AppResult<&Path> {
        self.guest_snapshot
            .as_deref()
            .ok_or_else(|| AppError::config("GUEST_SNAPSHOT is not set"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
