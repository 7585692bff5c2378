//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 1xxx: Venue errors
/// - 2xxx: Guest errors
/// - 3xxx: Allocation errors
/// - everything else: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Venue layout and table errors (1xxx)
    Venue,
    /// Guest record and party errors (2xxx)
    Guest,
    /// Allocation errors (3xxx)
    Allocation,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Venue,
            2000..3000 => Self::Guest,
            3000..4000 => Self::Allocation,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Venue => "venue",
            Self::Guest => "guest",
            Self::Allocation => "allocation",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Venue);
        assert_eq!(ErrorCategory::from_code(2004), ErrorCategory::Guest);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Allocation);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::DuplicateTable.category(), ErrorCategory::Venue);
        assert_eq!(ErrorCode::PartyTooSmall.category(), ErrorCategory::Guest);
        assert_eq!(ErrorCode::NoFitFound.category(), ErrorCategory::Allocation);
        assert_eq!(ErrorCode::ConfigError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Allocation).unwrap();
        assert_eq!(json, "\"allocation\"");

        let category: ErrorCategory = serde_json::from_str("\"venue\"").unwrap();
        assert_eq!(category, ErrorCategory::Venue);
        assert_eq!(category.name(), "venue");
    }
}
