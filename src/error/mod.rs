//! Error types for the datadeck library.
//!
//! Runtime data problems (bad cells, unparseable filter input) never surface
//! here; those degrade to empty cells or non-matches. `DeckError` covers the
//! genuinely fallible surfaces: chart model construction and layout
//! persistence.

use thiserror::Error;

/// Unified library error.
#[derive(Debug, Error)]
pub enum DeckError {
    /// A chart or table operation referenced a column id that is not defined.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// A chart was configured without any usable series.
    #[error("chart has no series: {0}")]
    EmptyChart(String),

    /// Layout profile persistence failed.
    #[error("layout storage failed for profile '{profile}': {message}")]
    Storage { profile: String, message: String },
}

/// Result alias for datadeck operations.
pub type DeckResult<T> = Result<T, DeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = DeckError::UnknownColumn("ghost".into());
        assert_eq!(err.to_string(), "unknown column 'ghost'");

        let err = DeckError::Storage {
            profile: "sales".into(),
            message: "disk full".into(),
        };
        assert!(err.to_string().contains("sales"));
        assert!(err.to_string().contains("disk full"));
    }
}
