//! Common error infrastructure for monster-core.
//!
//! Reference-table failures live in [`TableError`]; command selectors that
//! cannot be interpreted live in [`SelectorError`]. Both are classified by an
//! [`ErrorSeverity`] so callers can decide how loudly to report them.
//!
//! Unknown stat names given to quality adjustments are deliberately absent
//! from this taxonomy: they are ignored, not reported.

/// Severity level of an error, used for categorization and exit handling.
///
/// - **Validation**: invalid user input, rejected before any computation
/// - **Fatal**: reference data is unusable, the run cannot start
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid input that should not be retried without changes.
    ///
    /// Examples: unknown tier name, level outside every tier, bad size label
    Validation,

    /// Unusable reference data.
    ///
    /// Examples: missing keys, inverted level range, not a JSON array
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all monster-core errors.
pub trait MonsterError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Errors raised while building or querying the reference table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A row is missing fields, has the wrong shape, or an inverted range.
    #[error("malformed reference table: {reason}")]
    Malformed { reason: String },

    /// No tier carries the requested name.
    #[error("unrecognized tier: {name} (valid tiers: {valid})")]
    UnknownTier { name: String, valid: String },

    /// No tier's level range contains the requested level.
    #[error("level \"{level}\" not in range (tiers cover {covered})")]
    LevelOutOfRange { level: i64, covered: String },
}

impl TableError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

impl MonsterError for TableError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Malformed { .. } => ErrorSeverity::Fatal,
            Self::UnknownTier { .. } | Self::LevelOutOfRange { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "TABLE_MALFORMED",
            Self::UnknownTier { .. } => "TABLE_UNKNOWN_TIER",
            Self::LevelOutOfRange { .. } => "TABLE_LEVEL_OUT_OF_RANGE",
        }
    }
}

/// Errors raised while interpreting a group-size or attacks-per-round selector.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("unrecognized count label: {label} (expected a number or one of {valid})")]
    UnknownSizeLabel { label: String, valid: String },

    #[error("invalid count: {0}")]
    InvalidCount(String),

    #[error("invalid attacks per round: {0} (must be an integer of at least 1, \"area\", or \"dot\")")]
    InvalidAttacksPerRound(String),
}

impl MonsterError for SelectorError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSizeLabel { .. } => "SELECTOR_UNKNOWN_SIZE_LABEL",
            Self::InvalidCount(_) => "SELECTOR_INVALID_COUNT",
            Self::InvalidAttacksPerRound(_) => "SELECTOR_INVALID_APR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_errors_are_classified() {
        let malformed = TableError::malformed("row 0: missing field `prof`");
        assert_eq!(malformed.severity(), ErrorSeverity::Fatal);
        assert_eq!(malformed.error_code(), "TABLE_MALFORMED");

        let unknown = TableError::UnknownTier {
            name: "Mythic".into(),
            valid: "Novice, Legendary".into(),
        };
        assert_eq!(unknown.severity(), ErrorSeverity::Validation);
        assert_eq!(
            unknown.to_string(),
            "unrecognized tier: Mythic (valid tiers: Novice, Legendary)"
        );
    }

    #[test]
    fn selector_errors_are_validation() {
        let err = SelectorError::InvalidAttacksPerRound("0".into());
        assert_eq!(err.severity().as_str(), "validation");
        assert!(err.to_string().contains("\"area\""));
    }
}
