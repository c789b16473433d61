//! Reference table - tiers and their quality-banded stats.
//!
//! The table is built once from loaded rows and never mutated afterwards.
//! Lookups return borrowed profiles; callers hold the table for the whole run.

pub mod band;
pub mod profile;
pub mod tier;

pub use band::{Quality, QualityBand, SizedQuality};
pub use profile::TierProfile;
pub use tier::{LevelRange, Tier};

use crate::error::TableError;

/// Ordered, immutable list of tier profiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceTable {
    profiles: Vec<TierProfile>,
}

impl ReferenceTable {
    /// Builds a table from rows in file order.
    ///
    /// Level ranges are validated when each [`LevelRange`] is constructed;
    /// an empty table is malformed.
    pub fn new(profiles: Vec<TierProfile>) -> Result<Self, TableError> {
        if profiles.is_empty() {
            return Err(TableError::malformed("table contains no tiers"));
        }
        Ok(Self { profiles })
    }

    pub fn profiles(&self) -> &[TierProfile] {
        &self.profiles
    }

    pub fn tiers(&self) -> impl Iterator<Item = &Tier> {
        self.profiles.iter().map(|p| &p.tier)
    }

    /// Case-insensitive exact match on the tier name.
    pub fn find_by_name(&self, name: &str) -> Result<&TierProfile, TableError> {
        self.profiles
            .iter()
            .find(|p| p.tier.is_named(name))
            .ok_or_else(|| TableError::UnknownTier {
                name: name.to_string(),
                valid: self.tier_names(),
            })
    }

    /// First profile whose level range contains `level`.
    pub fn find_by_level(&self, level: i64) -> Result<&TierProfile, TableError> {
        self.profiles
            .iter()
            .find(|p| p.tier.contains_level(level))
            .ok_or_else(|| TableError::LevelOutOfRange {
                level,
                covered: self.covered_levels(),
            })
    }

    /// Comma-separated tier names, in table order.
    pub fn tier_names(&self) -> String {
        self.tiers().map(Tier::name).collect::<Vec<_>>().join(", ")
    }

    fn covered_levels(&self) -> String {
        self.tiers()
            .map(|t| t.levels().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
