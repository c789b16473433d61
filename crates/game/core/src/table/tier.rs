use core::fmt;

use crate::error::TableError;

/// Inclusive level range of a tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelRange {
    pub min: i64,
    pub max: i64,
}

impl LevelRange {
    /// Creates a range, rejecting `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self, TableError> {
        if min > max {
            return Err(TableError::malformed(format!(
                "inverted level range {min}-{max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub const fn contains(&self, level: i64) -> bool {
        self.min <= level && level <= self.max
    }
}

impl fmt::Display for LevelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// A named band of challenge levels sharing a proficiency bonus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tier {
    name: String,
    levels: LevelRange,
    proficiency: i32,
}

impl Tier {
    pub fn new(name: impl Into<String>, levels: LevelRange, proficiency: i32) -> Self {
        Self {
            name: name.into(),
            levels,
            proficiency,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn levels(&self) -> LevelRange {
        self.levels
    }

    pub fn proficiency(&self) -> i32 {
        self.proficiency
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn contains_level(&self, level: i64) -> bool {
        self.levels.contains(level)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_is_malformed() {
        let err = LevelRange::new(10, 5).unwrap_err();
        assert!(matches!(err, TableError::Malformed { .. }));
        assert!(LevelRange::new(7, 7).is_ok());
    }

    #[test]
    fn tier_display_and_lookup_helpers() {
        let tier = Tier::new("Legendary", LevelRange::new(17, 20).unwrap(), 7);
        assert_eq!(tier.to_string(), "Legendary (17-20)");
        assert!(tier.is_named("LEGENDARY"));
        assert!(tier.is_named("legendary"));
        assert!(!tier.is_named("legend"));
        assert!(tier.contains_level(17));
        assert!(tier.contains_level(20));
        assert!(!tier.contains_level(21));
    }
}
