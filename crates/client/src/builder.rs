//! Monster builder: composes the adjustment chain in its fixed order.

use anyhow::{Context, Result};
use monster_core::{
    AttackCount, BaseMonster, GroupSize, Monster, ReferenceTable, Resilience,
};

use crate::args::TierSelector;

/// Builder for one monster generation.
///
/// # Design Principles
///
/// - **Required fields**: tier and size must be provided
/// - **Fixed order**: quality boosts, then reductions, then attack count,
///   then resilience
/// - **Fail-fast validation**: missing fields and unknown tiers fail `build()`
pub struct MonsterBuilder<'t> {
    table: &'t ReferenceTable,
    tier: Option<TierSelector>,
    size: Option<GroupSize>,
    name: Option<String>,
    good: Vec<String>,
    poor: Vec<String>,
    attacks: AttackCount,
    resilient: bool,
}

impl<'t> MonsterBuilder<'t> {
    /// Create a new builder over a loaded table.
    pub fn new(table: &'t ReferenceTable) -> Self {
        Self {
            table,
            tier: None,
            size: None,
            name: None,
            good: Vec::new(),
            poor: Vec::new(),
            attacks: AttackCount::default(),
            resilient: false,
        }
    }

    /// Set the tier or level (required).
    pub fn tier(mut self, tier: TierSelector) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Set the group size (required).
    pub fn size(mut self, size: GroupSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the display name (optional).
    pub fn name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Stats to boost to good quality. Unknown names are ignored.
    pub fn good<I, S>(mut self, stats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.good.extend(stats.into_iter().map(Into::into));
        self
    }

    /// Stats to reduce to poor quality. Unknown names are ignored.
    pub fn poor<I, S>(mut self, stats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.poor.extend(stats.into_iter().map(Into::into));
        self
    }

    /// Set attacks per round (default: one).
    pub fn attacks(mut self, attacks: AttackCount) -> Self {
        self.attacks = attacks;
        self
    }

    /// Mark the monster as heavily resistant.
    pub fn resilient(mut self, resilient: bool) -> Self {
        self.resilient = resilient;
        self
    }

    /// Build the adjustment chain.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Tier or size is not set
    /// - The tier name or level is not in the table
    pub fn build(self) -> Result<Box<dyn Monster>> {
        let tier = self
            .tier
            .context("Tier is required. Use .tier() to set it.")?;
        let size = self
            .size
            .context("Size is required. Use .size() to set it.")?;

        let profile = tier.resolve(self.table)?;
        tracing::debug!(tier = %profile.tier, size = %size, "building base monster");

        if size.band().is_none() {
            tracing::warn!(
                count = size.count(),
                "count is outside every size band; hit points and damage fall back to 1"
            );
        }

        let mut monster: Box<dyn Monster> = Box::new(BaseMonster::build(profile, size, self.name));

        for stat in &self.good {
            monster.set_good(stat);
        }
        for stat in &self.poor {
            monster.set_poor(stat);
        }

        tracing::debug!(attacks = self.attacks.get(), "applying attack count");
        monster = Box::new(monster.adjusted(self.attacks));

        if self.resilient {
            tracing::debug!("applying resilience");
            monster = Box::new(monster.adjusted(Resilience));
        }

        Ok(monster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monster_content::TablesLoader;
    use monster_core::Stat;

    fn table() -> ReferenceTable {
        TablesLoader::bundled().unwrap()
    }

    #[test]
    fn tier_and_size_are_required() {
        let table = table();
        let err = MonsterBuilder::new(&table)
            .size(GroupSize::from_count(1))
            .build()
            .err()
            .unwrap();
        assert!(err.to_string().contains("Tier is required"));

        let err = MonsterBuilder::new(&table)
            .tier(TierSelector::Level(3))
            .build()
            .err()
            .unwrap();
        assert!(err.to_string().contains("Size is required"));
    }

    #[test]
    fn reductions_are_applied_after_boosts() {
        let table = table();
        let monster = MonsterBuilder::new(&table)
            .tier(TierSelector::Level(5))
            .size(GroupSize::from_count(1))
            .good(["ac"])
            .poor(["ac"])
            .build()
            .unwrap();
        assert_eq!(monster.signs().sign(Stat::Ac), -1);
    }

    #[test]
    fn defaults_leave_the_base_untouched() {
        let table = table();
        let profile = table.find_by_level(12).unwrap();
        let monster = MonsterBuilder::new(&table)
            .tier(TierSelector::Level(12))
            .size(GroupSize::from_count(2))
            .build()
            .unwrap();
        assert_eq!(monster.hp(), profile.hp.pair.average);
        assert_eq!(monster.dmg(), profile.dmg.pair.average);
        assert_eq!(monster.threat().score, 0);
    }
}
