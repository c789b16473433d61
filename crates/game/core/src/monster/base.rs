use strum::EnumCount;

use super::Monster;
use crate::size::GroupSize;
use crate::stats::{Stat, ThreatSigns};
use crate::table::{Quality, QualityBand, Tier, TierProfile};

/// Root of the adjustment chain.
///
/// Bands are resolved once at construction from the profile and the group
/// size; a stat's value is always its band's entry for the current sign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseMonster {
    name: Option<String>,
    tier: Tier,
    size: GroupSize,
    bands: [QualityBand; Stat::COUNT],
    signs: ThreatSigns,
}

impl BaseMonster {
    /// Average-quality monster for a tier and group size.
    pub fn build(profile: &TierProfile, size: GroupSize, name: Option<String>) -> Self {
        let band = size.band();
        Self {
            name,
            tier: profile.tier.clone(),
            size,
            bands: [
                profile.band(Stat::Ac, band),
                profile.band(Stat::Hp, band),
                profile.band(Stat::Atk, band),
                profile.band(Stat::Dc, band),
                profile.band(Stat::Dmg, band),
            ],
            signs: ThreatSigns::new(),
        }
    }

    /// Band a stat reads from.
    pub fn band(&self, stat: Stat) -> QualityBand {
        self.bands[stat.index()]
    }
}

impl Monster for BaseMonster {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn tier(&self) -> &Tier {
        &self.tier
    }

    fn size(&self) -> GroupSize {
        self.size
    }

    fn stat(&self, stat: Stat) -> i32 {
        self.band(stat).pick(self.signs.quality(stat))
    }

    fn signs(&self) -> &ThreatSigns {
        &self.signs
    }

    fn set_quality(&mut self, stat: Stat, quality: Quality) -> bool {
        self.signs.set(stat, quality)
    }
}
