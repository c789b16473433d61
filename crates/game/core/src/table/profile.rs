use super::band::{QualityBand, SizedQuality};
use super::tier::Tier;
use crate::size::SizeBand;
use crate::stats::Stat;

/// One row of the reference table: a tier and its stat bands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierProfile {
    pub tier: Tier,
    pub ac: QualityBand,
    pub hp: SizedQuality,
    pub atk: QualityBand,
    pub dc: QualityBand,
    pub dmg: SizedQuality,
}

impl TierProfile {
    /// Band of `stat` for a group classified as `size`.
    ///
    /// `size` only matters for hit points and damage.
    pub fn band(&self, stat: Stat, size: Option<SizeBand>) -> QualityBand {
        match stat {
            Stat::Ac => self.ac,
            Stat::Hp => self.hp.for_band(size),
            Stat::Atk => self.atk,
            Stat::Dc => self.dc,
            Stat::Dmg => self.dmg.for_band(size),
        }
    }
}
