use strum::EnumCount;

use super::stat::Stat;
use crate::table::Quality;

/// Current quality of each stat.
///
/// Signs only change through [`ThreatSigns::set`]; a monster owns exactly
/// one instance and every adjustment layer reads it through delegation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThreatSigns {
    qualities: [Quality; Stat::COUNT],
}

impl ThreatSigns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quality(&self, stat: Stat) -> Quality {
        self.qualities[stat.index()]
    }

    /// Sign of a stat: -1 poor, 0 average, +1 good.
    pub fn sign(&self, stat: Stat) -> i32 {
        self.quality(stat).sign()
    }

    /// Sets a stat's quality. Returns `false` if it already had that quality.
    pub fn set(&mut self, stat: Stat, quality: Quality) -> bool {
        let slot = &mut self.qualities[stat.index()];
        if *slot == quality {
            return false;
        }
        *slot = quality;
        true
    }

    /// Sum of all five signs.
    pub fn sum(&self) -> i32 {
        self.qualities.iter().map(|q| q.sign()).sum()
    }

    /// Builds signs from `(stat, quality)` pairs; later pairs win.
    pub fn from_pairs(pairs: &[(Stat, Quality)]) -> Self {
        let mut signs = Self::new();
        for &(stat, quality) in pairs {
            signs.set(stat, quality);
        }
        signs
    }
}
