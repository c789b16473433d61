//! Quality bands - the three values a stat can take at one tier.

use crate::size::SizeBand;

/// Quality setting of a single stat.
///
/// Each quality carries a sign used by the threat evaluator:
/// poor = -1, average = 0, good = +1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Quality {
    Poor,
    #[default]
    Average,
    Good,
}

impl Quality {
    /// Threat sign of this quality.
    pub const fn sign(self) -> i32 {
        match self {
            Self::Poor => -1,
            Self::Average => 0,
            Self::Good => 1,
        }
    }
}

/// Poor/average/good values for one stat at one tier (and size, for hp/dmg).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualityBand {
    pub poor: i32,
    pub average: i32,
    pub good: i32,
}

impl QualityBand {
    /// Band used for counts that fall outside every size band.
    pub const DEGENERATE: Self = Self::new(1, 1, 1);

    pub const fn new(poor: i32, average: i32, good: i32) -> Self {
        Self {
            poor,
            average,
            good,
        }
    }

    /// Value selected by a quality.
    pub const fn pick(&self, quality: Quality) -> i32 {
        match quality {
            Quality::Poor => self.poor,
            Quality::Average => self.average,
            Quality::Good => self.good,
        }
    }
}

/// Per-size quality bands, used by hit points and damage only.
///
/// There is no army slot: army-sized groups reuse the mob band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizedQuality {
    pub solo: QualityBand,
    pub pair: QualityBand,
    pub party: QualityBand,
    pub gang: QualityBand,
    pub mob: QualityBand,
}

impl SizedQuality {
    /// Band for a size class.
    ///
    /// `None` (a non-positive count) yields [`QualityBand::DEGENERATE`].
    pub fn for_band(&self, band: Option<SizeBand>) -> QualityBand {
        match band {
            Some(SizeBand::Solo) => self.solo,
            Some(SizeBand::Pair) => self.pair,
            Some(SizeBand::Party) => self.party,
            Some(SizeBand::Gang) => self.gang,
            Some(SizeBand::Mob | SizeBand::Army) => self.mob,
            None => QualityBand::DEGENERATE,
        }
    }

    /// Band for a raw group count.
    pub fn for_count(&self, count: i64) -> QualityBand {
        self.for_band(SizeBand::classify(count))
    }
}
