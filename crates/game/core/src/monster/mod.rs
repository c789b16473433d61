//! Monster chain - a base stat block wrapped by adjustment layers.
//!
//! # Architecture
//!
//! ```text
//! [ BaseMonster ]            average bands for tier + size, owns ThreatSigns
//!      ↓
//! [ quality adjustments ]    set_good / set_poor, mutate the one sign map
//!      ↓
//! [ Adjusted<AttackCount> ]  dmg // attacks per round
//!      ↓
//! [ Adjusted<Resilience> ]   hp // 2
//! ```
//!
//! Every layer implements [`Monster`]. A layer overrides only the stats its
//! [`Adjustment`] touches and forwards everything else, including quality
//! changes, to the monster it wraps. The sign map lives in the base and is
//! never copied, so a change made through any layer is seen by all of them.

pub mod adjustments;
pub mod base;

pub use adjustments::{Adjusted, Adjustment, AttackCount, Resilience};
pub use base::BaseMonster;

use crate::render::MonsterSnapshot;
use crate::size::GroupSize;
use crate::stats::{Stat, Threat, ThreatSigns};
use crate::table::{Quality, Tier};

/// Read access to a monster's stats plus quality adjustment.
pub trait Monster {
    fn name(&self) -> Option<&str>;

    fn tier(&self) -> &Tier;

    fn size(&self) -> GroupSize;

    /// Current value of a stat after every layer up to this one.
    fn stat(&self, stat: Stat) -> i32;

    /// The sign map shared by the whole chain.
    fn signs(&self) -> &ThreatSigns;

    /// Moves a stat to `quality`. Returns `false` if it already had it.
    fn set_quality(&mut self, stat: Stat, quality: Quality) -> bool;

    fn ac(&self) -> i32 {
        self.stat(Stat::Ac)
    }

    fn hp(&self) -> i32 {
        self.stat(Stat::Hp)
    }

    fn atk(&self) -> i32 {
        self.stat(Stat::Atk)
    }

    fn dc(&self) -> i32 {
        self.stat(Stat::Dc)
    }

    fn dmg(&self) -> i32 {
        self.stat(Stat::Dmg)
    }

    fn proficiency(&self) -> i32 {
        self.tier().proficiency()
    }

    /// Boosts a stat, named case-insensitively, to good quality.
    ///
    /// Unknown names are ignored.
    fn set_good(&mut self, stat: &str) {
        set_named(self, stat, Quality::Good);
    }

    /// Reduces a stat, named case-insensitively, to poor quality.
    ///
    /// Unknown names are ignored.
    fn set_poor(&mut self, stat: &str) {
        set_named(self, stat, Quality::Poor);
    }

    /// Threat recomputed from the current signs.
    fn threat(&self) -> Threat {
        Threat::evaluate(self.signs())
    }

    /// Wraps this monster in an adjustment layer.
    fn adjusted<A: Adjustment>(self, adjustment: A) -> Adjusted<A, Self>
    where
        Self: Sized,
    {
        Adjusted::new(self, adjustment)
    }

    /// Resolves every stat into a displayable snapshot.
    fn snapshot(&self) -> MonsterSnapshot {
        MonsterSnapshot {
            name: self.name().map(str::to_string),
            tier: self.tier().clone(),
            size: self.size(),
            ac: self.ac(),
            hp: self.hp(),
            atk: self.atk(),
            dc: self.dc(),
            dmg: self.dmg(),
            signs: *self.signs(),
        }
    }
}

fn set_named<M: Monster + ?Sized>(monster: &mut M, name: &str, quality: Quality) {
    match name.parse::<Stat>() {
        Ok(stat) => {
            if monster.set_quality(stat, quality) {
                tracing::debug!(%stat, %quality, "stat quality changed");
            }
        }
        Err(_) => tracing::debug!(stat = name, "ignoring unknown stat"),
    }
}

impl<M: Monster + ?Sized> Monster for Box<M> {
    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn tier(&self) -> &Tier {
        (**self).tier()
    }

    fn size(&self) -> GroupSize {
        (**self).size()
    }

    fn stat(&self, stat: Stat) -> i32 {
        (**self).stat(stat)
    }

    fn signs(&self) -> &ThreatSigns {
        (**self).signs()
    }

    fn set_quality(&mut self, stat: Stat, quality: Quality) -> bool {
        (**self).set_quality(stat, quality)
    }
}
