//! Adjustment layers.
//!
//! An [`Adjustment`] rewrites the values of the stats it cares about and
//! returns every other value untouched. [`Adjusted`] pairs one adjustment with
//! the monster it wraps and forwards everything else.

use core::num::NonZeroU32;
use core::str::FromStr;

use super::Monster;
use crate::error::SelectorError;
use crate::size::GroupSize;
use crate::stats::{Stat, ThreatSigns};
use crate::table::{Quality, Tier};

/// A stat override applied on top of a wrapped monster.
pub trait Adjustment {
    /// Value of `stat` given the wrapped monster's `value`.
    fn apply(&self, stat: Stat, value: i32) -> i32;
}

/// A monster wrapped by one adjustment layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Adjusted<A, M> {
    inner: M,
    adjustment: A,
}

impl<A: Adjustment, M: Monster> Adjusted<A, M> {
    pub fn new(inner: M, adjustment: A) -> Self {
        Self { inner, adjustment }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn adjustment(&self) -> &A {
        &self.adjustment
    }
}

impl<A: Adjustment, M: Monster> Monster for Adjusted<A, M> {
    fn name(&self) -> Option<&str> {
        self.inner.name()
    }

    fn tier(&self) -> &Tier {
        self.inner.tier()
    }

    fn size(&self) -> GroupSize {
        self.inner.size()
    }

    fn stat(&self, stat: Stat) -> i32 {
        self.adjustment.apply(stat, self.inner.stat(stat))
    }

    fn signs(&self) -> &ThreatSigns {
        self.inner.signs()
    }

    fn set_quality(&mut self, stat: Stat, quality: Quality) -> bool {
        self.inner.set_quality(stat, quality)
    }
}

/// Attacks per round: splits one round of damage across several strikes.
///
/// Parses from a positive integer, `area` (2) or `dot` (1, damage over time).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackCount(NonZeroU32);

impl AttackCount {
    pub const SINGLE: Self = Self(NonZeroU32::MIN);
    pub const AREA: Self = Self(NonZeroU32::new(2).unwrap());
    pub const DAMAGE_OVER_TIME: Self = Self::SINGLE;

    pub const fn new(attacks: NonZeroU32) -> Self {
        Self(attacks)
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for AttackCount {
    fn default() -> Self {
        Self::SINGLE
    }
}

impl Adjustment for AttackCount {
    /// `dmg // attacks`, floored.
    fn apply(&self, stat: Stat, value: i32) -> i32 {
        match stat {
            Stat::Dmg => {
                let attacks = i64::from(self.get());
                // Result magnitude never exceeds |value|, so it fits in i32.
                i64::from(value).div_euclid(attacks) as i32
            }
            _ => value,
        }
    }
}

impl FromStr for AttackCount {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            return s
                .parse::<NonZeroU32>()
                .map(Self)
                .map_err(|_| SelectorError::InvalidAttacksPerRound(s.to_string()));
        }
        match s.to_lowercase().as_str() {
            "area" => Ok(Self::AREA),
            "dot" => Ok(Self::DAMAGE_OVER_TIME),
            _ => Err(SelectorError::InvalidAttacksPerRound(s.to_string())),
        }
    }
}

/// Heavy resistances or defenses, folded into a flat hit point discount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resilience;

impl Adjustment for Resilience {
    /// `hp // 2`, floored.
    fn apply(&self, stat: Stat, value: i32) -> i32 {
        match stat {
            Stat::Hp => value.div_euclid(2),
            _ => value,
        }
    }
}
