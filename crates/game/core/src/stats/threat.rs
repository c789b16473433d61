//! Threat evaluation.
//!
//! Formula: threat = Σ signs − (dc sign, when atk sign == dc sign)
//!
//! Raising (or lowering) attack and DC together counts once, not twice.

use core::fmt;

use super::signs::ThreatSigns;
use super::stat::Stat;

/// Signed threat score of a set of signs.
pub fn threat_score(signs: &ThreatSigns) -> i32 {
    let mut score = signs.sum();
    if signs.sign(Stat::Atk) == signs.sign(Stat::Dc) {
        score -= signs.sign(Stat::Dc);
    }
    score
}

/// Threat label.
///
/// | score     | level   |
/// |-----------|---------|
/// | < -3      | Trivial |
/// | -3 ..= -2 | Low     |
/// | -1 ..= 1  | Medium  |
/// | 2 ..= 3   | High    |
/// | > 3       | Extreme |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum ThreatLevel {
    Trivial,
    Low,
    Medium,
    High,
    Extreme,
}

impl ThreatLevel {
    pub const fn from_score(score: i32) -> Self {
        match score {
            i32::MIN..=-4 => Self::Trivial,
            -3..=-2 => Self::Low,
            -1..=1 => Self::Medium,
            2..=3 => Self::High,
            _ => Self::Extreme,
        }
    }
}

/// Score and label together, displayed as `Medium threat (1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Threat {
    pub score: i32,
    pub level: ThreatLevel,
}

impl Threat {
    pub fn evaluate(signs: &ThreatSigns) -> Self {
        let score = threat_score(signs);
        Self {
            score,
            level: ThreatLevel::from_score(score),
        }
    }
}

impl fmt::Display for Threat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} threat ({})", self.level, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Quality;

    #[test]
    fn coordinated_attack_and_dc_count_once() {
        let signs = ThreatSigns::from_pairs(&[(Stat::Atk, Quality::Good), (Stat::Dc, Quality::Good)]);
        assert_eq!(signs.sum(), 2);
        let threat = Threat::evaluate(&signs);
        assert_eq!(threat.score, 1);
        assert_eq!(threat.level, ThreatLevel::Medium);
        assert_eq!(threat.to_string(), "Medium threat (1)");
    }

    #[test]
    fn uncoordinated_reductions_are_trivial() {
        let signs = ThreatSigns::from_pairs(&[
            (Stat::Ac, Quality::Poor),
            (Stat::Hp, Quality::Poor),
            (Stat::Atk, Quality::Poor),
            (Stat::Dmg, Quality::Poor),
        ]);
        let threat = Threat::evaluate(&signs);
        assert_eq!(threat.score, -4);
        assert_eq!(threat.level, ThreatLevel::Trivial);
        assert_eq!(threat.to_string(), "Trivial threat (-4)");
    }

    #[test]
    fn opposed_attack_and_dc_are_not_discounted() {
        let signs = ThreatSigns::from_pairs(&[(Stat::Atk, Quality::Good), (Stat::Dc, Quality::Poor)]);
        assert_eq!(threat_score(&signs), 0);
    }

    #[test]
    fn everything_good_is_extreme() {
        let signs = ThreatSigns::from_pairs(&[
            (Stat::Ac, Quality::Good),
            (Stat::Hp, Quality::Good),
            (Stat::Atk, Quality::Good),
            (Stat::Dc, Quality::Good),
            (Stat::Dmg, Quality::Good),
        ]);
        assert_eq!(threat_score(&signs), 4);
        assert_eq!(ThreatLevel::from_score(4), ThreatLevel::Extreme);
    }

    #[test]
    fn level_boundaries() {
        let cases = [
            (-5, ThreatLevel::Trivial),
            (-4, ThreatLevel::Trivial),
            (-3, ThreatLevel::Low),
            (-2, ThreatLevel::Low),
            (-1, ThreatLevel::Medium),
            (0, ThreatLevel::Medium),
            (1, ThreatLevel::Medium),
            (2, ThreatLevel::High),
            (3, ThreatLevel::High),
            (4, ThreatLevel::Extreme),
        ];
        for (score, level) in cases {
            assert_eq!(ThreatLevel::from_score(score), level, "score {score}");
        }
    }
}
