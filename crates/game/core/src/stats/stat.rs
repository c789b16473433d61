/// A stat whose quality can be adjusted.
///
/// Names parse case-insensitively (`ac`, `HP`, `Dmg`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Stat {
    /// Armor class
    Ac,
    /// Hit points
    Hp,
    /// Attack bonus
    Atk,
    /// Difficulty class
    Dc,
    /// Damage per round
    Dmg,
}

impl Stat {
    /// Position in per-stat arrays.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Upper-case names of every stat, for help output.
    pub fn names() -> String {
        use strum::IntoEnumIterator;

        Self::iter()
            .map(|stat| stat.as_ref().to_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
