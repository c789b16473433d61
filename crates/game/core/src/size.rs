//! Group-size classification.
//!
//! Two tables live here and are intentionally kept apart:
//!
//! - the **selection** ranges, used to pick hp/damage bands
//!   (solo 1, pair 2, party 3-6, gang 7-10, mob 11-20, army 21+);
//! - the **display** ranges, used for labels and label defaults
//!   (solo 1, pair 2, party 3-5 avg 4, gang 7-10 avg 8, mob 11-20 avg 16,
//!   army 21+ with no default).
//!
//! A count of 6 therefore selects party bands but has no display label.

use core::fmt;
use core::str::FromStr;

use crate::error::SelectorError;

/// Group-size category.
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
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SizeBand {
    Solo,
    Pair,
    Party,
    Gang,
    Mob,
    Army,
}

/// Display entry for a size band: inclusive range and label default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayRange {
    pub min: i64,
    /// `None` is unbounded.
    pub max: Option<i64>,
    /// Count used when the band is selected by label.
    pub default: Option<i64>,
}

impl DisplayRange {
    const fn new(min: i64, max: Option<i64>, default: Option<i64>) -> Self {
        Self { min, max, default }
    }

    pub fn contains(&self, count: i64) -> bool {
        self.min <= count && self.max.is_none_or(|max| count <= max)
    }
}

impl SizeBand {
    /// Selection band for a raw count.
    ///
    /// Total over every `i64`: non-positive counts have no band and
    /// everything above 20 is an army.
    pub const fn classify(count: i64) -> Option<Self> {
        match count {
            i64::MIN..=0 => None,
            1 => Some(Self::Solo),
            2 => Some(Self::Pair),
            3..=6 => Some(Self::Party),
            7..=10 => Some(Self::Gang),
            11..=20 => Some(Self::Mob),
            _ => Some(Self::Army),
        }
    }

    /// Display range of this band.
    pub const fn display_range(self) -> DisplayRange {
        match self {
            Self::Solo => DisplayRange::new(1, Some(1), Some(1)),
            Self::Pair => DisplayRange::new(2, Some(2), Some(2)),
            Self::Party => DisplayRange::new(3, Some(5), Some(4)),
            Self::Gang => DisplayRange::new(7, Some(10), Some(8)),
            Self::Mob => DisplayRange::new(11, Some(20), Some(16)),
            Self::Army => DisplayRange::new(21, None, None),
        }
    }

    /// Band whose display range contains `count`, if any.
    pub fn display_band(count: i64) -> Option<Self> {
        use strum::IntoEnumIterator;

        Self::iter().find(|band| band.display_range().contains(count))
    }

    /// Count a label stands for.
    ///
    /// Bands without a display default (army) stand for their first count.
    pub const fn label_count(self) -> i64 {
        let range = self.display_range();
        match range.default {
            Some(count) => count,
            None => range.min,
        }
    }

    /// Capitalized label, e.g. `Party`.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Solo => "Solo",
            Self::Pair => "Pair",
            Self::Party => "Party",
            Self::Gang => "Gang",
            Self::Mob => "Mob",
            Self::Army => "Army",
        }
    }

    /// Upper-case labels that have a display default, for help output.
    pub fn defaulted_labels() -> String {
        use strum::IntoEnumIterator;

        Self::iter()
            .filter(|band| band.display_range().default.is_some())
            .map(|band| band.as_ref().to_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A group count together with its selection band.
///
/// The band is classified once here and reused for every hp/dmg lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupSize {
    count: i64,
    band: Option<SizeBand>,
}

impl GroupSize {
    pub const fn from_count(count: i64) -> Self {
        Self {
            count,
            band: SizeBand::classify(count),
        }
    }

    pub const fn from_label(band: SizeBand) -> Self {
        Self::from_count(band.label_count())
    }

    pub const fn count(&self) -> i64 {
        self.count
    }

    /// Selection band, `None` for non-positive counts.
    pub const fn band(&self) -> Option<SizeBand> {
        self.band
    }
}

impl fmt::Display for GroupSize {
    /// Formats with the display table: `Solo (1)`, `Party (3-5)`, `Army (21+)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(band) = SizeBand::display_band(self.count) else {
            return write!(f, "Uncountable ({})", self.count);
        };
        let range = band.display_range();
        match range.max {
            None => write!(f, "{} ({}+)", band.title(), range.min),
            Some(max) if max == range.min => write!(f, "{} ({})", band.title(), max),
            Some(max) => write!(f, "{} ({}-{})", band.title(), range.min, max),
        }
    }
}

impl FromStr for GroupSize {
    type Err = SelectorError;

    /// All-digit input is a count, anything else a band label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            return s
                .parse::<i64>()
                .map(Self::from_count)
                .map_err(|e| SelectorError::InvalidCount(format!("{s}: {e}")));
        }
        s.parse::<SizeBand>()
            .map(Self::from_label)
            .map_err(|_| SelectorError::UnknownSizeLabel {
                label: s.to_lowercase(),
                valid: SizeBand::defaulted_labels(),
            })
    }
}
