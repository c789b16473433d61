//! Text rendering of a resolved monster.
//!
//! ```text
//!     Ogre Chief
//! ━━━━━━━━━━━━━━━━━━━
//!  Legendary (17-20)
//!     Party (3-5)
//!  Medium threat (1)
//! ━━━━━━━━━┯━━━━━━━━━
//! Prof: +7 │ DC:   21
//! AC:   19 │ HP:  108
//! Atk: +13 │ Dmg:  13
//! ```
//!
//! Labels are 5 wide and values 3 wide. A name longer than the block widens
//! it; the value columns absorb the extra width.

use core::fmt;

use crate::size::GroupSize;
use crate::stats::{Threat, ThreatSigns};
use crate::table::Tier;

const VERTICAL_RULE: &str = " │ ";
const RULE: char = '━';
const RULE_JOINT: &str = "━┯━";

const LABEL_WIDTH: usize = 5;
const VALUE_WIDTH: usize = 3;

/// Resolved, displayable view of a monster chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonsterSnapshot {
    pub name: Option<String>,
    pub tier: Tier,
    pub size: GroupSize,
    pub ac: i32,
    pub hp: i32,
    pub atk: i32,
    pub dc: i32,
    pub dmg: i32,
    pub signs: ThreatSigns,
}

impl MonsterSnapshot {
    pub fn threat(&self) -> Threat {
        Threat::evaluate(&self.signs)
    }

    /// Multi-line text block, newline-terminated.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Column widths of one rendering.
struct Layout {
    total: usize,
    rule_left: usize,
    rule_right: usize,
    left_value: usize,
    right_value: usize,
}

impl Layout {
    fn for_name(name: Option<&str>) -> Self {
        let joint = RULE_JOINT.chars().count();
        let rule_left = LABEL_WIDTH + VALUE_WIDTH;
        let total = rule_left * 2 + joint;
        let layout = Self {
            total,
            rule_left,
            rule_right: total - rule_left - joint,
            left_value: VALUE_WIDTH,
            right_value: VALUE_WIDTH,
        };

        let name_width = name.map_or(0, |n| n.chars().count());
        if name_width <= total {
            return layout;
        }

        let rule_left = (name_width - joint) / 2;
        let rule_right = name_width - rule_left - joint;
        Self {
            total: name_width,
            rule_left,
            rule_right,
            left_value: rule_left - LABEL_WIDTH,
            right_value: rule_right - LABEL_WIDTH,
        }
    }

    fn centered(&self, f: &mut fmt::Formatter<'_>, text: &dyn fmt::Display) -> fmt::Result {
        writeln!(f, "{:^width$}", text.to_string(), width = self.total)
    }

    fn rule(&self, f: &mut fmt::Formatter<'_>, len: usize) -> fmt::Result {
        (0..len).try_for_each(|_| write!(f, "{RULE}"))
    }

    fn row(
        &self,
        f: &mut fmt::Formatter<'_>,
        left: (&str, String),
        right: (&str, String),
    ) -> fmt::Result {
        writeln!(
            f,
            "{:<lw$}{:>lv$}{VERTICAL_RULE}{:<lw$}{:>rv$}",
            left.0,
            left.1,
            right.0,
            right.1,
            lw = LABEL_WIDTH,
            lv = self.left_value,
            rv = self.right_value,
        )
    }
}

impl fmt::Display for MonsterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = Layout::for_name(self.name.as_deref());

        if let Some(name) = &self.name {
            layout.centered(f, name)?;
            layout.rule(f, layout.total)?;
            writeln!(f)?;
        }

        layout.centered(f, &self.tier)?;
        layout.centered(f, &self.size)?;
        layout.centered(f, &self.threat())?;

        layout.rule(f, layout.rule_left)?;
        f.write_str(RULE_JOINT)?;
        layout.rule(f, layout.rule_right)?;
        writeln!(f)?;

        layout.row(
            f,
            ("Prof:", format!("+{}", self.tier.proficiency())),
            ("DC:", self.dc.to_string()),
        )?;
        layout.row(f, ("AC:", self.ac.to_string()), ("HP:", self.hp.to_string()))?;
        layout.row(
            f,
            ("Atk:", format!("+{}", self.atk)),
            ("Dmg:", self.dmg.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stat;
    use crate::table::{LevelRange, Quality};

    fn snapshot(name: Option<&str>) -> MonsterSnapshot {
        MonsterSnapshot {
            name: name.map(str::to_string),
            tier: Tier::new("Legendary", LevelRange { min: 17, max: 20 }, 7),
            size: GroupSize::from_count(4),
            ac: 19,
            hp: 108,
            atk: 13,
            dc: 21,
            dmg: 13,
            signs: ThreatSigns::from_pairs(&[(Stat::Atk, Quality::Good), (Stat::Dc, Quality::Good)]),
        }
    }

    #[test]
    fn renders_without_name() {
        let expected = concat!(
            " Legendary (17-20) \n",
            "    Party (3-5)    \n",
            " Medium threat (1) \n",
            "━━━━━━━━━┯━━━━━━━━━\n",
            "Prof: +7 │ DC:   21\n",
            "AC:   19 │ HP:  108\n",
            "Atk: +13 │ Dmg:  13\n",
        );
        assert_eq!(snapshot(None).render(), expected);
    }

    #[test]
    fn short_names_keep_the_default_width() {
        let text = snapshot(Some("Ogre")).render();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("       Ogre        "));
        assert_eq!(lines.next(), Some("━━━━━━━━━━━━━━━━━━━"));
        assert_eq!(lines.next(), Some(" Legendary (17-20) "));
    }

    #[test]
    fn long_names_widen_the_block() {
        let name = "Ancient Shadow Dragon Wyrm";
        let text = snapshot(Some(name)).render();
        let width = name.chars().count();
        for line in text.lines() {
            assert_eq!(line.chars().count(), width, "line {line:?}");
        }
        assert!(text.starts_with(name));
        assert!(text.contains("\n━━━━━━━━━━━━┯━━━━━━━━━━━━━\n"));
        assert!(text.contains("\n    Legendary (17-20)     \n"));
        assert!(text.ends_with("Atk:    +13 │ Dmg:      13\n"));
    }

    #[test]
    fn every_line_has_the_block_width() {
        for line in snapshot(None).render().lines() {
            assert_eq!(line.chars().count(), 19, "line {line:?}");
        }
    }
}
