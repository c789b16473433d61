//! Command-line arguments.

use std::convert::Infallible;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use monster_core::{AttackCount, GroupSize, ReferenceTable, SizeBand, Stat, TableError, TierProfile};

use crate::builder::MonsterBuilder;

/// Generate a monster stat block from a tiered reference table
#[derive(Debug, Parser)]
#[command(name = "mkmonster")]
#[command(version, long_about = None)]
#[command(after_help = values_help())]
pub struct Cli {
    /// Monster's level (int) or TIER name
    #[arg(value_name = "TIER|LEVEL")]
    pub tier: TierSelector,

    /// Number of monsters appearing together (int or COUNT label)
    #[arg(value_name = "COUNT")]
    pub size: GroupSize,

    /// Monster name
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Boost a STAT to good quality (may be repeated)
    #[arg(short, long, value_name = "STAT")]
    pub good: Vec<String>,

    /// Reduce a STAT to poor quality (may be repeated)
    #[arg(short, long, value_name = "STAT")]
    pub poor: Vec<String>,

    /// Attacks per round: an int, "area", or "dot" (damage over time)
    #[arg(short, long, value_name = "APR", default_value = "1")]
    pub apr: AttackCount,

    /// Significant defensive abilities or many resistances
    #[arg(short, long)]
    pub resist: bool,

    /// Reference table to read (overrides MKMONSTER_TABLE)
    #[arg(short, long, value_name = "PATH")]
    pub table: Option<PathBuf>,
}

impl Cli {
    /// Builder carrying every selector of this invocation.
    pub fn builder<'t>(&self, table: &'t ReferenceTable) -> MonsterBuilder<'t> {
        MonsterBuilder::new(table)
            .tier(self.tier.clone())
            .size(self.size)
            .name(self.name.clone())
            .good(self.good.iter().cloned())
            .poor(self.poor.iter().cloned())
            .attacks(self.apr)
            .resilient(self.resist)
    }
}

fn values_help() -> String {
    format!(
        "STAT values:  {}\nCOUNT values: {}\n    (STAT, TIER, and COUNT values are case-insensitive)",
        Stat::names(),
        SizeBand::defaulted_labels()
    )
}

/// Tier chosen by level or by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TierSelector {
    Level(i64),
    Name(String),
}

impl TierSelector {
    pub fn resolve<'t>(&self, table: &'t ReferenceTable) -> Result<&'t TierProfile, TableError> {
        match self {
            Self::Level(level) => table.find_by_level(*level),
            Self::Name(name) => table.find_by_name(name),
        }
    }
}

impl FromStr for TierSelector {
    type Err = Infallible;

    /// All-digit input is a level, anything else a tier name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let is_level = !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        match s.parse::<i64>() {
            Ok(level) if is_level => Ok(Self::Level(level)),
            _ => Ok(Self::Name(s.to_string())),
        }
    }
}
