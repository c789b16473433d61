//! Monster stat generation rules and data types.
//!
//! `monster-core` defines the reference table, group-size classification, the
//! monster adjustment chain, threat evaluation and text rendering. It performs
//! no I/O: tables arrive already parsed (see `monster-content`) and rendering
//! produces a `String`.
//!
//! A generation runs leaf to root:
//!
//! ```text
//! ReferenceTable → BaseMonster → set_good / set_poor
//!                → Adjusted<AttackCount> → Adjusted<Resilience>
//!                → MonsterSnapshot (threat + render)
//! ```
pub mod error;
pub mod monster;
pub mod render;
pub mod size;
pub mod stats;
pub mod table;

pub use error::{ErrorSeverity, MonsterError, SelectorError, TableError};
pub use monster::{Adjusted, Adjustment, AttackCount, BaseMonster, Monster, Resilience};
pub use render::MonsterSnapshot;
pub use size::{DisplayRange, GroupSize, SizeBand};
pub use stats::{Stat, Threat, ThreatLevel, ThreatSigns, threat_score};
pub use table::{
    LevelRange, Quality, QualityBand, ReferenceTable, SizedQuality, Tier, TierProfile,
};
