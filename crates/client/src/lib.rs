//! Monster stat block generator.
//!
//! # Architecture
//!
//! ```text
//! mkmonster (binary, composition root)
//!   ├─→ GeneratorConfig (environment + .env)
//!   ├─→ TablesLoader    (monster-content: JSON reference table)
//!   ├─→ Cli             (selectors, validated before anything is loaded)
//!   └─→ MonsterBuilder  (monster-core: base → quality → attack count → resilience)
//! ```

pub mod args;
mod builder;
pub mod config;
pub mod logging;

pub use args::{Cli, TierSelector};
pub use builder::MonsterBuilder;
pub use config::GeneratorConfig;

use anyhow::Result;
use monster_core::ReferenceTable;

/// Builds the monster described by `cli` and renders its stat block.
pub fn generate(cli: &Cli, table: &ReferenceTable) -> Result<String> {
    let monster = cli.builder(table).build()?;
    let snapshot = monster.snapshot();

    tracing::info!(
        tier = %snapshot.tier,
        size = %snapshot.size,
        threat = snapshot.threat().score,
        "monster generated"
    );

    Ok(snapshot.render())
}
