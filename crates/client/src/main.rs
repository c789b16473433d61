//! mkmonster binary.
//!
//! Main entry point: reads configuration, loads the reference table and
//! prints one monster stat block.
//!
//! # Examples
//!
//! ```bash
//! # Level 18 party of four, accurate and hard to resist, two attacks
//! mkmonster 18 4 "Ogre Chief" -g atk -g dc --apr 2
//!
//! # Use another table
//! MKMONSTER_TABLE=tables/gritty.json mkmonster veteran mob --resist
//! ```

use anyhow::Result;
use clap::Parser;
use mkmonster::{Cli, GeneratorConfig, generate, logging};
use monster_content::TablesLoader;
use monster_core::{MonsterError, TableError};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // Selectors are validated here, before any file is read
    let cli = Cli::parse();

    let config = GeneratorConfig::from_env().with_table(cli.table.clone());
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::debug!(table = %config.table_path.display(), "starting");

    let result = TablesLoader::load(&config.table_path).and_then(|table| generate(&cli, &table));

    match result {
        Ok(block) => {
            print!("{block}");
            Ok(())
        }
        Err(err) => {
            report(&err);
            Err(err)
        }
    }
}

/// Logs the classification of a table error before it is printed.
fn report(err: &anyhow::Error) {
    if let Some(e) = err.downcast_ref::<TableError>() {
        tracing::debug!(
            code = e.error_code(),
            severity = e.severity().as_str(),
            "generation failed"
        );
    }
}
