//! Reference table loader.
//!
//! JSON format: an array of tier rows.
//!
//! ```json
//! [
//!   {
//!     "tier": "Novice",
//!     "levels": { "min": 1, "max": 4 },
//!     "prof": 2,
//!     "ac":  { "poor": 11, "average": 13, "good": 15 },
//!     "hp":  { "solo": {..}, "pair": {..}, "party": {..}, "gang": {..}, "mob": {..} },
//!     "atk": { "poor": 2, "average": 4, "good": 6 },
//!     "dc":  { "poor": 10, "average": 12, "good": 14 },
//!     "dmg": { "solo": {..}, "pair": {..}, "party": {..}, "gang": {..}, "mob": {..} }
//!   }
//! ]
//! ```

use std::path::Path;

use anyhow::Context;
use monster_core::{
    LevelRange, QualityBand, ReferenceTable, SizedQuality, TableError, Tier, TierProfile,
};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// One row as it appears in the file.
#[derive(Debug, Deserialize)]
struct TierRecord {
    tier: String,
    levels: LevelRange,
    prof: i32,
    ac: QualityBand,
    hp: SizedQuality,
    atk: QualityBand,
    dc: QualityBand,
    dmg: SizedQuality,
}

impl TierRecord {
    fn into_profile(self, row: usize) -> Result<TierProfile, TableError> {
        let levels = LevelRange::new(self.levels.min, self.levels.max).map_err(|_| {
            TableError::malformed(format!(
                "row {row} ({}): inverted level range {}",
                self.tier, self.levels
            ))
        })?;

        Ok(TierProfile {
            tier: Tier::new(self.tier, levels, self.prof),
            ac: self.ac,
            hp: self.hp,
            atk: self.atk,
            dc: self.dc,
            dmg: self.dmg,
        })
    }
}

/// Loader for the reference table from JSON files.
pub struct TablesLoader;

impl TablesLoader {
    /// Parse and validate a table document.
    ///
    /// Fails with [`TableError::Malformed`] if the document is not an array
    /// of complete rows or a row's level range is inverted.
    pub fn parse(content: &str) -> Result<ReferenceTable, TableError> {
        let records: Vec<TierRecord> = serde_json::from_str(content)
            .map_err(|e| TableError::malformed(e.to_string()))?;

        let profiles = records
            .into_iter()
            .enumerate()
            .map(|(row, record)| record.into_profile(row))
            .collect::<Result<Vec<_>, _>>()?;

        ReferenceTable::new(profiles)
    }

    /// Load the table from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file
    pub fn load(path: &Path) -> LoadResult<ReferenceTable> {
        let content = read_file(path)?;
        let table = Self::parse(&content)
            .with_context(|| format!("Failed to load reference table {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            tiers = table.profiles().len(),
            "reference table loaded"
        );
        Ok(table)
    }

    /// Parse the table bundled with this crate.
    pub fn bundled() -> Result<ReferenceTable, TableError> {
        Self::parse(crate::BUNDLED_TABLE)
    }
}
