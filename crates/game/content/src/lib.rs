//! Reference-table content and loaders.
//!
//! This crate ships the bundled stat table and reads table files:
//! - Tier profiles (data-driven via JSON)
//!
//! Tables are parsed into `monster-core` types and validated eagerly, so a
//! table that loads is safe to query for the rest of the run.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, TablesLoader};

/// The reference table bundled with the crate (four tiers, levels 1-20).
pub const BUNDLED_TABLE: &str = include_str!("../data/stats.json");
