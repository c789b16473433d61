//! Generator configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration for one generator run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Reference table to load.
    pub table_path: PathBuf,
    /// Directory for a log file, in addition to stderr.
    pub log_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    pub const DEFAULT_TABLE: &'static str = "stats.json";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MKMONSTER_TABLE` - Reference table path (default: stats.json)
    /// - `MKMONSTER_LOG_DIR` - Also write mkmonster.log to this directory (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = read_var::<PathBuf>(&lookup, "MKMONSTER_TABLE") {
            config.table_path = path;
        }

        config.log_dir = read_var::<PathBuf>(&lookup, "MKMONSTER_LOG_DIR");

        config
    }

    /// Replace the table path when one was given on the command line.
    pub fn with_table(mut self, table: Option<PathBuf>) -> Self {
        if let Some(path) = table {
            self.table_path = path;
        }
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            table_path: PathBuf::from(Self::DEFAULT_TABLE),
            log_dir: None,
        }
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key).filter(|v| !v.is_empty())?.parse().ok()
}
