//! Stats and threat - the five adjustable stats and how their qualities
//! add up to a threat rating.
//!
//! ```text
//! [ Stat + Quality ]  per-stat quality selection
//!        ↓
//! [ ThreatSigns ]     one sign per stat, shared by every adjustment layer
//!        ↓
//! [ Threat ]          signed score + label, recomputed on every access
//! ```

pub mod signs;
pub mod stat;
pub mod threat;

pub use signs::ThreatSigns;
pub use stat::Stat;
pub use threat::{Threat, ThreatLevel, threat_score};
