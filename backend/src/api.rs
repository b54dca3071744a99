//! Public API surface for the dashboard core.
//!
//! This file consolidates the DTO types handed to the rendering layer.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::error::DashboardFailure;
pub use crate::routes::dashboard::DashboardPayload;
pub use crate::routes::episodes::EpisodeRecord;
pub use crate::routes::episodes::RawRow;
pub use crate::routes::summary::Insights;
pub use crate::routes::summary::SummaryStatistics;
pub use crate::services::charts::ChartDomains;
pub use crate::services::charts::ChartKind;
pub use crate::services::viewport::DomainWindow;

use serde::{Deserialize, Serialize};

/// Episode number, the natural sort and join key of the series.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EpisodeNumber(pub u64);

impl EpisodeNumber {
    pub fn new(value: u64) -> Self {
        EpisodeNumber(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EpisodeNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
