use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::api::EpisodeNumber;

// =========================================================
// Summary types
// =========================================================

/// Aggregate statistics over a whole derived series.
///
/// Half-split deltas compare `episodes[..n/2]` with `episodes[n/2..]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub total_episodes: usize,
    pub total_downloads: u64,
    pub average_downloads: f64,
    pub average_completion_rate: f64,
    pub average_duration_minutes: f64,
    pub total_subscribers: u64,
    pub top_episode: EpisodeNumber, // most downloaded, earliest on ties
    pub downloads_growth_pct: f64,
    pub completion_rate_change_pts: f64,
    pub new_listener_share_change_pts: f64,
    pub shares_subscribers_correlation: f64,
    pub duration_completion_correlation: f64,
}

/// Narrative insight text keyed by insight name.
pub type Insights = BTreeMap<String, String>;
