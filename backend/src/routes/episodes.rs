use serde::{Deserialize, Serialize};

use crate::api::EpisodeNumber;

// =========================================================
// Episode types
// =========================================================

/// One validated record from the metrics dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    pub episode: EpisodeNumber,
    pub title: String,
    pub description: String,
    pub guest: Option<String>,
    pub duration: String, // HH:MM:SS as it appeared in the file
    pub downloads: u64,
    pub completions: u64,
    pub new_listeners: u64,
    pub returning_listeners: u64,
    pub subscribers_gained: u64,
    pub social_shares: u64,
}

/// Fully derived data point for a single episode.
///
/// Cumulative and rolling fields depend on the record's position in the
/// ascending episode order and are only valid for the series they were
/// derived in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub episode: EpisodeNumber,
    pub title: String,
    pub description: String,
    pub guest: Option<String>,
    pub duration_minutes: f64,
    pub downloads: u64,
    pub completions: u64,
    pub new_listeners: u64,
    pub returning_listeners: u64,
    pub subscribers_gained: u64,
    pub social_shares: u64,
    pub completion_rate: f64,
    pub listener_total: u64,
    pub new_listener_ratio: f64,
    pub cumulative_downloads: u64,
    pub cumulative_subscribers: u64,
    pub rolling_downloads: f64,
    pub rolling_completion_rate: f64,
    pub subscribers_per_1000: f64,
    pub shares_per_1000: f64,
}
