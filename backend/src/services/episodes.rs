//! Episode series derivation.
//!
//! Turns validated rows into the ordered, fully derived episode series. The
//! whole series is rebuilt on every call; cumulative and rolling fields are
//! never patched incrementally.

use std::collections::VecDeque;

use log::debug;

use crate::api::{EpisodeRecord, RawRow};
use crate::error::{DashboardError, DashboardResult};
use crate::models::parse_duration;

/// Trailing window length for rolling averages.
pub const ROLLING_WINDOW: usize = 7;

/// Running state carried across the left-to-right pass.
#[derive(Debug)]
struct SeriesAccumulator {
    window: usize,
    cumulative_downloads: u64,
    cumulative_subscribers: u64,
    trailing: VecDeque<(u64, f64)>,
    trailing_downloads: u64,
    trailing_completion: f64,
}

impl SeriesAccumulator {
    fn new(window: usize) -> Self {
        Self {
            window,
            cumulative_downloads: 0,
            cumulative_subscribers: 0,
            trailing: VecDeque::with_capacity(window),
            trailing_downloads: 0,
            trailing_completion: 0.0,
        }
    }

    /// Push one episode and return `(rolling_downloads, rolling_completion_rate)`.
    fn push(&mut self, downloads: u64, completion_rate: f64) -> (f64, f64) {
        if self.trailing.len() == self.window {
            if let Some((old_downloads, old_rate)) = self.trailing.pop_front() {
                self.trailing_downloads -= old_downloads;
                self.trailing_completion -= old_rate;
            }
        }
        self.trailing.push_back((downloads, completion_rate));
        // Bounded by the cumulative sum, which is checked before every push
        self.trailing_downloads += downloads;
        self.trailing_completion += completion_rate;

        let len = self.trailing.len() as f64;
        let rolling_completion = if self.trailing.len() == 1 {
            // Avoid carrying subtraction residue into a single-element window
            completion_rate
        } else {
            self.trailing_completion / len
        };
        (self.trailing_downloads as f64 / len, rolling_completion)
    }
}

/// `numerator / denominator`, or 0 when the denominator is 0.
pub(crate) fn safe_ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// `total + count`, or a numeric-field error naming the count that overflowed.
pub(crate) fn checked_total(
    total: u64,
    count: u64,
    row: usize,
    column: &str,
) -> DashboardResult<u64> {
    total
        .checked_add(count)
        .ok_or_else(|| DashboardError::malformed_numeric(row, column, count.to_string()))
}

/// `count` per 1000 downloads, or 0 when there were no downloads.
fn per_thousand(count: u64, downloads: u64) -> f64 {
    if downloads == 0 {
        0.0
    } else {
        count as f64 * 1000.0 / downloads as f64
    }
}

/// Derive the episode series using the default 7-episode rolling window.
pub fn derive_episodes(rows: &[RawRow]) -> DashboardResult<Vec<EpisodeRecord>> {
    derive_episodes_with_window(rows, ROLLING_WINDOW)
}

/// Derive the episode series with a custom rolling window.
///
/// Rows are stably sorted by episode number, so duplicate episode numbers keep
/// their original relative order. A window of 0 is treated as 1. Counts whose
/// totals overflow fail with the 1-based input row of the offending value.
pub fn derive_episodes_with_window(
    rows: &[RawRow],
    window: usize,
) -> DashboardResult<Vec<EpisodeRecord>> {
    let window = window.max(1);
    let mut ordered: Vec<(usize, &RawRow)> = rows.iter().enumerate().collect();
    ordered.sort_by_key(|(_, row)| row.episode);

    let mut acc = SeriesAccumulator::new(window);
    let mut episodes = Vec::with_capacity(ordered.len());

    for (index, row) in ordered {
        let line = index + 1;
        let duration_minutes = parse_duration(&row.duration)?;
        let completion_rate = safe_ratio(row.completions, row.downloads);
        let listener_total = checked_total(
            row.new_listeners,
            row.returning_listeners,
            line,
            "returning_listeners",
        )?;
        let new_listener_ratio = safe_ratio(row.new_listeners, listener_total);

        acc.cumulative_downloads =
            checked_total(acc.cumulative_downloads, row.downloads, line, "downloads")?;
        acc.cumulative_subscribers = checked_total(
            acc.cumulative_subscribers,
            row.subscribers_gained,
            line,
            "subscribers_gained",
        )?;
        let (rolling_downloads, rolling_completion_rate) =
            acc.push(row.downloads, completion_rate);

        episodes.push(EpisodeRecord {
            episode: row.episode,
            title: row.title.clone(),
            description: row.description.clone(),
            guest: row.guest.clone(),
            duration_minutes,
            downloads: row.downloads,
            completions: row.completions,
            new_listeners: row.new_listeners,
            returning_listeners: row.returning_listeners,
            subscribers_gained: row.subscribers_gained,
            social_shares: row.social_shares,
            completion_rate,
            listener_total,
            new_listener_ratio,
            cumulative_downloads: acc.cumulative_downloads,
            cumulative_subscribers: acc.cumulative_subscribers,
            rolling_downloads,
            rolling_completion_rate,
            subscribers_per_1000: per_thousand(row.subscribers_gained, row.downloads),
            shares_per_1000: per_thousand(row.social_shares, row.downloads),
        });
    }

    debug!(
        "Derived {} episodes with a {}-episode rolling window",
        episodes.len(),
        window
    );
    Ok(episodes)
}
