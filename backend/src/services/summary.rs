//! Whole-series summary statistics.

use log::debug;

use crate::api::{EpisodeRecord, SummaryStatistics};
use crate::error::{DashboardError, DashboardResult};
use crate::services::correlation::pearson_correlation;
use crate::services::episodes::checked_total;

fn mean_of(episodes: &[EpisodeRecord], value: impl Fn(&EpisodeRecord) -> f64) -> f64 {
    if episodes.is_empty() {
        return 0.0;
    }
    episodes.iter().map(value).sum::<f64>() / episodes.len() as f64
}

fn total_of(
    episodes: &[EpisodeRecord],
    column: &str,
    value: impl Fn(&EpisodeRecord) -> u64,
) -> DashboardResult<u64> {
    episodes
        .iter()
        .enumerate()
        .try_fold(0u64, |total, (i, e)| checked_total(total, value(e), i + 1, column))
}

/// Percentage change from `early` to `late`, 0 when there is no baseline.
fn percent_change(early: f64, late: f64) -> f64 {
    if early == 0.0 {
        0.0
    } else {
        (late - early) / early * 100.0
    }
}

/// Compute summary statistics for a derived series.
///
/// The series is split at `n / 2`: the early half is `episodes[..n/2]` and the
/// late half `episodes[n/2..]`. An empty series has no summary, and totals
/// that overflow are reported as a malformed numeric field.
pub fn compute_summary(episodes: &[EpisodeRecord]) -> DashboardResult<SummaryStatistics> {
    let Some(first) = episodes.first() else {
        return Err(DashboardError::EmptySeries);
    };

    let total_episodes = episodes.len();
    let total_downloads = total_of(episodes, "downloads", |e| e.downloads)?;
    let total_subscribers = total_of(episodes, "subscribers_gained", |e| e.subscribers_gained)?;

    let top_episode = episodes
        .iter()
        .fold(first, |best, e| if e.downloads > best.downloads { e } else { best })
        .episode;

    let (early, late) = episodes.split_at(total_episodes / 2);

    let downloads_growth_pct = percent_change(
        mean_of(early, |e| e.downloads as f64),
        mean_of(late, |e| e.downloads as f64),
    );
    let completion_rate_change_pts =
        (mean_of(late, |e| e.completion_rate) - mean_of(early, |e| e.completion_rate)) * 100.0;
    let new_listener_share_change_pts = (mean_of(late, |e| e.new_listener_ratio)
        - mean_of(early, |e| e.new_listener_ratio))
        * 100.0;

    let summary = SummaryStatistics {
        total_episodes,
        total_downloads,
        average_downloads: total_downloads as f64 / total_episodes as f64,
        average_completion_rate: mean_of(episodes, |e| e.completion_rate),
        average_duration_minutes: mean_of(episodes, |e| e.duration_minutes),
        total_subscribers,
        top_episode,
        downloads_growth_pct,
        completion_rate_change_pts,
        new_listener_share_change_pts,
        shares_subscribers_correlation: pearson_correlation(
            episodes,
            |e| e.social_shares as f64,
            |e| e.subscribers_gained as f64,
        ),
        duration_completion_correlation: pearson_correlation(
            episodes,
            |e| e.duration_minutes,
            |e| e.completion_rate,
        ),
    };

    debug!(
        "Summary over {} episodes: growth {:.1}%, completion change {:.1} pts",
        summary.total_episodes, summary.downloads_growth_pct, summary.completion_rate_change_pts
    );
    Ok(summary)
}
