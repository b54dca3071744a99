//! Narrative insight text built from summary statistics.
//!
//! Every string is a pure function of one statistic. Correlations use the
//! positive framing for `r >= 0` (including exactly 0) and the caution
//! framing below that.

use crate::api::{Insights, SummaryStatistics};

pub const GROWTH_KEY: &str = "downloads_growth";
pub const COMPLETION_KEY: &str = "completion_trend";
pub const AUDIENCE_KEY: &str = "audience_mix";
pub const SHARES_KEY: &str = "shares_subscribers";
pub const DURATION_KEY: &str = "duration_completion";

/// Qualitative strength of a correlation coefficient.
pub fn correlation_strength(r: f64) -> &'static str {
    let magnitude = r.abs();
    if magnitude >= 0.7 {
        "strongly"
    } else if magnitude >= 0.4 {
        "moderately"
    } else {
        "weakly"
    }
}

fn growth_insight(pct: f64) -> String {
    if pct >= 0.0 {
        format!(
            "Downloads grew {:.1}% from the first half of the catalogue to the second half.",
            pct
        )
    } else {
        format!(
            "Downloads fell {:.1}% from the first half of the catalogue to the second half.",
            pct.abs()
        )
    }
}

fn completion_insight(pts: f64) -> String {
    if pts >= 0.0 {
        format!(
            "Completion rate improved by {:.1} percentage points in recent episodes.",
            pts
        )
    } else {
        format!(
            "Completion rate slipped by {:.1} percentage points in recent episodes.",
            pts.abs()
        )
    }
}

fn audience_insight(pts: f64) -> String {
    if pts >= 0.0 {
        format!(
            "New listeners make up {:.1} percentage points more of the audience than in early episodes.",
            pts
        )
    } else {
        format!(
            "Returning listeners are carrying the show: the new-listener share dropped {:.1} percentage points.",
            pts.abs()
        )
    }
}

fn shares_insight(r: f64) -> String {
    if r >= 0.0 {
        format!(
            "Social shares {} correlate with subscriber gains (r = {:.2}); shareable episodes grow the audience.",
            correlation_strength(r),
            r
        )
    } else {
        format!(
            "Caution: social shares {} move against subscriber gains (r = {:.2}); shares are not converting into subscriptions.",
            correlation_strength(r),
            r
        )
    }
}

fn duration_insight(r: f64) -> String {
    if r >= 0.0 {
        format!(
            "Longer episodes {} correlate with higher completion (r = {:.2}); listeners stay for in-depth content.",
            correlation_strength(r),
            r
        )
    } else {
        format!(
            "Caution: completion {} declines as episodes get longer (r = {:.2}); consider tighter edits.",
            correlation_strength(r),
            r
        )
    }
}

/// Build the insight map for a summary.
pub fn build_insights(summary: &SummaryStatistics) -> Insights {
    let mut insights = Insights::new();
    insights.insert(
        GROWTH_KEY.to_string(),
        growth_insight(summary.downloads_growth_pct),
    );
    insights.insert(
        COMPLETION_KEY.to_string(),
        completion_insight(summary.completion_rate_change_pts),
    );
    insights.insert(
        AUDIENCE_KEY.to_string(),
        audience_insight(summary.new_listener_share_change_pts),
    );
    insights.insert(
        SHARES_KEY.to_string(),
        shares_insight(summary.shares_subscribers_correlation),
    );
    insights.insert(
        DURATION_KEY.to_string(),
        duration_insight(summary.duration_completion_correlation),
    );
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EpisodeNumber;

    fn create_test_summary(shares_r: f64, duration_r: f64) -> SummaryStatistics {
        SummaryStatistics {
            total_episodes: 10,
            total_downloads: 1000,
            average_downloads: 100.0,
            average_completion_rate: 0.6,
            average_duration_minutes: 42.0,
            total_subscribers: 50,
            top_episode: EpisodeNumber(4),
            downloads_growth_pct: 25.0,
            completion_rate_change_pts: -3.4,
            new_listener_share_change_pts: 0.0,
            shares_subscribers_correlation: shares_r,
            duration_completion_correlation: duration_r,
        }
    }

    #[test]
    fn test_build_insights_has_all_keys() {
        let insights = build_insights(&create_test_summary(0.5, -0.5));
        let keys: Vec<&str> = insights.keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![AUDIENCE_KEY, COMPLETION_KEY, GROWTH_KEY, DURATION_KEY, SHARES_KEY]
        );
    }

    #[test]
    fn test_correlation_sign_flips_framing() {
        let positive = build_insights(&create_test_summary(0.82, 0.1));
        let negative = build_insights(&create_test_summary(-0.82, -0.45));

        assert!(positive[SHARES_KEY].starts_with("Social shares strongly correlate"));
        assert!(positive[SHARES_KEY].contains("r = 0.82"));
        assert!(negative[SHARES_KEY].starts_with("Caution:"));
        assert!(negative[SHARES_KEY].contains("r = -0.82"));

        assert!(positive[DURATION_KEY].starts_with("Longer episodes weakly"));
        assert!(negative[DURATION_KEY].starts_with("Caution: completion moderately"));
    }

    #[test]
    fn test_zero_correlation_uses_positive_framing() {
        let insights = build_insights(&create_test_summary(0.0, 0.0));
        assert!(!insights[SHARES_KEY].starts_with("Caution"));
        assert!(!insights[DURATION_KEY].starts_with("Caution"));
    }

    #[test]
    fn test_magnitude_formatting() {
        let insights = build_insights(&create_test_summary(0.0, 0.0));
        assert_eq!(
            insights[GROWTH_KEY],
            "Downloads grew 25.0% from the first half of the catalogue to the second half."
        );
        assert_eq!(
            insights[COMPLETION_KEY],
            "Completion rate slipped by 3.4 percentage points in recent episodes."
        );
    }

    #[test]
    fn test_correlation_strength_thresholds() {
        assert_eq!(correlation_strength(0.7), "strongly");
        assert_eq!(correlation_strength(-0.69), "moderately");
        assert_eq!(correlation_strength(0.39), "weakly");
    }
}
