//! Chart catalogue and per-chart viewports.
//!
//! Each of the six dashboard charts gets its base domains from the derived
//! series and one [`DomainController`] per zoomable axis.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::api::EpisodeRecord;
use crate::config::ViewportSettings;
use crate::services::viewport::{DomainController, DomainWindow, Gesture, PixelRange};

/// The charts rendered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Downloads per episode with the rolling average.
    DownloadsTrend,
    /// Completion rate per episode with the rolling average.
    CompletionTrend,
    /// New vs returning listeners per episode.
    ListenerMix,
    /// Cumulative downloads and subscribers.
    CumulativeGrowth,
    /// Scatter of social shares against subscribers gained.
    SharesVsSubscribers,
    /// Scatter of duration against completion rate.
    DurationVsCompletion,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::DownloadsTrend,
        ChartKind::CompletionTrend,
        ChartKind::ListenerMix,
        ChartKind::CumulativeGrowth,
        ChartKind::SharesVsSubscribers,
        ChartKind::DurationVsCompletion,
    ];

    /// Scatter charts zoom both axes; series charts only the episode axis.
    pub fn zooms_y(&self) -> bool {
        matches!(
            self,
            ChartKind::SharesVsSubscribers | ChartKind::DurationVsCompletion
        )
    }
}

/// Base domains of both axes of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDomains {
    pub x: DomainWindow,
    pub y: DomainWindow,
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn episode_axis(episodes: &[EpisodeRecord]) -> DomainWindow {
    match extent(episodes.iter().map(|e| e.episode.value() as f64)) {
        Some((lo, hi)) => DomainWindow::new(lo, hi),
        None => DomainWindow::new(0.0, 0.0),
    }
}

fn zero_based_axis(values: impl Iterator<Item = f64>) -> DomainWindow {
    let max = extent(values).map(|(_, hi)| hi).unwrap_or(0.0);
    DomainWindow::new(0.0, max.max(0.0))
}

fn rate_axis() -> DomainWindow {
    DomainWindow::new(0.0, 1.0)
}

/// Base domains computed from the derived series.
///
/// An empty or single-episode series yields a zero-width episode axis, which
/// mounts as a static (non-zoomable) axis.
pub fn base_domains(kind: ChartKind, episodes: &[EpisodeRecord]) -> ChartDomains {
    match kind {
        ChartKind::DownloadsTrend => ChartDomains {
            x: episode_axis(episodes),
            y: zero_based_axis(
                episodes
                    .iter()
                    .map(|e| (e.downloads as f64).max(e.rolling_downloads)),
            ),
        },
        ChartKind::CompletionTrend => ChartDomains {
            x: episode_axis(episodes),
            y: rate_axis(),
        },
        ChartKind::ListenerMix => ChartDomains {
            x: episode_axis(episodes),
            y: zero_based_axis(episodes.iter().map(|e| e.listener_total as f64)),
        },
        ChartKind::CumulativeGrowth => ChartDomains {
            x: episode_axis(episodes),
            y: zero_based_axis(episodes.iter().map(|e| {
                (e.cumulative_downloads as f64).max(e.cumulative_subscribers as f64)
            })),
        },
        ChartKind::SharesVsSubscribers => ChartDomains {
            x: zero_based_axis(episodes.iter().map(|e| e.social_shares as f64)),
            y: zero_based_axis(episodes.iter().map(|e| e.subscribers_gained as f64)),
        },
        ChartKind::DurationVsCompletion => ChartDomains {
            x: match extent(episodes.iter().map(|e| e.duration_minutes)) {
                Some((lo, hi)) => DomainWindow::new(lo, hi),
                None => DomainWindow::new(0.0, 0.0),
            },
            y: rate_axis(),
        },
    }
}

/// Space reserved around the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 30.0,
            bottom: 40.0,
            left: 60.0,
        }
    }
}

/// Chart size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl PlotArea {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margins: Margins::default(),
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Horizontal pixel range inside the margins.
    pub fn x_range(&self) -> PixelRange {
        PixelRange::new(self.margins.left, self.width - self.margins.right)
    }

    /// Vertical pixel range inside the margins, bottom to top.
    pub fn y_range(&self) -> PixelRange {
        PixelRange::new(self.height - self.margins.bottom, self.margins.top)
    }
}

/// Interactive axes of one mounted chart.
#[derive(Debug, Clone)]
pub struct ChartViewport {
    kind: ChartKind,
    x: DomainController,
    y: Option<DomainController>,
    fixed_y: DomainWindow,
}

impl ChartViewport {
    /// Mount a chart over the derived series.
    pub fn mount(
        kind: ChartKind,
        episodes: &[EpisodeRecord],
        area: PlotArea,
        settings: &ViewportSettings,
    ) -> Self {
        let domains = base_domains(kind, episodes);
        debug!("Mounting {:?} chart with domains {:?}", kind, domains);
        let x = DomainController::configure(settings.axis_config(area.x_range(), domains.x));
        let y = kind
            .zooms_y()
            .then(|| DomainController::configure(settings.axis_config(area.y_range(), domains.y)));
        Self {
            kind,
            x,
            y,
            fixed_y: domains.y,
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn x(&self) -> &DomainController {
        &self.x
    }

    pub fn y(&self) -> Option<&DomainController> {
        self.y.as_ref()
    }

    /// Currently visible domains of both axes.
    pub fn visible(&self) -> ChartDomains {
        ChartDomains {
            x: self.x.current_domain(),
            y: self
                .y
                .as_ref()
                .map(|c| c.current_domain())
                .unwrap_or(self.fixed_y),
        }
    }

    /// Horizontal gesture; applied to the x axis.
    pub fn handle_x(&mut self, gesture: Gesture) -> Option<DomainWindow> {
        self.x.handle(gesture)
    }

    /// Vertical gesture; ignored by charts that do not zoom y.
    pub fn handle_y(&mut self, gesture: Gesture) -> Option<DomainWindow> {
        self.y.as_mut().and_then(|c| c.handle(gesture))
    }

    /// Reset both axes to their base domains.
    pub fn reset(&mut self) -> ChartDomains {
        self.x.reset();
        if let Some(y) = self.y.as_mut() {
            y.reset();
        }
        self.visible()
    }

    /// Push base domains for a new series; a hard reset of every axis.
    pub fn rebase(&mut self, episodes: &[EpisodeRecord]) -> ChartDomains {
        let domains = base_domains(self.kind, episodes);
        self.x.set_base_domain(domains.x);
        if let Some(y) = self.y.as_mut() {
            y.set_base_domain(domains.y);
        }
        self.fixed_y = domains.y;
        self.visible()
    }

    /// Resize the chart, keeping zoom state.
    pub fn resize(&mut self, area: PlotArea) {
        self.x.set_pixel_range(area.x_range());
        if let Some(y) = self.y.as_mut() {
            y.set_pixel_range(area.y_range());
        }
    }
}
