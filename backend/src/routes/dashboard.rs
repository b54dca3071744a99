use serde::{Deserialize, Serialize};

use crate::error::DashboardFailure;
use crate::routes::episodes::EpisodeRecord;
use crate::routes::summary::{Insights, SummaryStatistics};

/// Everything the rendering layer needs for one dashboard frame.
///
/// `summary == None` means there is no usable data and charts must not be
/// drawn; `error` explains why when a load was attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPayload {
    pub episodes: Vec<EpisodeRecord>,
    pub summary: Option<SummaryStatistics>,
    pub insights: Insights,
    pub loading: bool,
    pub error: Option<DashboardFailure>,
}

impl DashboardPayload {
    /// Initial state before the dataset has been read.
    pub fn loading() -> Self {
        Self {
            episodes: Vec::new(),
            summary: None,
            insights: Insights::new(),
            loading: true,
            error: None,
        }
    }

    /// Whether charts can be rendered from this payload.
    pub fn has_data(&self) -> bool {
        self.summary.is_some()
    }
}
