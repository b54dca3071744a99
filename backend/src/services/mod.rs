//! Service layer: the computational core of the dashboard.
//!
//! Series derivation (`episodes`, `summary`, `correlation`, `insights`) is
//! pure and synchronous. `viewport` holds the per-axis zoom/pan controllers
//! and `charts` wires them to the six dashboard charts.

pub mod charts;

pub mod correlation;

pub mod dashboard;

pub mod episodes;

pub mod insights;

pub mod summary;

pub mod viewport;

pub use charts::{base_domains, ChartDomains, ChartKind, ChartViewport, Margins, PlotArea};
pub use correlation::{compute_pearson_correlation, pearson_correlation};
pub use dashboard::{derive_dataset, derive_dataset_with_window, Dashboard, DerivedDataset};
pub use episodes::{derive_episodes, derive_episodes_with_window, ROLLING_WINDOW};
pub use insights::build_insights;
pub use summary::compute_summary;
