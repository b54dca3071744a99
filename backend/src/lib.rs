//! # Podcast Insights
//!
//! Computational core of a podcast metrics dashboard.
//!
//! This crate turns a static CSV of per-episode metrics into a fully derived,
//! ordered episode series with summary statistics and narrative insights, and
//! provides the zoom/pan domain controllers every chart uses to map gestures
//! onto a clamped, visible data window. Rendering is left to the embedding
//! application, which consumes [`api::DashboardPayload`] and reads domains
//! from [`services::viewport::DomainController`].
//!
//! ## Architecture
//!
//! - [`api`]: Data Transfer Objects handed to the rendering layer
//! - [`io`]: Dataset sources, CSV parsing and content fingerprints
//! - [`models`]: Small value types with parsing logic
//! - [`services`]: Series derivation, insights and chart viewports
//! - [`config`]: TOML configuration
//! - [`theme`]: Light/dark preference persistence
//!
//! ## Example
//!
//! ```no_run
//! use podcast_insights::config::DashboardConfig;
//! use podcast_insights::services::Dashboard;
//!
//! let config = DashboardConfig::from_default_location().unwrap_or_default();
//! let mut dashboard = Dashboard::from_config(config);
//! let payload = dashboard.payload();
//! if let Some(summary) = &payload.summary {
//!     println!("{} episodes", summary.total_episodes);
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod routes;
pub mod services;
pub mod theme;

pub use error::{DashboardError, DashboardResult};
