//! Interactive zoom/pan engine shared by every chart.
//!
//! Gestures are turned into a pixel-space [`GestureTransform`], applied to
//! the axis' base scale, and the resulting window is clamped back inside the
//! base domain by [`clamp_domain`] before it is published.

pub mod controller;
pub mod domain;
pub mod scale;
pub mod transform;
pub mod transition;

pub use controller::{
    ControllerState, DomainController, Gesture, ViewportConfig, DEFAULT_MAX_ZOOM,
    DEFAULT_WHEEL_SENSITIVITY,
};
pub use domain::{clamp_domain, DomainWindow, DOMAIN_EPSILON};
pub use scale::{LinearScale, PixelRange};
pub use transform::GestureTransform;
pub use transition::{ease_cubic_in_out, DomainTransition, DEFAULT_RESET_DURATION};
