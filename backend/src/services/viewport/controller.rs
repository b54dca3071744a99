//! Per-axis zoom/pan controller.
//!
//! A [`DomainController`] owns the visible domain of one chart axis. Renderers
//! feed it gestures and read back the published domain; they never write the
//! domain themselves.

use std::time::Duration;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::domain::{clamp_domain, DomainWindow};
use super::scale::{LinearScale, PixelRange};
use super::transform::GestureTransform;
use super::transition::{DomainTransition, DEFAULT_RESET_DURATION};

/// Default upper bound of the scale extent.
pub const DEFAULT_MAX_ZOOM: f64 = 10.0;

/// Default wheel delta multiplier (pixel delta mode).
pub const DEFAULT_WHEEL_SENSITIVITY: f64 = 0.002;

/// Mount-time settings of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    /// Pixel extent of the plotting area along this axis
    pub pixel_range: PixelRange,
    /// Full, unzoomed data range
    pub base_domain: DomainWindow,
    /// Upper bound of the scale factor; the lower bound is always 1
    pub max_zoom: f64,
    pub reset_duration: Duration,
    pub wheel_sensitivity: f64,
}

impl ViewportConfig {
    pub fn new(pixel_range: PixelRange, base_domain: DomainWindow) -> Self {
        Self {
            pixel_range,
            base_domain,
            max_zoom: DEFAULT_MAX_ZOOM,
            reset_duration: DEFAULT_RESET_DURATION,
            wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
        }
    }

    pub fn with_max_zoom(mut self, max_zoom: f64) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    pub fn with_reset_duration(mut self, reset_duration: Duration) -> Self {
        self.reset_duration = reset_duration;
        self
    }

    pub fn with_wheel_sensitivity(mut self, wheel_sensitivity: f64) -> Self {
        self.wheel_sensitivity = wheel_sensitivity;
        self
    }
}

/// A discrete interaction event, in pixels along this axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Gesture {
    /// Mouse wheel; positive delta zooms out.
    Wheel { delta: f64, anchor: f64 },
    /// Relative zoom by `factor` around `anchor`.
    Zoom { factor: f64, anchor: f64 },
    /// Drag by `delta` pixels.
    Pan { delta: f64 },
    /// Ignored; reset is an explicit call.
    DoubleClick { anchor: f64 },
}

/// Controller state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerState {
    /// Malformed base domain or pixel range: gestures are ignored.
    Static { base: DomainWindow },
    /// Showing the base domain.
    Idle { base: DomainWindow },
    /// Zoomed and/or panned.
    Transformed {
        base: DomainWindow,
        current: DomainWindow,
        transform: GestureTransform,
    },
}

impl ControllerState {
    pub fn base(&self) -> DomainWindow {
        match *self {
            ControllerState::Static { base }
            | ControllerState::Idle { base }
            | ControllerState::Transformed { base, .. } => base,
        }
    }

    pub fn transform(&self) -> GestureTransform {
        match *self {
            ControllerState::Transformed { transform, .. } => transform,
            _ => GestureTransform::IDENTITY,
        }
    }
}

/// Clamped, published data window for one chart axis.
#[derive(Debug, Clone)]
pub struct DomainController {
    state: ControllerState,
    pixel_range: PixelRange,
    max_zoom: f64,
    reset_duration: Duration,
    wheel_sensitivity: f64,
    published: DomainWindow,
    revision: u64,
    transition: Option<DomainTransition>,
}

fn sanitize_max_zoom(max_zoom: f64) -> f64 {
    if max_zoom.is_finite() && max_zoom >= 1.0 {
        max_zoom
    } else {
        warn!("Invalid max zoom {}, zooming disabled", max_zoom);
        1.0
    }
}

impl DomainController {
    /// Mount a controller for one axis.
    pub fn configure(config: ViewportConfig) -> Self {
        let state = Self::initial_state(config.base_domain, config.pixel_range);
        let wheel_sensitivity = if config.wheel_sensitivity.is_finite() {
            config.wheel_sensitivity
        } else {
            DEFAULT_WHEEL_SENSITIVITY
        };
        Self {
            state,
            pixel_range: config.pixel_range,
            max_zoom: sanitize_max_zoom(config.max_zoom),
            reset_duration: config.reset_duration,
            wheel_sensitivity,
            published: config.base_domain,
            revision: 0,
            transition: None,
        }
    }

    fn initial_state(base: DomainWindow, pixel_range: PixelRange) -> ControllerState {
        if base.is_valid() && pixel_range.is_valid() {
            ControllerState::Idle { base }
        } else {
            warn!(
                "Degenerate axis (domain {:?}, range {:?}); zoom disabled",
                base, pixel_range
            );
            ControllerState::Static { base }
        }
    }

    /// Currently published domain.
    pub fn current_domain(&self) -> DomainWindow {
        self.published
    }

    pub fn base_domain(&self) -> DomainWindow {
        self.state.base()
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Cumulative transform; identity unless zoomed or panned.
    pub fn transform(&self) -> GestureTransform {
        self.state.transform()
    }

    pub fn pixel_range(&self) -> PixelRange {
        self.pixel_range
    }

    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Incremented every time a new domain is published.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_interactive(&self) -> bool {
        !matches!(self.state, ControllerState::Static { .. })
    }

    /// Scale for the published domain.
    pub fn scale(&self) -> LinearScale {
        LinearScale::new(self.published, self.pixel_range)
    }

    /// Forward mapping through the published domain.
    pub fn to_pixel(&self, value: f64) -> f64 {
        self.scale().apply(value)
    }

    /// Inverse mapping through the published domain.
    pub fn to_data(&self, pixel: f64) -> f64 {
        self.scale().invert(pixel)
    }

    /// Dispatch one interaction event.
    ///
    /// Returns the new domain when one was published.
    pub fn handle(&mut self, gesture: Gesture) -> Option<DomainWindow> {
        if !self.is_interactive() {
            return None;
        }

        let current = self.transform();
        let next = match gesture {
            Gesture::Wheel { delta, anchor } => {
                if !delta.is_finite() || !anchor.is_finite() {
                    return None;
                }
                let factor = 2f64.powf(-delta * self.wheel_sensitivity);
                self.zoom_by(current, factor, anchor)
            }
            Gesture::Zoom { factor, anchor } => {
                if !factor.is_finite() || factor <= 0.0 || !anchor.is_finite() {
                    warn!("Ignoring zoom gesture with factor {} at {}", factor, anchor);
                    return None;
                }
                self.zoom_by(current, factor, anchor)
            }
            Gesture::Pan { delta } => {
                if !delta.is_finite() {
                    return None;
                }
                current.pan_by(delta)
            }
            Gesture::DoubleClick { .. } => return None,
        };

        let anchor = match gesture {
            Gesture::Wheel { anchor, .. } | Gesture::Zoom { anchor, .. } => anchor,
            _ => self.pixel_range.min(),
        };
        let bounded = next.with_scale_extent(1.0, self.max_zoom, anchor);
        self.set_gesture_transform(bounded)
    }

    /// Scale by `factor` around `anchor`, saturating at the scale extent.
    fn zoom_by(&self, current: GestureTransform, factor: f64, anchor: f64) -> GestureTransform {
        let k = (current.k * factor).clamp(1.0, self.max_zoom);
        current.scale_to(k, anchor)
    }

    /// Replace the cumulative transform.
    ///
    /// The transform is constrained to the plot's pixel extent, the resulting
    /// domain is clamped to the base, and it is published if it moved by more
    /// than the epsilon.
    pub fn set_gesture_transform(&mut self, transform: GestureTransform) -> Option<DomainWindow> {
        let base = match self.state {
            ControllerState::Static { .. } => return None,
            ControllerState::Idle { base } | ControllerState::Transformed { base, .. } => base,
        };
        if !transform.is_finite() {
            warn!("Ignoring non-finite transform {:?}", transform);
            return None;
        }
        self.transition = None;

        let transform = GestureTransform::new(transform.k.clamp(1.0, self.max_zoom), transform.x)
            .constrain(self.pixel_range);

        if transform.is_identity() {
            self.state = ControllerState::Idle { base };
            return self.publish(base, false);
        }

        let base_scale = LinearScale::new(base, self.pixel_range);
        let candidate = transform.rescale(&base_scale);
        let clamped = clamp_domain(candidate, base);
        debug!(
            "Gesture transform k={:.4} x={:.2}: candidate {:?} -> {:?}",
            transform.k, transform.x, candidate, clamped
        );

        let published = self.publish(clamped, false);
        self.state = ControllerState::Transformed {
            base,
            current: self.published,
            transform,
        };
        published
    }

    /// Return to the base domain.
    ///
    /// The base is published verbatim immediately; the move is animated for
    /// rendering through [`DomainController::display_domain`].
    pub fn reset(&mut self) -> DomainWindow {
        let base = self.state.base();
        let from = self.published;
        if let ControllerState::Transformed { .. } = self.state {
            self.state = ControllerState::Idle { base };
        }
        self.transition = if !from.is_identical(&base) && !self.reset_duration.is_zero() {
            Some(DomainTransition::new(from, base, self.reset_duration))
        } else {
            None
        };
        self.publish(base, true);
        base
    }

    /// Replace the base domain (new underlying data).
    ///
    /// Always a hard reset, even in the middle of a gesture.
    pub fn set_base_domain(&mut self, base: DomainWindow) -> DomainWindow {
        self.transition = None;
        self.state = Self::initial_state(base, self.pixel_range);
        self.publish(base, true);
        base
    }

    /// Resize the plotting area, keeping the current transform.
    pub fn set_pixel_range(&mut self, pixel_range: PixelRange) -> Option<DomainWindow> {
        let transform = self.transform();
        let base = self.state.base();
        self.pixel_range = pixel_range;
        if !pixel_range.is_valid() || !base.is_valid() {
            self.transition = None;
            self.state = Self::initial_state(base, pixel_range);
            return self.publish(base, false);
        }
        if !self.is_interactive() {
            self.state = ControllerState::Idle { base };
        }
        self.set_gesture_transform(transform)
    }

    /// Whether a reset animation is still running `elapsed` after the reset.
    pub fn is_animating(&self, elapsed: Duration) -> bool {
        self.transition
            .map(|t| !t.is_complete(elapsed))
            .unwrap_or(false)
    }

    /// Domain to draw `elapsed` after the last reset.
    ///
    /// Equals the published domain unless a reset animation is running.
    pub fn display_domain(&self, elapsed: Duration) -> DomainWindow {
        match self.transition {
            Some(transition) if !transition.is_complete(elapsed) => transition.sample(elapsed),
            _ => self.published,
        }
    }

    /// Like [`DomainController::display_domain`], dropping a finished animation.
    pub fn animation_frame(&mut self, elapsed: Duration) -> DomainWindow {
        let frame = self.display_domain(elapsed);
        if !self.is_animating(elapsed) {
            self.transition = None;
        }
        frame
    }

    fn publish(&mut self, domain: DomainWindow, force: bool) -> Option<DomainWindow> {
        let changed = if force {
            !domain.is_identical(&self.published)
        } else if self.state_is_idle_at(domain) {
            // Returning to the base always lands on it exactly
            !domain.is_identical(&self.published)
        } else {
            !domain.approx_eq(&self.published)
        };
        if !changed {
            return None;
        }
        self.published = domain;
        self.revision += 1;
        Some(domain)
    }

    fn state_is_idle_at(&self, domain: DomainWindow) -> bool {
        matches!(self.state, ControllerState::Idle { base } if base.is_identical(&domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_controller() -> DomainController {
        DomainController::configure(ViewportConfig::new(
            PixelRange::new(0.0, 490.0),
            DomainWindow::new(1.0, 50.0),
        ))
    }

    #[test]
    fn test_starts_idle_at_base() {
        let controller = create_test_controller();
        assert_eq!(controller.current_domain(), DomainWindow::new(1.0, 50.0));
        assert!(matches!(controller.state(), ControllerState::Idle { .. }));
        assert_eq!(controller.revision(), 0);
    }

    #[test]
    fn test_zoom_publishes_narrower_domain() {
        let mut controller = create_test_controller();
        let domain = controller
            .handle(Gesture::Zoom {
                factor: 2.0,
                anchor: 245.0,
            })
            .unwrap();

        assert!((domain.start - 13.25).abs() < 1e-9);
        assert!((domain.end - 37.75).abs() < 1e-9);
        assert!(matches!(controller.state(), ControllerState::Transformed { .. }));
        assert_eq!(controller.revision(), 1);
    }

    #[test]
    fn test_zoom_out_past_one_is_clamped() {
        let mut controller = create_test_controller();
        let result = controller.handle(Gesture::Zoom {
            factor: 0.25,
            anchor: 100.0,
        });
        assert_eq!(result, None);
        assert!(controller
            .current_domain()
            .is_identical(&DomainWindow::new(1.0, 50.0)));
    }

    #[test]
    fn test_scale_extent_caps_zoom() {
        let mut controller = create_test_controller();
        controller.handle(Gesture::Zoom {
            factor: 1000.0,
            anchor: 0.0,
        });
        assert_eq!(controller.transform().k, DEFAULT_MAX_ZOOM);
        assert!((controller.current_domain().span() - 4.9).abs() < 1e-9);
    }

    #[test]
    fn test_huge_zoom_factor_saturates_at_max_zoom() {
        let mut controller = create_test_controller();
        controller.handle(Gesture::Zoom {
            factor: 5.0,
            anchor: 245.0,
        });
        assert_eq!(controller.transform().k, 5.0);

        let domain = controller.handle(Gesture::Zoom {
            factor: 1e308,
            anchor: 245.0,
        });
        assert!(domain.is_some());
        assert_eq!(controller.transform().k, DEFAULT_MAX_ZOOM);
        assert!((controller.current_domain().span() - 4.9).abs() < 1e-9);
    }

    #[test]
    fn test_huge_wheel_delta_saturates_at_max_zoom() {
        let mut controller = create_test_controller();
        controller.handle(Gesture::Wheel {
            delta: -1e6,
            anchor: 100.0,
        });
        assert_eq!(controller.transform().k, DEFAULT_MAX_ZOOM);
    }

    #[test]
    fn test_double_click_is_ignored() {
        let mut controller = create_test_controller();
        controller.handle(Gesture::Zoom {
            factor: 2.0,
            anchor: 245.0,
        });
        let before = controller.current_domain();
        assert_eq!(controller.handle(Gesture::DoubleClick { anchor: 10.0 }), None);
        assert_eq!(controller.current_domain(), before);
    }

    #[test]
    fn test_tiny_moves_are_not_published() {
        let mut controller = create_test_controller();
        controller.handle(Gesture::Zoom {
            factor: 2.0,
            anchor: 245.0,
        });
        let revision = controller.revision();
        assert_eq!(controller.handle(Gesture::Pan { delta: 1e-8 }), None);
        assert_eq!(controller.revision(), revision);
    }

    #[test]
    fn test_wheel_zoom_direction() {
        let mut controller = create_test_controller();
        let domain = controller
            .handle(Gesture::Wheel {
                delta: -500.0,
                anchor: 245.0,
            })
            .unwrap();
        // 2^(500 * 0.002) = 2
        assert!((domain.span() - 24.5).abs() < 1e-9);
    }

    #[test]
    fn test_to_pixel_and_to_data_follow_published_domain() {
        let mut controller = create_test_controller();
        assert_eq!(controller.to_pixel(1.0), 0.0);
        assert_eq!(controller.to_pixel(50.0), 490.0);

        controller.handle(Gesture::Zoom {
            factor: 2.0,
            anchor: 0.0,
        });
        assert!((controller.to_pixel(25.5) - 490.0).abs() < 1e-9);
        assert!((controller.to_data(490.0) - 25.5).abs() < 1e-9);
    }

    #[test]
    fn test_static_controller_ignores_gestures() {
        let base = DomainWindow::new(5.0, 5.0);
        let mut controller =
            DomainController::configure(ViewportConfig::new(PixelRange::new(0.0, 100.0), base));

        assert!(!controller.is_interactive());
        assert_eq!(
            controller.handle(Gesture::Zoom {
                factor: 3.0,
                anchor: 50.0
            }),
            None
        );
        assert_eq!(
            controller.set_gesture_transform(GestureTransform::new(2.0, -10.0)),
            None
        );
        assert!(controller.current_domain().is_identical(&base));
        assert!(controller.reset().is_identical(&base));
    }

    #[test]
    fn test_nan_base_is_reported_verbatim() {
        let base = DomainWindow::new(f64::NAN, 10.0);
        let controller =
            DomainController::configure(ViewportConfig::new(PixelRange::new(0.0, 100.0), base));
        assert!(controller.current_domain().is_identical(&base));
        assert!(!controller.is_interactive());
    }

    #[test]
    fn test_invalid_max_zoom_disables_zoom() {
        let mut controller = DomainController::configure(
            ViewportConfig::new(PixelRange::new(0.0, 100.0), DomainWindow::new(0.0, 1.0))
                .with_max_zoom(0.5),
        );
        assert_eq!(controller.max_zoom(), 1.0);
        assert_eq!(
            controller.handle(Gesture::Zoom {
                factor: 4.0,
                anchor: 50.0
            }),
            None
        );
    }

    #[test]
    fn test_reset_animation_frames() {
        let mut controller = create_test_controller().with_test_reset(Duration::from_millis(100));
        controller.handle(Gesture::Zoom {
            factor: 2.0,
            anchor: 245.0,
        });
        let zoomed = controller.current_domain();
        controller.reset();

        assert!(controller.is_animating(Duration::ZERO));
        assert_eq!(controller.display_domain(Duration::ZERO), zoomed);
        let done = controller.animation_frame(Duration::from_millis(100));
        assert!(done.is_identical(&DomainWindow::new(1.0, 50.0)));
        assert!(!controller.is_animating(Duration::ZERO));
    }

    impl DomainController {
        fn with_test_reset(mut self, duration: Duration) -> Self {
            self.reset_duration = duration;
            self
        }
    }
}
