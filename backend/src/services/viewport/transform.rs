//! One-axis zoom transform in pixel space.
//!
//! Same model as a d3 zoom transform restricted to one axis: a point `p`
//! on screen is displayed at `p * k + x`.

use serde::{Deserialize, Serialize};

use super::domain::DomainWindow;
use super::scale::{LinearScale, PixelRange};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureTransform {
    /// Scale factor
    pub k: f64,
    /// Translation in pixels
    pub x: f64,
}

impl Default for GestureTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl GestureTransform {
    pub const IDENTITY: GestureTransform = GestureTransform { k: 1.0, x: 0.0 };

    pub fn new(k: f64, x: f64) -> Self {
        Self { k, x }
    }

    pub fn is_identity(&self) -> bool {
        self.k == 1.0 && self.x == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.k.is_finite() && self.x.is_finite() && self.k > 0.0
    }

    pub fn apply(&self, pixel: f64) -> f64 {
        pixel * self.k + self.x
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        (pixel - self.x) / self.k
    }

    /// Translate by `dx` untransformed units.
    fn translate(&self, dx: f64) -> Self {
        if dx == 0.0 {
            *self
        } else {
            Self::new(self.k, self.x + self.k * dx)
        }
    }

    /// Shift by a screen-space pixel delta.
    pub fn pan_by(&self, delta: f64) -> Self {
        Self::new(self.k, self.x + delta)
    }

    /// Set the scale to `k` while keeping the screen point `anchor` fixed.
    pub fn scale_to(&self, k: f64, anchor: f64) -> Self {
        let fixed = self.invert(anchor);
        Self::new(k, anchor - fixed * k)
    }

    /// Clamp `k` into `[min_k, max_k]`, keeping `anchor` fixed.
    pub fn with_scale_extent(&self, min_k: f64, max_k: f64, anchor: f64) -> Self {
        let k = self.k.clamp(min_k, max_k);
        if k == self.k {
            *self
        } else {
            self.scale_to(k, anchor)
        }
    }

    /// Constrain the translation so the visible part stays within `extent`.
    pub fn constrain(&self, extent: PixelRange) -> Self {
        let (e0, e1) = (extent.min(), extent.max());
        let dx0 = self.invert(e0) - e0;
        let dx1 = self.invert(e1) - e1;
        let dx = if dx1 > dx0 {
            (dx0 + dx1) / 2.0
        } else if dx0 < 0.0 {
            dx0
        } else {
            dx1.max(0.0)
        };
        let constrained = self.translate(dx);
        // Snap rounding residue back to the identity
        if constrained.k == 1.0 && constrained.x.abs() < 1e-9 {
            Self::IDENTITY
        } else {
            constrained
        }
    }

    /// Rescale a base scale: the data window visible through this transform.
    pub fn rescale(&self, base: &LinearScale) -> DomainWindow {
        if self.is_identity() {
            return base.domain;
        }
        DomainWindow::new(
            base.invert(self.invert(base.range.start)),
            base.invert(self.invert(base.range.end)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> PixelRange {
        PixelRange::new(0.0, 100.0)
    }

    #[test]
    fn test_apply_invert() {
        let t = GestureTransform::new(2.0, -50.0);
        assert_eq!(t.apply(50.0), 50.0);
        assert_eq!(t.invert(50.0), 50.0);
        assert_eq!(t.invert(0.0), 25.0);
    }

    #[test]
    fn test_scale_to_keeps_anchor_fixed() {
        let t = GestureTransform::IDENTITY.scale_to(4.0, 30.0);
        assert_eq!(t.apply(30.0), 30.0);
        assert_eq!(t.k, 4.0);
    }

    #[test]
    fn test_constrain_blocks_pan_past_edges() {
        let zoomed = GestureTransform::new(2.0, 0.0);
        // Panning right would expose space before the first pixel
        let t = zoomed.pan_by(30.0).constrain(range());
        assert_eq!(t, GestureTransform::new(2.0, 0.0));

        // Panning left too far would expose space after the last pixel
        let t = zoomed.pan_by(-500.0).constrain(range());
        assert_eq!(t, GestureTransform::new(2.0, -100.0));
    }

    #[test]
    fn test_constrain_identity_pan_returns_identity() {
        let t = GestureTransform::IDENTITY.pan_by(25.0).constrain(range());
        assert!(t.is_identity());
    }

    #[test]
    fn test_rescale_zoomed_domain() {
        let base = LinearScale::new(DomainWindow::new(0.0, 10.0), range());
        let t = GestureTransform::IDENTITY.scale_to(2.0, 50.0);
        assert_eq!(t.rescale(&base), DomainWindow::new(2.5, 7.5));
    }

    #[test]
    fn test_scale_extent() {
        let t = GestureTransform::new(40.0, 0.0).with_scale_extent(1.0, 10.0, 0.0);
        assert_eq!(t.k, 10.0);
        let t = GestureTransform::new(0.5, 0.0).with_scale_extent(1.0, 10.0, 0.0);
        assert_eq!(t.k, 1.0);
    }
}
