//! Data-domain windows and the clamping rule shared by every chart axis.

use serde::{Deserialize, Serialize};

/// Smallest span treated as a usable domain; also the publication threshold.
pub const DOMAIN_EPSILON: f64 = 1e-6;

/// A visible slice of one axis' data domain.
///
/// `start` maps to the start of the pixel range, so a window with
/// `start > end` describes a descending axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainWindow {
    pub start: f64,
    pub end: f64,
}

impl DomainWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn min(&self) -> f64 {
        self.start.min(self.end)
    }

    pub fn max(&self) -> f64 {
        self.start.max(self.end)
    }

    pub fn span(&self) -> f64 {
        (self.end - self.start).abs()
    }

    pub fn is_descending(&self) -> bool {
        self.start > self.end
    }

    /// Both bounds finite and the span wide enough to zoom into.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.span() >= DOMAIN_EPSILON
    }

    /// True when neither bound moved by more than [`DOMAIN_EPSILON`].
    pub fn approx_eq(&self, other: &DomainWindow) -> bool {
        (self.start - other.start).abs() <= DOMAIN_EPSILON
            && (self.end - other.end).abs() <= DOMAIN_EPSILON
    }

    /// Bit-for-bit equality of both bounds.
    pub fn is_identical(&self, other: &DomainWindow) -> bool {
        self.start.to_bits() == other.start.to_bits() && self.end.to_bits() == other.end.to_bits()
    }

    fn oriented_like(&self, min: f64, max: f64) -> DomainWindow {
        if self.is_descending() {
            DomainWindow::new(max, min)
        } else {
            DomainWindow::new(min, max)
        }
    }
}

/// Clamp a candidate window so it never leaves the base domain.
///
/// A candidate at least as wide as the base collapses to the base. Otherwise
/// the window is translated back inside (left overflow first, then right)
/// and only then clipped, so panning into an edge keeps the full width.
/// Degenerate results and invalid inputs fall back to the base verbatim.
/// The result always runs in the base's direction.
pub fn clamp_domain(candidate: DomainWindow, base: DomainWindow) -> DomainWindow {
    if !base.is_valid() || !candidate.start.is_finite() || !candidate.end.is_finite() {
        return base;
    }

    let (base_min, base_max) = (base.min(), base.max());
    let base_span = base_max - base_min;
    let (mut lo, mut hi) = (candidate.min(), candidate.max());

    if hi - lo >= base_span {
        return base;
    }

    if lo < base_min {
        hi += base_min - lo;
        lo = base_min;
    }
    if hi > base_max {
        lo -= hi - base_max;
        hi = base_max;
    }
    lo = lo.max(base_min);
    hi = hi.min(base_max);

    let span = hi - lo;
    if span < DOMAIN_EPSILON || span >= base_span {
        return base;
    }

    base.oriented_like(lo, hi)
}
