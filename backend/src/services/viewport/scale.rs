//! Linear data-to-pixel mapping.

use serde::{Deserialize, Serialize};

use super::domain::{DomainWindow, DOMAIN_EPSILON};

/// Pixel interval an axis is drawn into. `start > end` for SVG-style y axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn min(&self) -> f64 {
        self.start.min(self.end)
    }

    pub fn max(&self) -> f64 {
        self.start.max(self.end)
    }

    pub fn len(&self) -> f64 {
        (self.end - self.start).abs()
    }

    pub fn is_valid(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.len() >= DOMAIN_EPSILON
    }
}

/// A continuous linear scale, the forward half of every chart axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: DomainWindow,
    pub range: PixelRange,
}

impl LinearScale {
    pub fn new(domain: DomainWindow, range: PixelRange) -> Self {
        Self { domain, range }
    }

    /// Map a data value to a pixel position.
    ///
    /// A zero-width domain maps everything to the middle of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let span = self.domain.end - self.domain.start;
        let t = if span == 0.0 {
            0.5
        } else {
            (value - self.domain.start) / span
        };
        self.range.start + t * (self.range.end - self.range.start)
    }

    /// Map a pixel position back to a data value.
    ///
    /// A zero-width range maps everything to the domain start.
    pub fn invert(&self, pixel: f64) -> f64 {
        let extent = self.range.end - self.range.start;
        if extent == 0.0 {
            return self.domain.start;
        }
        let t = (pixel - self.range.start) / extent;
        self.domain.start + t * (self.domain.end - self.domain.start)
    }
}
