//! Angular span geometry for the paddle on the arena rim
//!
//! A span is centered on an angle and extends `half_width` radians to either
//! side. Comparisons use the raw difference between atan2-range angles, so a
//! span straddling ±π does not reach across the seam.

use serde::{Deserialize, Serialize};

use crate::normalize_angle;

/// Largest half-width a span may have (just under a full half-turn)
pub const MAX_HALF_WIDTH: f32 = std::f32::consts::PI - 1e-3;

/// An angular interval on the rim
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSpan {
    /// Center angle (radians, normalized to [-π, π])
    pub center: f32,
    /// Half of the angular extent (radians, clamped to (0, π))
    pub half_width: f32,
}

impl ArcSpan {
    pub fn new(center: f32, half_width: f32) -> Self {
        Self {
            center: normalize_angle(center),
            half_width: clamp_half_width(half_width),
        }
    }

    /// Start angle of the span
    #[inline]
    pub fn start(&self) -> f32 {
        normalize_angle(self.center - self.half_width)
    }

    /// End angle of the span
    #[inline]
    pub fn end(&self) -> f32 {
        normalize_angle(self.center + self.half_width)
    }

    /// Signed offset of `theta` from the span center; no wraparound
    #[inline]
    pub fn offset_of(&self, theta: f32) -> f32 {
        theta - self.center
    }

    /// Check if an angle is strictly within the span
    pub fn contains_angle(&self, theta: f32) -> bool {
        self.offset_of(theta).abs() < self.half_width
    }

    /// Offset of `theta` scaled to [-1, 1] across the span
    pub fn normalized_offset(&self, theta: f32) -> f32 {
        (self.offset_of(theta) / self.half_width).clamp(-1.0, 1.0)
    }
}

/// Keep a half-width inside (0, π); NaN collapses to the smallest span
pub fn clamp_half_width(half_width: f32) -> f32 {
    if half_width.is_nan() {
        return f32::EPSILON;
    }
    half_width.clamp(f32::EPSILON, MAX_HALF_WIDTH)
}
