//! Sub-ranges of scroll progress renormalized to `[0, 1]`.

/// Maps `t` into the `[start, end]` window: 0 at or before `start`, 1 at or
/// after `end`, linear in between.
///
/// Callers are expected to pass `start < end`.
pub fn segment_progress(t: f64, start: f64, end: f64) -> f64 {
    if t <= start {
        return 0.0;
    }
    if t >= end {
        return 1.0;
    }
    (t - start) / (end - start)
}

/// An immutable `(start, end)` window over scroll progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// Progress at which the segment starts moving off 0.
    pub start: f64,
    /// Progress at which the segment reaches 1.
    pub end: f64,
}

impl Segment {
    /// Character fall.
    pub const FALL: Self = Self::new(0.0, 0.8);
    /// Black backdrop fading out.
    pub const BLACK_FADE: Self = Self::new(0.0, 0.2);
    /// Atmosphere rising.
    pub const ATMOSPHERE_IN: Self = Self::new(0.05, 0.35);
    /// Atmosphere falling away again.
    pub const ATMOSPHERE_OUT: Self = Self::new(0.5, 0.8);
    /// Sky fading in.
    pub const SKY: Self = Self::new(0.25, 0.55);
    /// Hill fading in.
    pub const HILL: Self = Self::new(0.55, 0.9);
    /// Ending caption fading in.
    pub const CAPTION: Self = Self::new(0.78, 0.98);
    /// Hero title fading out.
    pub const TITLE: Self = Self::new(0.15, 0.4);

    /// Build a segment.
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Renormalized progress within this segment.
    pub fn progress(self, t: f64) -> f64 {
        segment_progress(t, self.start, self.end)
    }

    /// `1 - progress(t)`, for elements that fade out across the segment.
    pub fn remaining(self, t: f64) -> f64 {
        1.0 - self.progress(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/segment.rs"]
mod tests;
