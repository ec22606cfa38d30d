pub use kurbo::Affine;

/// The three environment reads a frame is derived from, all in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Current vertical scroll offset of the document.
    pub scroll_top: f64,
    /// Height of the visible viewport.
    pub viewport_height: f64,
    /// Total height of the scrollable content.
    pub content_height: f64,
}

impl Viewport {
    /// Build a viewport snapshot.
    pub fn new(scroll_top: f64, viewport_height: f64, content_height: f64) -> Self {
        Self {
            scroll_top,
            viewport_height,
            content_height,
        }
    }

    /// Distance the document can actually scroll. Non-positive for content
    /// that fits on a single screen.
    pub fn scrollable_height(self) -> f64 {
        self.content_height - self.viewport_height
    }

    /// Normalized scroll position for this snapshot.
    pub fn progress(self) -> ScrollProgress {
        ScrollProgress::from_viewport(self)
    }
}

/// Normalized scroll position, nominally in `[0, 1]`.
///
/// The ratio is not clamped on derivation; overscroll can push it slightly
/// outside the unit range and every segment clamps on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct ScrollProgress(pub f64);

impl ScrollProgress {
    /// Progress at the top of the document.
    pub const START: Self = Self(0.0);

    /// `scroll_top / (content_height - viewport_height)`, or 0 when the
    /// content does not scroll.
    pub fn from_viewport(viewport: Viewport) -> Self {
        let denom = viewport.scrollable_height();
        if denom > 0.0 {
            Self(viewport.scroll_top / denom)
        } else {
            Self::START
        }
    }

    /// Raw scalar value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for ScrollProgress {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
