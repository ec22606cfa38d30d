use crate::{
    eval::{animator::ScrollAnimator, frame::FrameOutputs},
    foundation::core::Viewport,
    present::styles::{StyleSink, style_assignments},
    scene::{config::SceneConfig, layer::LayerDepths},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Host events that trigger a recompute. None carries a payload.
pub enum Signal {
    /// Page finished loading.
    Load,
    /// Viewport was resized.
    Resize,
    /// Scroll position changed.
    Scroll,
}

/// Recompute-and-apply entry point for a host event loop.
///
/// Holds only static scene configuration. Each signal computes a fresh frame
/// and overwrites every style in the sink; nothing is queued or carried over.
#[derive(Clone, Debug)]
pub struct ScrollDriver {
    depths: LayerDepths,
}

impl ScrollDriver {
    /// Driver for a validated scene.
    pub fn new(scene: &SceneConfig) -> Self {
        Self {
            depths: scene.depths(),
        }
    }

    /// Driver over an explicit depth table.
    pub fn from_depths(depths: LayerDepths) -> Self {
        Self { depths }
    }

    /// Depth table frames are computed with.
    pub fn depths(&self) -> &LayerDepths {
        &self.depths
    }

    /// Compute the frame for `viewport` without applying it.
    pub fn frame(&self, viewport: Viewport) -> FrameOutputs {
        ScrollAnimator::frame_for_viewport(viewport, &self.depths)
    }

    /// Handle one host signal: compute a frame and write it to `sink`.
    pub fn on_signal(
        &self,
        signal: Signal,
        viewport: Viewport,
        sink: &mut impl StyleSink,
    ) -> FrameOutputs {
        let frame = self.frame(viewport);
        tracing::debug!(
            ?signal,
            progress = frame.progress,
            scroll_top = viewport.scroll_top,
            "apply frame"
        );
        for assignment in style_assignments(&frame) {
            sink.apply(assignment);
        }
        frame
    }
}

impl Default for ScrollDriver {
    fn default() -> Self {
        Self::new(&SceneConfig::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/present/driver.rs"]
mod tests;
