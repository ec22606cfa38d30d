use crate::{
    animation::{ease::Ease, segment::Segment},
    eval::frame::{CharacterPose, FrameOutputs, LayerOpacities},
    foundation::core::{ScrollProgress, Viewport},
    scene::layer::LayerDepths,
};

/// Total fall distance as a multiple of the viewport height.
pub const FALL_DISTANCE_VIEWPORTS: f64 = 1.2;
/// Rotation at the top of the fall, in degrees.
pub const ROTATION_START_DEG: f64 = -10.0;
/// Rotation swept over the whole fall, in degrees.
pub const ROTATION_SWEEP_DEG: f64 = 20.0;
/// Parallax shift per pixel of scroll per unit of depth.
pub const PARALLAX_FACTOR: f64 = -0.15;

/// Maps scroll progress to a complete frame of visual parameters.
pub struct ScrollAnimator;

impl ScrollAnimator {
    /// Compute one frame.
    ///
    /// `progress` need not be clamped; every segment clamps on its own.
    /// `raw_scroll_offset` only feeds the parallax term. Total over finite inputs.
    #[tracing::instrument(level = "trace", skip(depths))]
    pub fn compute_frame(
        progress: f64,
        viewport_height: f64,
        raw_scroll_offset: f64,
        depths: &LayerDepths,
    ) -> FrameOutputs {
        let eased = Ease::OutCubic.apply(Segment::FALL.progress(progress));
        let character = CharacterPose {
            y_offset_px: eased * (viewport_height * FALL_DISTANCE_VIEWPORTS),
            rotation_deg: ROTATION_START_DEG + eased * ROTATION_SWEEP_DEG,
        };

        let layers = LayerOpacities {
            black: Segment::BLACK_FADE.remaining(progress),
            // Rises then falls; exactly 1 between the two windows.
            atmosphere: Segment::ATMOSPHERE_IN.progress(progress)
                * Segment::ATMOSPHERE_OUT.remaining(progress),
            sky: Segment::SKY.progress(progress),
            hill: Segment::HILL.progress(progress),
        };

        let parallax = depths
            .iter()
            .map(|(id, depth)| (id, raw_scroll_offset * depth * PARALLAX_FACTOR))
            .collect();

        FrameOutputs {
            progress,
            character,
            layers,
            parallax,
            caption_opacity: Segment::CAPTION.progress(progress),
            title_opacity: Segment::TITLE.remaining(progress),
        }
    }

    /// Derive progress from a viewport snapshot and compute its frame.
    #[tracing::instrument(level = "debug", skip(depths))]
    pub fn frame_for_viewport(viewport: Viewport, depths: &LayerDepths) -> FrameOutputs {
        let ScrollProgress(progress) = viewport.progress();
        Self::compute_frame(
            progress,
            viewport.viewport_height,
            viewport.scroll_top,
            depths,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/animator.rs"]
mod tests;
