//! scrollfall drives a scroll-linked fall animation.
//!
//! A single scroll progress value in `[0, 1]` is mapped to every visual
//! parameter of a frame: the falling character's offset and rotation, four
//! cross-fading background layers with depth-based parallax, an ending caption
//! and a hero title.
//!
//! # Pipeline overview
//!
//! 1. **Measure**: the host reads a [`Viewport`] (scroll offset, viewport and content height).
//! 2. **Compute**: [`ScrollAnimator::compute_frame`] turns progress into [`FrameOutputs`].
//! 3. **Present**: [`style_assignments`] renders the frame as style writes, which
//!    [`ScrollDriver::on_signal`] pushes into a host [`StyleSink`].
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Stateless frames**: a frame depends only on its inputs, never on prior frames.
//! - **Total mapping**: frame computation has no error path; only scene loading can fail.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod eval;
mod foundation;
mod present;
mod scene;

pub use animation::ease::Ease;
pub use animation::segment::{Segment, segment_progress};
pub use eval::animator::{
    FALL_DISTANCE_VIEWPORTS, PARALLAX_FACTOR, ROTATION_START_DEG, ROTATION_SWEEP_DEG,
    ScrollAnimator,
};
pub use eval::frame::{CharacterPose, FrameOutputs, LayerOpacities};
pub use foundation::core::{Affine, ScrollProgress, Viewport};
pub use foundation::error::{ScrollfallError, ScrollfallResult};
pub use present::driver::{ScrollDriver, Signal};
pub use present::styles::{
    RecordedStyles, StyleAssignment, StyleSink, StyleTarget, style_assignments,
};
pub use scene::config::{DepthAttr, LayerSpec, SceneConfig};
pub use scene::layer::{LayerDepths, LayerId, parse_depth_attr};
