use std::collections::BTreeMap;

use crate::{foundation::core::Affine, scene::layer::LayerId};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Every visual parameter for one frame.
///
/// Frames carry no history: two frames computed from the same inputs are equal.
pub struct FrameOutputs {
    /// Progress the frame was computed from.
    pub progress: f64,
    /// Falling character placement.
    pub character: CharacterPose,
    /// Background layer opacities.
    pub layers: LayerOpacities,
    /// Vertical parallax translation per configured layer, in pixels.
    pub parallax: BTreeMap<LayerId, f64>,
    /// Ending caption opacity.
    pub caption_opacity: f64,
    /// Hero title opacity.
    pub title_opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Character sprite transform.
pub struct CharacterPose {
    /// Downward offset from the resting position, in pixels.
    pub y_offset_px: f64,
    /// Clockwise rotation in degrees.
    pub rotation_deg: f64,
}

impl CharacterPose {
    /// Translate-then-rotate as an affine map, rotation about the sprite origin.
    pub fn to_affine(self) -> Affine {
        Affine::translate((0.0, self.y_offset_px)) * Affine::rotate(self.rotation_deg.to_radians())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[allow(missing_docs)]
/// Background layer opacities, each in `[0, 1]`.
pub struct LayerOpacities {
    pub black: f64,
    pub atmosphere: f64,
    pub sky: f64,
    pub hill: f64,
}

impl LayerOpacities {
    /// Opacity for one layer.
    pub fn get(&self, layer: LayerId) -> f64 {
        match layer {
            LayerId::Black => self.black,
            LayerId::Atmosphere => self.atmosphere,
            LayerId::Sky => self.sky,
            LayerId::Hill => self.hill,
        }
    }
}

impl FrameOutputs {
    /// Parallax shift for `layer`; 0 for layers not in the depth table.
    pub fn parallax_px(&self, layer: LayerId) -> f64 {
        self.parallax.get(&layer).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/frame.rs"]
mod tests;
