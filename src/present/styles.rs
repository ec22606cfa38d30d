use std::collections::BTreeMap;

use crate::{eval::frame::FrameOutputs, scene::layer::LayerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Presentation element a style is written to.
pub enum StyleTarget {
    /// The falling character sprite.
    Character,
    /// One background layer.
    Layer(LayerId),
    /// Ending caption.
    Caption,
    /// Hero title.
    Title,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "property", rename_all = "snake_case")]
/// A single style write.
pub enum StyleAssignment {
    /// CSS `transform` value.
    Transform {
        /// Element written to.
        target: StyleTarget,
        /// Transform function list.
        css: String,
    },
    /// CSS `opacity` value.
    Opacity {
        /// Element written to.
        target: StyleTarget,
        /// Opacity in `[0, 1]`.
        value: f64,
    },
}

impl StyleAssignment {
    /// Element this assignment targets.
    pub fn target(&self) -> StyleTarget {
        match self {
            Self::Transform { target, .. } | Self::Opacity { target, .. } => *target,
        }
    }
}

/// Host-side receiver for style writes.
pub trait StyleSink {
    /// Overwrite one style property.
    fn apply(&mut self, assignment: StyleAssignment);
}

/// Render a frame into the style writes a host applies, in write order:
/// character, then every layer (opacity, transform), then caption and title.
///
/// Layers missing from the depth table still get their opacity and a zero shift.
pub fn style_assignments(frame: &FrameOutputs) -> Vec<StyleAssignment> {
    let mut out = Vec::with_capacity(3 + 2 * LayerId::ALL.len());
    out.push(StyleAssignment::Transform {
        target: StyleTarget::Character,
        css: format!(
            "translate(-50%, {}px) rotate({}deg)",
            css_number(frame.character.y_offset_px),
            css_number(frame.character.rotation_deg)
        ),
    });
    for id in LayerId::ALL {
        out.push(StyleAssignment::Opacity {
            target: StyleTarget::Layer(id),
            value: frame.layers.get(id),
        });
        out.push(StyleAssignment::Transform {
            target: StyleTarget::Layer(id),
            css: format!("translateY({}px)", css_number(frame.parallax_px(id))),
        });
    }
    out.push(StyleAssignment::Opacity {
        target: StyleTarget::Caption,
        value: frame.caption_opacity,
    });
    out.push(StyleAssignment::Opacity {
        target: StyleTarget::Title,
        value: frame.title_opacity,
    });
    out
}

// Negative zero prints as "-0"; hosts expect "0".
fn css_number(v: f64) -> f64 {
    v + 0.0
}

/// In-memory sink keeping the last value written per element and property.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedStyles {
    transforms: BTreeMap<StyleTarget, String>,
    opacities: BTreeMap<StyleTarget, f64>,
    writes: u64,
}

impl RecordedStyles {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last transform written to `target`.
    pub fn transform(&self, target: StyleTarget) -> Option<&str> {
        self.transforms.get(&target).map(String::as_str)
    }

    /// Last opacity written to `target`.
    pub fn opacity(&self, target: StyleTarget) -> Option<f64> {
        self.opacities.get(&target).copied()
    }

    /// Total writes received, including overwrites.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl StyleSink for RecordedStyles {
    fn apply(&mut self, assignment: StyleAssignment) {
        self.writes += 1;
        match assignment {
            StyleAssignment::Transform { target, css } => {
                self.transforms.insert(target, css);
            }
            StyleAssignment::Opacity { target, value } => {
                self.opacities.insert(target, value);
            }
        }
    }
}

impl StyleSink for Vec<StyleAssignment> {
    fn apply(&mut self, assignment: StyleAssignment) {
        self.push(assignment);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/present/styles.rs"]
mod tests;
