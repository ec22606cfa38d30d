use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use crate::{
    foundation::error::{ScrollfallError, ScrollfallResult},
    scene::layer::{LayerDepths, LayerId, parse_depth_attr},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Static scene description: which layers exist and how strongly each one
/// parallaxes.
///
/// A scene is plain data and can be:
/// - built programmatically (see [`SceneConfig::default`])
/// - loaded from JSON (see [`SceneConfig::from_path`])
pub struct SceneConfig {
    /// Background layers in document order.
    pub layers: Vec<LayerSpec>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One background layer element.
pub struct LayerSpec {
    /// Element class list, e.g. `"layer layer-sky"`.
    pub class: String,
    /// Parallax depth. Accepts a number or a raw attribute string; absent means 0.
    #[serde(default)]
    pub depth: Option<DepthAttr>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Depth as authored: either already numeric or an attribute string.
pub enum DepthAttr {
    /// Numeric depth.
    Number(f64),
    /// Attribute text, parsed with [`parse_depth_attr`].
    Text(String),
}

impl LayerSpec {
    /// Layer this element styles, if its class list names one.
    pub fn layer_id(&self) -> Option<LayerId> {
        LayerId::from_class_list(&self.class)
    }

    /// Resolved depth coefficient.
    pub fn depth(&self) -> f64 {
        match &self.depth {
            None => 0.0,
            Some(DepthAttr::Number(v)) => *v,
            Some(DepthAttr::Text(s)) => parse_depth_attr(Some(s)),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            layers: LayerId::ALL
                .into_iter()
                .map(|id| LayerSpec {
                    class: format!("layer {}", id.class_name()),
                    depth: None,
                })
                .collect(),
        }
    }
}

impl SceneConfig {
    /// Load and validate a scene from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ScrollfallResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollfallError::config(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Load and validate a scene from any JSON reader.
    pub fn from_reader(r: impl std::io::Read) -> ScrollfallResult<Self> {
        let scene: Self = serde_json::from_reader(r)
            .map_err(|e| ScrollfallError::serde(format!("parse scene JSON: {e}")))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load and validate a scene from a JSON string.
    pub fn from_json_str(s: &str) -> ScrollfallResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Check that every layer resolves to a distinct known id with a finite depth.
    ///
    /// Elements that carry only the generic `layer` class are rejected: styles
    /// are addressed by [`LayerId`], so an element without one has no target.
    pub fn validate(&self) -> ScrollfallResult<()> {
        let mut seen = BTreeSet::new();
        for spec in &self.layers {
            let Some(id) = spec.layer_id() else {
                return Err(ScrollfallError::validation(format!(
                    "layer class '{}' does not name a known layer",
                    spec.class
                )));
            };
            if !seen.insert(id) {
                return Err(ScrollfallError::validation(format!(
                    "layer '{id}' is declared more than once"
                )));
            }
            let depth = spec.depth();
            if !depth.is_finite() {
                return Err(ScrollfallError::validation(format!(
                    "layer '{id}' depth must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Depth table consumed by the animator.
    pub fn depths(&self) -> LayerDepths {
        self.layers
            .iter()
            .filter_map(|spec| spec.layer_id().map(|id| (id, spec.depth())))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
