use std::collections::BTreeMap;

/// The background layers that cross-fade behind the falling character.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LayerId {
    /// Opaque black backdrop shown at the very top.
    Black,
    /// Hazy atmosphere that rises and falls mid-descent.
    Atmosphere,
    /// Open sky.
    Sky,
    /// The hill the character lands above.
    Hill,
}

impl LayerId {
    /// All layers in back-to-front document order.
    pub const ALL: [LayerId; 4] = [Self::Black, Self::Atmosphere, Self::Sky, Self::Hill];

    /// Element class carrying this layer's styling.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Black => "layer-black",
            Self::Atmosphere => "layer-atmosphere",
            Self::Sky => "layer-sky",
            Self::Hill => "layer-hill",
        }
    }

    /// Resolve a layer from a single class name.
    pub fn from_class_name(class: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.class_name() == class.trim())
    }

    /// Resolve a layer from a whitespace-separated class list, e.g.
    /// `"layer layer-sky"`. A list naming several layers resolves by fixed
    /// precedence black, atmosphere, sky, hill, whatever the class order.
    pub fn from_class_list(classes: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| {
            classes
                .split_whitespace()
                .any(|class| class == id.class_name())
        })
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Static per-layer parallax coefficients. Layers without an entry have depth 0.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct LayerDepths(BTreeMap<LayerId, f64>);

impl LayerDepths {
    /// Empty map: every layer sits at depth 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one layer's depth, replacing any previous value.
    pub fn set(&mut self, layer: LayerId, depth: f64) {
        self.0.insert(layer, depth);
    }

    /// Builder-style [`LayerDepths::set`].
    pub fn with(mut self, layer: LayerId, depth: f64) -> Self {
        self.set(layer, depth);
        self
    }

    /// Depth for `layer`, defaulting to 0.
    pub fn depth(&self, layer: LayerId) -> f64 {
        self.0.get(&layer).copied().unwrap_or(0.0)
    }

    /// Configured layers and their depths, ordered by [`LayerId`].
    pub fn iter(&self) -> impl Iterator<Item = (LayerId, f64)> + '_ {
        self.0.iter().map(|(id, d)| (*id, *d))
    }
}

impl FromIterator<(LayerId, f64)> for LayerDepths {
    fn from_iter<I: IntoIterator<Item = (LayerId, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse a depth attribute the way a markup `data-depth` value is read:
/// leading float prefix, anything unparseable or absent is 0.
pub fn parse_depth_attr(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let s = raw.trim_start();
    let prefix_len = float_prefix_len(s);
    match s[..prefix_len].parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            tracing::warn!(attr = raw, "unparseable depth attribute, using 0");
            0.0
        }
    }
}

// Longest prefix of `s` that looks like a decimal float literal.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let mut seen_digit = false;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        seen_digit = true;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            seen_digit = true;
        }
    }
    if !seen_digit {
        return 0;
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layer.rs"]
mod tests;
