/// Easing curves over a unit interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// `1 - (1 - t)^3`, the decelerating curve used by the fall.
    OutCubic,
}

impl Ease {
    /// Apply the curve. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            // powf, not powi: the cube must round like a general `pow` call.
            Self::OutCubic => 1.0 - (1.0 - t).powf(3.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
