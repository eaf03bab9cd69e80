use serde::{Deserialize, Serialize};

/// Linear map of `value` from `[old_min, old_max]` to `[new_min, new_max]`.
///
/// A degenerate source range (`old_max == old_min`) maps everything to
/// `new_min`.
pub fn rescale(value: f64, old_min: f64, old_max: f64, new_min: f64, new_max: f64) -> f64 {
    if old_max == old_min {
        return new_min;
    }
    new_min + (value - old_min) * (new_max - new_min) / (old_max - old_min)
}

/// Round to two decimals. Exact ties go to the even neighbour.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Source and target range for [`rescale`]. Defaults to 1..5 → 1..100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scale {
    pub old_min: f64,
    pub old_max: f64,
    pub new_min: f64,
    pub new_max: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            old_min: 1.0,
            old_max: 5.0,
            new_min: 1.0,
            new_max: 100.0,
        }
    }
}

impl Scale {
    pub fn apply(&self, value: f64) -> f64 {
        rescale(value, self.old_min, self.old_max, self.new_min, self.new_max)
    }
}
