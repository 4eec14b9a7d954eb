use crate::px::px_to_int;

/// Height clamp for a sized text control, in integer px.
///
/// `min` is conventionally the height of a standard one-line control so
/// sized textareas align with their neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeightBounds {
    pub min: i32,
    pub max: i32,
}

impl HeightBounds {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Clamp a desired content height into these bounds.
    ///
    /// A non-positive `max` (e.g. parsed from `max-height: none`) means
    /// no ceiling; only the floor applies.
    pub fn clamp(&self, desired: i32) -> i32 {
        if desired < self.min {
            return self.min;
        }
        if self.max > 0 && desired > self.max {
            return self.max;
        }
        desired
    }

    /// Read `min-height` / `max-height` out of style declarations
    /// (lowercase property names, as after cascade). Missing or
    /// malformed entries parse as 0.
    pub fn from_declarations(declarations: &[(String, String)]) -> Self {
        let find = |prop: &str| {
            declarations
                .iter()
                .find(|(k, _)| k == prop)
                .map(|(_, v)| px_to_int(v))
                .unwrap_or(0)
        };
        Self {
            min: find("min-height"),
            max: find("max-height"),
        }
    }
}
