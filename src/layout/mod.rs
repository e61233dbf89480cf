pub mod size;

pub use size::{Size, SizeRange, MIN_OPTIMAL_EXTENT, UNBOUNDED};

/// A unified sizing type that can specify exact, min, max, or range constraints.
///
/// # Examples
/// ```
/// use scrollarea::prelude::*;
///
/// // Exact size (most common)
/// block().width(200);
///
/// // Minimum only
/// block().width(at_least(100));
///
/// // Range (both orders work)
/// block().width(at_least(50).at_most(400));
/// block().width(at_most(400).at_least(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Length {
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub exact: Option<u32>,
}

impl Length {
    /// Add a minimum constraint to this length.
    pub fn at_least(mut self, min: u32) -> Self {
        self.min = Some(min);
        self
    }

    /// Add a maximum constraint to this length.
    pub fn at_most(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }

    /// Resolve to `(min, optimal, max)` along one axis.
    ///
    /// An exact length is fixed. Otherwise the optimal extent is the minimum,
    /// and a missing maximum means the element can grow without limit.
    pub fn resolve(&self) -> (u32, u32, u32) {
        if let Some(exact) = self.exact {
            return (exact, exact, exact);
        }
        let min = self.min.unwrap_or(0);
        let max = self.max.unwrap_or(UNBOUNDED).max(min);
        (min, min, max)
    }
}

/// Create a length with a minimum constraint.
pub fn at_least(min: u32) -> Length {
    Length {
        min: Some(min),
        max: None,
        exact: None,
    }
}

/// Create a length with a maximum constraint.
pub fn at_most(max: u32) -> Length {
    Length {
        min: None,
        max: Some(max),
        exact: None,
    }
}

/// u32 converts to exact sizing
impl From<u32> for Length {
    fn from(value: u32) -> Self {
        Length {
            min: None,
            max: None,
            exact: Some(value),
        }
    }
}

/// A layout node that can be measured at a candidate size.
///
/// `actual_size` must be deterministic: the scroll area measures its content
/// several times per pass and relies on identical inputs giving identical
/// outputs.
pub trait Layout {
    /// Size this node actually occupies when laid out in a `width` x `height` area.
    fn actual_size(&self, width: u32, height: u32) -> Size;
}

/// Cross axis alignment for stacking layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossAxisAlignment {
    Start,
    Center,
    End,
    #[default]
    Stretch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_exact() {
        assert_eq!(Length::from(40).resolve(), (40, 40, 40));
    }

    #[test]
    fn test_length_at_least_is_unbounded() {
        assert_eq!(at_least(30).resolve(), (30, 30, UNBOUNDED));
    }

    #[test]
    fn test_length_range_either_order() {
        assert_eq!(at_least(50).at_most(400).resolve(), (50, 50, 400));
        assert_eq!(at_most(400).at_least(50).resolve(), (50, 50, 400));
    }

    #[test]
    fn test_length_max_below_min() {
        // Minimum wins
        assert_eq!(at_least(100).at_most(20).resolve(), (100, 100, 100));
    }

    #[test]
    fn test_length_default_is_flexible_zero() {
        assert_eq!(Length::default().resolve(), (0, 0, UNBOUNDED));
    }
}
