/// Extent used for an unbounded maximum size.
pub const UNBOUNDED: u32 = u32::MAX;

/// Smallest optimal extent a scroll area will report on either axis.
/// Zero-sized optimal sizes don't work well with the layout system.
pub const MIN_OPTIMAL_EXTENT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0,
            height: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Component-wise maximum
    pub fn max(self, other: Size) -> Size {
        Size {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

/// Size constraints reported by a layout node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    pub min: Size,
    pub optimal: Size,
    pub max: Size,
}

impl SizeRange {
    pub fn new(min: Size, optimal: Size, max: Size) -> Self {
        Self { min, optimal, max }
    }

    /// A range that only accepts `size`.
    pub fn fixed(size: Size) -> Self {
        Self {
            min: size,
            optimal: size,
            max: size,
        }
    }

    /// A range that prefers `optimal` but can grow without limit.
    pub fn flexible(min: Size, optimal: Size) -> Self {
        Self {
            min,
            optimal,
            max: Size::new(UNBOUNDED, UNBOUNDED),
        }
    }

    /// Raise the optimal size to at least `floor` on each axis.
    pub fn with_optimal_floor(mut self, floor: u32) -> Self {
        self.optimal.width = self.optimal.width.max(floor);
        self.optimal.height = self.optimal.height.max(floor);
        self
    }

    /// Clamp a width into this range. The minimum wins over the maximum.
    pub fn clamp_width(&self, width: u32) -> u32 {
        width.min(self.max.width).max(self.min.width)
    }

    /// Clamp a height into this range. The minimum wins over the maximum.
    pub fn clamp_height(&self, height: u32) -> u32 {
        height.min(self.max.height).max(self.min.height)
    }
}

impl Default for SizeRange {
    /// The empty range: everything zero.
    fn default() -> Self {
        Self {
            min: Size::zero(),
            optimal: Size::zero(),
            max: Size::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_new() {
        let size = Size::new(100, 50);
        assert_eq!(size.width, 100);
        assert_eq!(size.height, 50);
    }

    #[test]
    fn test_size_is_empty() {
        assert!(Size::zero().is_empty());
        assert!(Size::new(0, 10).is_empty());
        assert!(Size::new(10, 0).is_empty());
        assert!(!Size::new(10, 10).is_empty());
    }

    #[test]
    fn test_size_max() {
        assert_eq!(Size::new(5, 20).max(Size::new(10, 3)), Size::new(10, 20));
    }

    #[test]
    fn test_range_fixed() {
        let range = SizeRange::fixed(Size::new(40, 30));
        assert_eq!(range.min, range.optimal);
        assert_eq!(range.optimal, range.max);
        assert_eq!(range.clamp_width(100), 40);
        assert_eq!(range.clamp_height(0), 30);
    }

    #[test]
    fn test_range_flexible_is_unbounded() {
        let range = SizeRange::flexible(Size::new(10, 10), Size::new(50, 20));
        assert_eq!(range.max, Size::new(UNBOUNDED, UNBOUNDED));
        assert_eq!(range.clamp_width(5000), 5000);
        assert_eq!(range.clamp_width(3), 10);
    }

    #[test]
    fn test_clamp_min_wins_over_max() {
        let range = SizeRange::new(Size::new(50, 50), Size::new(50, 50), Size::new(20, 20));
        assert_eq!(range.clamp_width(30), 50);
        assert_eq!(range.clamp_height(10), 50);
    }

    #[test]
    fn test_optimal_floor() {
        let range = SizeRange::default().with_optimal_floor(MIN_OPTIMAL_EXTENT);
        assert_eq!(range.optimal, Size::new(10, 10));
        assert_eq!(range.min, Size::zero());

        let big = SizeRange::fixed(Size::new(300, 50)).with_optimal_floor(MIN_OPTIMAL_EXTENT);
        assert_eq!(big.optimal, Size::new(300, 50));
    }

    #[test]
    fn test_range_default_is_empty() {
        let range = SizeRange::default();
        assert_eq!(range.min, Size::zero());
        assert_eq!(range.optimal, Size::zero());
        assert_eq!(range.max, Size::zero());
    }
}
