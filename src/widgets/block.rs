//! A leaf element with a configurable size range.

use crate::invalidation::ChangeFlags;
use crate::layout::{Length, Size, SizeRange};

use super::impl_dirty_flags;
use super::widget::{Rect, Widget};

/// Leaf content element. It takes whatever area its parent hands it and
/// remembers it, which makes it the building block for scroll area content.
pub struct Block {
    dirty_flags: ChangeFlags,
    width: Length,
    height: Length,
    bounds: Rect,
    clip: Rect,
}

impl Block {
    pub fn new() -> Self {
        Self {
            dirty_flags: ChangeFlags::default(),
            width: Length::default(),
            height: Length::default(),
            bounds: Rect::default(),
            clip: Rect::default(),
        }
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Clip rect from the last layout pass
    pub fn clip_rect(&self) -> Rect {
        self.clip
    }

    /// Part of the block that is actually visible
    pub fn visible_bounds(&self) -> Rect {
        self.bounds.clip(&self.clip)
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Block {
    fn size_range(&self) -> SizeRange {
        let (min_w, opt_w, max_w) = self.width.resolve();
        let (min_h, opt_h, max_h) = self.height.resolve();
        SizeRange::new(
            Size::new(min_w, min_h),
            Size::new(opt_w, opt_h),
            Size::new(max_w, max_h),
        )
    }

    fn set_layout_area(&mut self, area: Rect, clip: Rect) {
        if area != self.bounds || clip != self.clip {
            self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
        }
        self.bounds = area;
        self.clip = clip;
        self.dirty_flags.remove(ChangeFlags::NEEDS_LAYOUT);
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    impl_dirty_flags!();
}

pub fn block() -> Block {
    Block::new()
}
