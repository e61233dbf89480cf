use crate::invalidation::ChangeFlags;
use crate::layout::{Size, SizeRange};

/// Convert an extent to a coordinate delta, saturating at `i32::MAX`.
pub(crate) fn saturating_i32(extent: u32) -> i32 {
    i32::try_from(extent).unwrap_or(i32::MAX)
}

/// Axis-aligned integer rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }


    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Intersection of this rect with `clip`.
    ///
    /// Disjoint rects produce a zero-size rect on the nearest clip edge.
    pub fn clip(&self, clip: &Rect) -> Rect {
        let left = (self.x as i64).max(clip.x as i64);
        let top = (self.y as i64).max(clip.y as i64);
        let right = self.right().min(clip.right());
        let bottom = self.bottom().min(clip.bottom());

        Rect {
            x: left.min(right) as i32,
            y: top.min(bottom) as i32,
            width: (right - left).max(0) as u32,
            height: (bottom - top).max(0) as u32,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (x as i64, y as i64);
        x >= self.x as i64 && x < self.right() && y >= self.y as i64 && y < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse/pointer moved
    MouseMove { x: i32, y: i32 },
    /// Mouse button pressed
    MouseDown { x: i32, y: i32, button: MouseButton },
    /// Mouse button released
    MouseUp { x: i32, y: i32, button: MouseButton },
    /// Mouse/pointer left the surface
    MouseLeave,
    /// Mouse wheel turned
    MouseWheel {
        /// X position of the pointer
        x: i32,
        /// Y position of the pointer
        y: i32,
        /// Wheel steps (positive = down)
        delta: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

impl Event {
    /// Get the coordinates from this event, if any
    pub fn coords(&self) -> Option<(i32, i32)> {
        match self {
            Event::MouseMove { x, y } => Some((*x, *y)),
            Event::MouseDown { x, y, .. } => Some((*x, *y)),
            Event::MouseUp { x, y, .. } => Some((*x, *y)),
            Event::MouseWheel { x, y, .. } => Some((*x, *y)),
            Event::MouseLeave => None,
        }
    }
}

pub trait Widget {
    /// Size constraints this widget wants from its parent layout.
    fn size_range(&self) -> SizeRange;

    fn optimal_size(&self) -> Size {
        self.size_range().optimal
    }

    /// Assign the final area and clip rect for this widget.
    /// Containers lay out their children from here.
    fn set_layout_area(&mut self, area: Rect, clip: Rect);

    fn bounds(&self) -> Rect;

    fn event(&mut self, event: &Event) -> EventResponse {
        let _ = event;
        EventResponse::Ignored
    }

    fn mark_dirty(&mut self, flags: ChangeFlags);
    fn needs_layout(&self) -> bool;
    fn needs_paint(&self) -> bool;
    fn clear_dirty(&mut self);
}

impl Widget for Box<dyn Widget> {
    fn size_range(&self) -> SizeRange {
        (**self).size_range()
    }
    fn optimal_size(&self) -> Size {
        (**self).optimal_size()
    }
    fn set_layout_area(&mut self, area: Rect, clip: Rect) {
        (**self).set_layout_area(area, clip)
    }
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
    fn event(&mut self, event: &Event) -> EventResponse {
        (**self).event(event)
    }
    fn mark_dirty(&mut self, flags: ChangeFlags) {
        (**self).mark_dirty(flags)
    }
    fn needs_layout(&self) -> bool {
        (**self).needs_layout()
    }
    fn needs_paint(&self) -> bool {
        (**self).needs_paint()
    }
    fn clear_dirty(&mut self) {
        (**self).clear_dirty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_new() {
        let rect = Rect::new(10, 20, 100, 200);
        assert_eq!(rect.x, 10);
        assert_eq!(rect.y, 20);
        assert_eq!(rect.width, 100);
        assert_eq!(rect.height, 200);
    }

    #[test]
    fn test_saturating_i32() {
        assert_eq!(saturating_i32(92), 92);
        assert_eq!(saturating_i32(i32::MAX as u32), i32::MAX);
        assert_eq!(saturating_i32(u32::MAX), i32::MAX);
    }

    #[test]
    fn test_rect_offset() {
        let rect = Rect::new(10, 20, 100, 200).offset(-15, 10);
        assert_eq!(rect, Rect::new(-5, 30, 100, 200));
    }

    #[test]
    fn test_rect_clip_overlapping() {
        let rect = Rect::new(0, 0, 100, 100);
        let clip = Rect::new(50, 25, 100, 50);
        assert_eq!(rect.clip(&clip), Rect::new(50, 25, 50, 50));
        assert_eq!(clip.clip(&rect), Rect::new(50, 25, 50, 50));
    }

    #[test]
    fn test_rect_clip_disjoint_is_empty() {
        let rect = Rect::new(0, 0, 10, 10);
        let clip = Rect::new(50, 50, 10, 10);
        let clipped = rect.clip(&clip);
        assert!(clipped.is_empty());

    }

    #[test]
    fn test_rect_clip_negative_origin() {
        // Content scrolled up and left of its viewport
        let content = Rect::new(-30, -40, 300, 200);
        let viewport = Rect::new(0, 0, 100, 50);
        assert_eq!(content.clip(&viewport), viewport);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10, 20, 100, 50);

        assert!(rect.contains(50, 40));
        assert!(rect.contains(10, 20)); // Top-left corner (inclusive)
        assert!(!rect.contains(110, 70)); // Bottom-right corner (exclusive)
        assert!(!rect.contains(5, 40));
        assert!(!rect.contains(50, 100));
    }

    #[test]
    fn test_zero_size_rect_contains_nothing() {
        let rect = Rect::new(10, 10, 0, 0);
        assert!(!rect.contains(10, 10));
    }

    #[test]
    fn test_event_coords() {
        let wheel = Event::MouseWheel {
            x: 3,
            y: 4,
            delta: 1.0,
        };
        assert_eq!(wheel.coords(), Some((3, 4)));
        assert_eq!(Event::MouseLeave.coords(), None);
    }
}
