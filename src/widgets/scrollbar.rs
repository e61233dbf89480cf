//! Scrollbar controller: a draggable handle inside a track.

use crate::invalidation::ChangeFlags;
use crate::layout::{Size, SizeRange, UNBOUNDED};

use super::impl_dirty_flags;
use super::scroll::{clamp01, ScrollbarAxis};
use super::widget::{Event, EventResponse, MouseButton, Rect, Widget};

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragStart {
    pointer: i32,
    position: f32,
}

/// A scrollbar with a handle of variable length and a normalized position.
///
/// The position is always in `[0, 1]`. User interaction (dragging the handle,
/// clicking the track, relative scrolling) leaves a pending change that the
/// owner drains with [`ScrollBar::take_position_change`]. Setting the position
/// directly with [`ScrollBar::set_scroll_position`] never does.
pub struct ScrollBar {
    axis: ScrollbarAxis,
    dirty_flags: ChangeFlags,
    thickness: u32,
    bounds: Rect,
    clip: Rect,
    handle_length: u32,
    position: f32,
    drag: Option<DragStart>,
    pending_change: Option<f32>,
}

impl ScrollBar {
    pub fn new(axis: ScrollbarAxis, thickness: u32) -> Self {
        Self {
            axis,
            dirty_flags: ChangeFlags::default(),
            thickness,
            bounds: Rect::default(),
            clip: Rect::default(),
            handle_length: 0,
            position: 0.0,
            drag: None,
            pending_change: None,
        }
    }

    pub fn horizontal(thickness: u32) -> Self {
        Self::new(ScrollbarAxis::Horizontal, thickness)
    }

    pub fn vertical(thickness: u32) -> Self {
        Self::new(ScrollbarAxis::Vertical, thickness)
    }

    pub fn axis(&self) -> ScrollbarAxis {
        self.axis
    }

    pub fn scroll_position(&self) -> f32 {
        self.position
    }

    /// Move the handle without raising a change notification.
    pub fn set_scroll_position(&mut self, position: f32) {
        let position = clamp01(position);
        if position != self.position {
            self.position = position;
            self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
        }
    }

    /// Scroll by a fraction of the full range. Positive moves toward the end.
    pub fn scroll_relative(&mut self, delta: f32) {
        if delta.is_nan() {
            return;
        }
        self.move_to(self.position + delta.clamp(-1.0, 1.0));
    }

    pub fn handle_length(&self) -> u32 {
        self.handle_length
    }

    pub fn set_handle_length(&mut self, length: u32) {
        if length != self.handle_length {
            self.handle_length = length;
            self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
        }
    }

    /// Longest handle the track can hold
    pub fn max_handle_length(&self) -> u32 {
        match self.axis {
            ScrollbarAxis::Vertical => self.bounds.height,
            ScrollbarAxis::Horizontal => self.bounds.width,
        }
    }

    /// Drain the position change raised by user interaction, if any.
    pub fn take_position_change(&mut self) -> Option<f32> {
        self.pending_change.take()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn clip_rect(&self) -> Rect {
        self.clip
    }

    /// Distance the handle can travel along the track
    fn travel(&self) -> u32 {
        self.max_handle_length()
            .saturating_sub(self.handle_length.min(self.max_handle_length()))
    }

    /// Handle rectangle in surface coordinates
    pub fn handle_rect(&self) -> Rect {
        let length = self.handle_length.min(self.max_handle_length());
        let offset = (self.position * self.travel() as f32).floor() as i32;

        match self.axis {
            ScrollbarAxis::Vertical => Rect::new(
                self.bounds.x,
                self.bounds.y + offset,
                self.bounds.width,
                length,
            ),
            ScrollbarAxis::Horizontal => Rect::new(
                self.bounds.x + offset,
                self.bounds.y,
                length,
                self.bounds.height,
            ),
        }
    }

    fn along(&self, x: i32, y: i32) -> i32 {
        match self.axis {
            ScrollbarAxis::Vertical => y,
            ScrollbarAxis::Horizontal => x,
        }
    }

    fn track_start(&self) -> i32 {
        match self.axis {
            ScrollbarAxis::Vertical => self.bounds.y,
            ScrollbarAxis::Horizontal => self.bounds.x,
        }
    }

    fn hit(&self, x: i32, y: i32) -> bool {
        self.bounds.contains(x, y) && self.clip.contains(x, y)
    }

    fn move_to(&mut self, position: f32) {
        let position = clamp01(position);
        if position != self.position {
            self.position = position;
            self.pending_change = Some(position);
            self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
        }
    }
}

impl Widget for ScrollBar {
    fn size_range(&self) -> SizeRange {
        let t = self.thickness;
        match self.axis {
            ScrollbarAxis::Vertical => {
                SizeRange::new(Size::new(t, 0), Size::new(t, t), Size::new(t, UNBOUNDED))
            }
            ScrollbarAxis::Horizontal => {
                SizeRange::new(Size::new(0, t), Size::new(t, t), Size::new(UNBOUNDED, t))
            }
        }
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

    fn event(&mut self, event: &Event) -> EventResponse {
        match *event {
            Event::MouseDown {
                x,
                y,
                button: MouseButton::Left,
            } if self.hit(x, y) => {
                if self.handle_rect().contains(x, y) {
                    self.drag = Some(DragStart {
                        pointer: self.along(x, y),
                        position: self.position,
                    });
                } else {
                    // Click on track - center the handle on the pointer
                    let travel = self.travel();
                    if travel > 0 {
                        let half = (self.handle_length.min(self.max_handle_length()) / 2) as i32;
                        let click = self.along(x, y) - self.track_start() - half;
                        self.move_to(click as f32 / travel as f32);
                    }
                }
                EventResponse::Handled
            }
            Event::MouseMove { x, y } => match self.drag {
                Some(start) => {
                    let travel = self.travel();
                    if travel > 0 {
                        let delta = self.along(x, y) - start.pointer;
                        self.move_to(start.position + delta as f32 / travel as f32);
                    }
                    EventResponse::Handled
                }
                None => EventResponse::Ignored,
            },
            Event::MouseUp {
                button: MouseButton::Left,
                ..
            } if self.drag.is_some() => {
                self.drag = None;
                EventResponse::Handled
            }
            Event::MouseLeave => {
                self.drag = None;
                EventResponse::Ignored
            }
            _ => EventResponse::Ignored,
        }
    }

    impl_dirty_flags!();
}
