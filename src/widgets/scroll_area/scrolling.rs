//! Scrolling operations and input handling for [`ScrollArea`].

use crate::invalidation::ChangeFlags;
use crate::widgets::scroll::ScrollbarAxis;
use crate::widgets::scrollbar::ScrollBar;
use crate::widgets::widget::{Event, EventResponse, Widget};

use super::ScrollArea;

impl ScrollArea {
    /// Scroll vertically to `fraction` of the scrollable height.
    /// Values outside `[0, 1]` are clamped.
    pub fn scroll_to_vertical(&mut self, fraction: f32) {
        self.scroll_to(ScrollbarAxis::Vertical, fraction);
    }

    /// Scroll horizontally to `fraction` of the scrollable width.
    /// Values outside `[0, 1]` are clamped.
    pub fn scroll_to_horizontal(&mut self, fraction: f32) {
        self.scroll_to(ScrollbarAxis::Horizontal, fraction);
    }

    /// Vertical scroll position in `[0, 1]`, as shown by the scrollbar.
    pub fn vertical_scroll(&self) -> f32 {
        self.vertical.scroll_position()
    }

    /// Horizontal scroll position in `[0, 1]`, as shown by the scrollbar.
    pub fn horizontal_scroll(&self) -> f32 {
        self.horizontal.scroll_position()
    }

    pub fn scroll_up_px(&mut self, pixels: u32) {
        self.scroll_px(ScrollbarAxis::Vertical, -(pixels as f32));
    }

    pub fn scroll_down_px(&mut self, pixels: u32) {
        self.scroll_px(ScrollbarAxis::Vertical, pixels as f32);
    }

    pub fn scroll_left_px(&mut self, pixels: u32) {
        self.scroll_px(ScrollbarAxis::Horizontal, -(pixels as f32));
    }

    pub fn scroll_right_px(&mut self, pixels: u32) {
        self.scroll_px(ScrollbarAxis::Horizontal, pixels as f32);
    }

    /// Scroll up by `percent` (a fraction, `0.1` is ten percent) of the scrollable height.
    pub fn scroll_up_pct(&mut self, percent: f32) {
        self.scroll_pct(ScrollbarAxis::Vertical, -percent);
    }

    pub fn scroll_down_pct(&mut self, percent: f32) {
        self.scroll_pct(ScrollbarAxis::Vertical, percent);
    }

    pub fn scroll_left_pct(&mut self, percent: f32) {
        self.scroll_pct(ScrollbarAxis::Horizontal, -percent);
    }

    pub fn scroll_right_pct(&mut self, percent: f32) {
        self.scroll_pct(ScrollbarAxis::Horizontal, percent);
    }

    fn bar_mut(&mut self, axis: ScrollbarAxis) -> &mut ScrollBar {
        match axis {
            ScrollbarAxis::Vertical => &mut self.vertical,
            ScrollbarAxis::Horizontal => &mut self.horizontal,
        }
    }

    fn scroll_to(&mut self, axis: ScrollbarAxis, fraction: f32) {
        if self.scroll_state.scroll_to(axis, fraction) {
            let position = self.scroll_state.scroll_fraction(axis);
            self.bar_mut(axis).set_scroll_position(position);
            self.dirty_flags |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
        }
    }

    fn scroll_px(&mut self, axis: ScrollbarAxis, pixels: f32) {
        let fraction = self.scroll_state.pixels_to_fraction(axis, pixels);
        if fraction == 0.0 {
            return;
        }
        self.scroll_relative(axis, fraction);
    }

    fn scroll_pct(&mut self, axis: ScrollbarAxis, percent: f32) {
        if self.scroll_state.max_scroll(axis) == 0 || percent.is_nan() {
            return;
        }
        self.scroll_relative(axis, percent);
    }

    /// Move the scrollbar and apply the resulting offset right away.
    fn scroll_relative(&mut self, axis: ScrollbarAxis, delta: f32) {
        self.bar_mut(axis).scroll_relative(delta);
        self.apply_scrollbar_changes();
    }

    /// Turn pending scrollbar position changes into scroll offsets.
    pub(super) fn apply_scrollbar_changes(&mut self) {
        if let Some(position) = self.vertical.take_position_change() {
            self.scroll_to(ScrollbarAxis::Vertical, position);
        }
        if let Some(position) = self.horizontal.take_position_change() {
            self.scroll_to(ScrollbarAxis::Horizontal, position);
        }
    }

    pub(super) fn handle_event(&mut self, event: &Event) -> EventResponse {
        if self.disabled {
            return EventResponse::Ignored;
        }

        if let Event::MouseWheel { x, y, delta } = *event {
            if !self.bounds.contains(x, y) || !self.clip.contains(x, y) {
                return EventResponse::Ignored;
            }
            // Innermost scroll area wins
            if self.content.event(event) == EventResponse::Handled {
                return EventResponse::Handled;
            }
            let pixels = self.config.wheel_scroll_amount as f32 * delta;
            let step = self
                .scroll_state
                .pixels_to_fraction(ScrollbarAxis::Vertical, pixels);
            if step != 0.0 && !step.is_nan() {
                self.scroll_relative(ScrollbarAxis::Vertical, step);
            }
            return EventResponse::Handled;
        }

        let vertical = self.vertical.event(event);
        let horizontal = self.horizontal.event(event);
        if vertical == EventResponse::Handled || horizontal == EventResponse::Handled {
            self.apply_scrollbar_changes();
            return EventResponse::Handled;
        }

        match event.coords() {
            Some((x, y)) if !self.content.clip_rect().contains(x, y) => EventResponse::Ignored,
            _ => self.content.event(event),
        }
    }
}
