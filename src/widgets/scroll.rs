//! Scroll configuration types and per-area scroll state.

use crate::layout::Size;

/// Axis for scrollbar calculations (vertical or horizontal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollbarAxis {
    Vertical,
    Horizontal,
}

/// When to show the scrollbar on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollbarPolicy {
    /// Never show the scrollbar. Content is sized to fit the area on this axis.
    NeverShow,
    /// Show the scrollbar only when the content overflows (default)
    #[default]
    ShowIfDoesntFit,
    /// Always show the scrollbar and reserve space for it
    AlwaysShow,
}

impl ScrollbarPolicy {
    /// Whether content may grow past the area on this axis
    pub fn allows_overflow(&self) -> bool {
        *self != ScrollbarPolicy::NeverShow
    }
}

/// Configuration for scrollbar metrics
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollbarConfig {
    /// Thickness of a scrollbar, reserved from the visible area when shown
    pub width: u32,
    /// Minimum length of the handle (to ensure it's always grabbable)
    pub min_handle_size: u32,
    /// Pixels scrolled per mouse wheel step
    pub wheel_scroll_amount: u32,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            width: 8,
            min_handle_size: 4,
            wheel_scroll_amount: 50,
        }
    }
}

/// Builder for customizing scrollbar metrics
#[derive(Default)]
pub struct ScrollbarBuilder {
    config: ScrollbarConfig,
}

impl ScrollbarBuilder {
    /// Create a new scrollbar builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the thickness of the scrollbar
    pub fn width(mut self, width: u32) -> Self {
        self.config.width = width;
        self
    }

    /// Set the minimum handle length
    pub fn min_handle_size(mut self, size: u32) -> Self {
        self.config.min_handle_size = size;
        self
    }

    /// Set how many pixels one wheel step scrolls
    pub fn wheel_scroll_amount(mut self, pixels: u32) -> Self {
        self.config.wheel_scroll_amount = pixels;
        self
    }

    /// Build the scrollbar configuration
    pub fn build(self) -> ScrollbarConfig {
        self.config
    }
}

/// Clamp a scroll fraction to [0, 1]. NaN scrolls to the start.
pub(crate) fn clamp01(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Internal scroll state for a scroll area.
///
/// Sizes come from the latest layout pass; offsets are in pixels and always
/// stay within `[0, max_scroll]` for their axis.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct ScrollState {
    /// Current scroll offset in X direction
    pub offset_x: f32,
    /// Current scroll offset in Y direction
    pub offset_y: f32,
    /// Size of the content (computed during layout)
    pub content_size: Size,
    /// Part of the allotted area not covered by scrollbars
    pub visible_size: Size,
}

impl ScrollState {
    /// Get the maximum scroll offset in X direction
    pub fn max_scroll_x(&self) -> u32 {
        self.content_size
            .width
            .saturating_sub(self.visible_size.width)
    }

    /// Get the maximum scroll offset in Y direction
    pub fn max_scroll_y(&self) -> u32 {
        self.content_size
            .height
            .saturating_sub(self.visible_size.height)
    }

    /// Get max scroll for given axis
    pub fn max_scroll(&self, axis: ScrollbarAxis) -> u32 {
        match axis {
            ScrollbarAxis::Vertical => self.max_scroll_y(),
            ScrollbarAxis::Horizontal => self.max_scroll_x(),
        }
    }

    pub fn offset(&self, axis: ScrollbarAxis) -> f32 {
        match axis {
            ScrollbarAxis::Vertical => self.offset_y,
            ScrollbarAxis::Horizontal => self.offset_x,
        }
    }

    /// Move to `fraction` of the scrollable extent. Returns true if the offset changed.
    pub fn scroll_to(&mut self, axis: ScrollbarAxis, fraction: f32) -> bool {
        let offset = self.max_scroll(axis) as f32 * clamp01(fraction);
        let slot = match axis {
            ScrollbarAxis::Vertical => &mut self.offset_y,
            ScrollbarAxis::Horizontal => &mut self.offset_x,
        };
        let changed = *slot != offset;
        *slot = offset;
        changed
    }

    /// Convert a pixel distance into a fraction of the scrollable extent.
    /// Zero when there is nothing to scroll.
    pub fn pixels_to_fraction(&self, axis: ScrollbarAxis, pixels: f32) -> f32 {
        let max = self.max_scroll(axis);
        if max == 0 {
            return 0.0;
        }
        pixels / max as f32
    }

    /// Current offset as a fraction of the scrollable extent
    pub fn scroll_fraction(&self, axis: ScrollbarAxis) -> f32 {
        let max = self.max_scroll(axis);
        if max == 0 {
            return 0.0;
        }
        clamp01(self.offset(axis) / max as f32)
    }

    /// Handle length for a track that fits `max_handle` pixels.
    ///
    /// Proportional to the visible share of the content, never shorter than
    /// `min_handle` and never longer than the track.
    pub fn handle_length(&self, axis: ScrollbarAxis, max_handle: u32, min_handle: u32) -> u32 {
        let (visible, content) = match axis {
            ScrollbarAxis::Vertical => (self.visible_size.height, self.content_size.height),
            ScrollbarAxis::Horizontal => (self.visible_size.width, self.content_size.width),
        };

        let ratio = if content == 0 {
            0.0
        } else {
            (visible as f64 / content as f64).min(1.0)
        };
        let length = (max_handle as f64 * ratio).floor() as u32;
        length.max(min_handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(content: (u32, u32), visible: (u32, u32)) -> ScrollState {
        ScrollState {
            content_size: Size::new(content.0, content.1),
            visible_size: Size::new(visible.0, visible.1),
            ..Default::default()
        }
    }

    #[test]
    fn test_builder_defaults() {
        let config = ScrollbarBuilder::new().build();
        assert_eq!(config, ScrollbarConfig::default());
        assert_eq!(config.width, 8);
        assert_eq!(config.min_handle_size, 4);
        assert_eq!(config.wheel_scroll_amount, 50);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ScrollbarBuilder::new()
            .width(12)
            .min_handle_size(20)
            .wheel_scroll_amount(30)
            .build();
        assert_eq!(config.width, 12);
        assert_eq!(config.min_handle_size, 20);
        assert_eq!(config.wheel_scroll_amount, 30);
    }

    #[test]
    fn test_policy_overflow() {
        assert!(!ScrollbarPolicy::NeverShow.allows_overflow());
        assert!(ScrollbarPolicy::ShowIfDoesntFit.allows_overflow());
        assert!(ScrollbarPolicy::AlwaysShow.allows_overflow());
        assert_eq!(ScrollbarPolicy::default(), ScrollbarPolicy::ShowIfDoesntFit);
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(1.5), 1.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(f32::NAN), 0.0);
    }

    #[test]
    fn test_max_scroll_saturates() {
        let s = state((100, 50), (200, 80));
        assert_eq!(s.max_scroll_x(), 0);
        assert_eq!(s.max_scroll_y(), 0);

        let s = state((300, 500), (200, 100));
        assert_eq!(s.max_scroll(ScrollbarAxis::Horizontal), 100);
        assert_eq!(s.max_scroll(ScrollbarAxis::Vertical), 400);
    }

    #[test]
    fn test_scroll_to_clamps_fraction() {
        let mut s = state((300, 500), (200, 100));
        assert!(s.scroll_to(ScrollbarAxis::Vertical, 1.5));
        assert_eq!(s.offset_y, 400.0);
        s.scroll_to(ScrollbarAxis::Vertical, -0.5);
        assert_eq!(s.offset_y, 0.0);
        s.scroll_to(ScrollbarAxis::Horizontal, 0.5);
        assert_eq!(s.offset_x, 50.0);
        assert!(!s.scroll_to(ScrollbarAxis::Horizontal, 0.5));
    }

    #[test]
    fn test_scroll_to_without_extent_stays_at_zero() {
        let mut s = state((200, 100), (200, 100));
        s.scroll_to(ScrollbarAxis::Vertical, 0.7);
        assert_eq!(s.offset_y, 0.0);
        assert_eq!(s.scroll_fraction(ScrollbarAxis::Vertical), 0.0);
    }

    #[test]
    fn test_pixels_to_fraction_guards_zero() {
        let s = state((200, 100), (200, 100));
        assert_eq!(s.pixels_to_fraction(ScrollbarAxis::Vertical, 50.0), 0.0);

        let s = state((200, 300), (200, 100));
        assert_eq!(s.pixels_to_fraction(ScrollbarAxis::Vertical, 50.0), 0.25);
    }

    #[test]
    fn test_scroll_fraction() {
        let mut s = state((200, 300), (200, 100));
        s.offset_y = 50.0;
        assert_eq!(s.scroll_fraction(ScrollbarAxis::Vertical), 0.25);
        assert_eq!(s.scroll_fraction(ScrollbarAxis::Horizontal), 0.0);
    }

    #[test]
    fn test_handle_length() {
        let s = state((400, 1000), (200, 100));
        // 92 * 100 / 1000 = 9.2
        assert_eq!(s.handle_length(ScrollbarAxis::Vertical, 92, 4), 9);
        // 200 * 200 / 400
        assert_eq!(s.handle_length(ScrollbarAxis::Horizontal, 200, 4), 100);
        // Tiny ratio falls back to the minimum
        assert_eq!(s.handle_length(ScrollbarAxis::Vertical, 20, 4), 4);
    }

    #[test]
    fn test_handle_length_degenerate_content() {
        let s = state((0, 0), (200, 100));
        assert_eq!(s.handle_length(ScrollbarAxis::Vertical, 100, 4), 4);

        // Content smaller than the viewport fills the track
        let s = state((50, 50), (200, 100));
        assert_eq!(s.handle_length(ScrollbarAxis::Horizontal, 120, 4), 120);
    }
}
