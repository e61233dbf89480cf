//! Scroll area: a content layout plus horizontal and vertical scrollbars.

mod resolve;
mod scrolling;

pub use resolve::{resolve, ScrollLayout, ScrollPolicies};

use crate::invalidation::ChangeFlags;
use crate::layout::{Length, Size, SizeRange, MIN_OPTIMAL_EXTENT};

use super::column::Column;
use super::scroll::{ScrollState, ScrollbarAxis, ScrollbarConfig, ScrollbarPolicy};
use super::scrollbar::ScrollBar;
use super::widget::{Event, EventResponse, Rect, Widget};

/// A container that shows a window into content larger than itself.
///
/// The content is a vertical [`Column`]. Scrollbars appear according to the
/// per-axis [`ScrollbarPolicy`] and their thickness is reserved from the
/// visible area. Scroll offsets are in pixels and follow the scrollbars.
pub struct ScrollArea {
    dirty_flags: ChangeFlags,
    content: Column,
    horizontal: ScrollBar,
    vertical: ScrollBar,
    policies: ScrollPolicies,
    config: ScrollbarConfig,
    scroll_state: ScrollState,
    last_layout: ScrollLayout,
    width: Option<Length>,
    height: Option<Length>,
    bounds: Rect,
    clip: Rect,
    disabled: bool,
}

impl ScrollArea {
    /// Create a scroll area with explicit scrollbar policies.
    pub fn new(vertical: ScrollbarPolicy, horizontal: ScrollbarPolicy) -> Self {
        let config = ScrollbarConfig::default();
        Self {
            dirty_flags: ChangeFlags::default(),
            content: Column::new(),
            horizontal: ScrollBar::horizontal(config.width),
            vertical: ScrollBar::vertical(config.width),
            policies: ScrollPolicies::new(horizontal, vertical),
            config,
            scroll_state: ScrollState::default(),
            last_layout: ScrollLayout::default(),
            width: None,
            height: None,
            bounds: Rect::default(),
            clip: Rect::default(),
            disabled: false,
        }
    }

    /// Replace the scrollbar metrics.
    pub fn scrollbar_config(mut self, config: ScrollbarConfig) -> Self {
        self.horizontal = ScrollBar::horizontal(config.width);
        self.vertical = ScrollBar::vertical(config.width);
        self.config = config;
        self
    }

    /// Override the width reported to the parent layout.
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Override the height reported to the parent layout.
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Set the content layout.
    pub fn content(mut self, content: Column) -> Self {
        self.content = content;
        self
    }

    /// Add a child to the content layout.
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.content.push(widget);
        self
    }

    pub fn content_layout(&self) -> &Column {
        &self.content
    }

    /// Mutable access to the content. Changes are picked up by the next
    /// layout pass through the content's dirty flags.
    pub fn content_layout_mut(&mut self) -> &mut Column {
        &mut self.content
    }

    pub fn horizontal_scrollbar(&self) -> &ScrollBar {
        &self.horizontal
    }

    pub fn vertical_scrollbar(&self) -> &ScrollBar {
        &self.vertical
    }

    pub fn policies(&self) -> ScrollPolicies {
        self.policies
    }

    pub fn config(&self) -> &ScrollbarConfig {
        &self.config
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled != self.disabled {
            self.disabled = disabled;
            self.dirty_flags |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Content size from the last layout pass
    pub fn content_size(&self) -> Size {
        self.scroll_state.content_size
    }

    /// Visible size from the last layout pass
    pub fn visible_size(&self) -> Size {
        self.scroll_state.visible_size
    }

    /// Full result of the last layout pass
    pub fn last_layout(&self) -> &ScrollLayout {
        &self.last_layout
    }

    /// Current scroll offsets in pixels
    pub fn scroll_offset(&self) -> (f32, f32) {
        (self.scroll_state.offset_x, self.scroll_state.offset_y)
    }

    /// Allotted area clipped by the parent clip rect
    pub fn clipped_bounds(&self) -> Rect {
        self.bounds.clip(&self.clip)
    }

    /// Allotted area minus the thickness of the shown scrollbars
    pub fn content_bounds(&self) -> Rect {
        let mut bounds = self.bounds;
        if self.last_layout.horizontal_active {
            bounds.height = bounds.height.saturating_sub(self.config.width);
        }
        if self.last_layout.vertical_active {
            bounds.width = bounds.width.saturating_sub(self.config.width);
        }
        bounds
    }

    /// Resolve the layout for `area` with the current offsets, without applying it.
    pub fn resolve_layout(&self, area: Rect) -> ScrollLayout {
        resolve(
            area,
            &self.content.size_range(),
            &self.content,
            self.policies,
            self.config.width,
            (self.scroll_state.offset_x, self.scroll_state.offset_y),
        )
    }

    /// Run a layout pass in `area`, clipped to the area itself.
    pub fn update_layout(&mut self, area: Rect) {
        self.set_layout_area(area, area);
    }

    /// Push the resolved sizes into a scrollbar's handle length and position.
    fn sync_scrollbar(&mut self, axis: ScrollbarAxis) {
        let state = &self.scroll_state;
        let bar = match axis {
            ScrollbarAxis::Vertical => &mut self.vertical,
            ScrollbarAxis::Horizontal => &mut self.horizontal,
        };
        let handle = state.handle_length(axis, bar.max_handle_length(), self.config.min_handle_size);
        bar.set_handle_length(handle);
        bar.set_scroll_position(state.scroll_fraction(axis));
    }
}

impl Widget for ScrollArea {
    fn size_range(&self) -> SizeRange {
        if self.disabled {
            return SizeRange::default();
        }
        // Scrollbars are left out: when the content fits they are not needed,
        // and when it doesn't the area is clipped anyway
        let mut range = self
            .content
            .size_range()
            .with_optimal_floor(MIN_OPTIMAL_EXTENT);

        if let Some(width) = self.width {
            let (min, optimal, max) = width.resolve();
            range.min.width = min;
            range.optimal.width = optimal;
            range.max.width = max;
        }
        if let Some(height) = self.height {
            let (min, optimal, max) = height.resolve();
            range.min.height = min;
            range.optimal.height = optimal;
            range.max.height = max;
        }
        range
    }

    fn optimal_size(&self) -> Size {
        let optimal = self.content.size_range().optimal;
        Size::new(
            optimal.width.max(MIN_OPTIMAL_EXTENT),
            optimal.height.max(MIN_OPTIMAL_EXTENT),
        )
    }

    fn set_layout_area(&mut self, area: Rect, clip: Rect) {
        // Pick up scrollbar input that arrived since the last pass
        self.apply_scrollbar_changes();

        let layout = self.resolve_layout(area);
        self.scroll_state.content_size = layout.content_size;
        self.scroll_state.visible_size = layout.visible_size;
        self.scroll_state.offset_x = layout.offset_x;
        self.scroll_state.offset_y = layout.offset_y;

        let viewport = Rect::new(
            area.x,
            area.y,
            layout.visible_size.width,
            layout.visible_size.height,
        );
        self.content.set_layout_area(layout.content, viewport.clip(&clip));

        self.vertical
            .set_layout_area(layout.vertical_bar, layout.vertical_bar.clip(&clip));
        self.horizontal
            .set_layout_area(layout.horizontal_bar, layout.horizontal_bar.clip(&clip));
        self.sync_scrollbar(ScrollbarAxis::Vertical);
        self.sync_scrollbar(ScrollbarAxis::Horizontal);

        log::debug!(
            "scroll area laid out in {:?}: content={:?} visible={:?} offset=({}, {})",
            area,
            layout.content_size,
            layout.visible_size,
            layout.offset_x,
            layout.offset_y
        );

        if area != self.bounds || clip != self.clip || layout != self.last_layout {
            self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
        }
        self.last_layout = layout;
        self.bounds = area;
        self.clip = clip;
        self.dirty_flags.remove(ChangeFlags::NEEDS_LAYOUT);
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        self.handle_event(event)
    }

    fn mark_dirty(&mut self, flags: ChangeFlags) {
        self.dirty_flags |= flags;
    }

    fn needs_layout(&self) -> bool {
        self.dirty_flags.contains(ChangeFlags::NEEDS_LAYOUT) || self.content.needs_layout()
    }

    fn needs_paint(&self) -> bool {
        self.dirty_flags.contains(ChangeFlags::NEEDS_PAINT)
            || self.content.needs_paint()
            || self.horizontal.needs_paint()
            || self.vertical.needs_paint()
    }

    fn clear_dirty(&mut self) {
        self.dirty_flags = ChangeFlags::empty();
        self.content.clear_dirty();
        self.horizontal.clear_dirty();
        self.vertical.clear_dirty();
    }
}

impl Default for ScrollArea {
    fn default() -> Self {
        Self::new(
            ScrollbarPolicy::ShowIfDoesntFit,
            ScrollbarPolicy::ShowIfDoesntFit,
        )
    }
}

/// Create a scroll area that shows each scrollbar only when the content doesn't fit.
pub fn scroll_area() -> ScrollArea {
    ScrollArea::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::at_least;
    use crate::widgets::block::block;

    fn wide_area() -> ScrollArea {
        scroll_area().child(block().width(at_least(300)).height(50))
    }

    #[test]
    fn test_optimal_size_floor() {
        let area = scroll_area();
        assert_eq!(area.optimal_size(), Size::new(10, 10));
        assert_eq!(area.size_range().optimal, Size::new(10, 10));

        let area = scroll_area().child(block().width(300).height(5));
        assert_eq!(area.optimal_size(), Size::new(300, 10));
    }

    #[test]
    fn test_explicit_height_overrides_content() {
        let area = scroll_area()
            .height(100)
            .child(block().width(50).height(at_least(500)));
        let range = area.size_range();
        assert_eq!(range.min, Size::new(50, 100));
        assert_eq!(range.optimal, Size::new(50, 100));
        assert_eq!(range.max, Size::new(50, 100));
    }

    #[test]
    fn test_disabled_reports_empty_range() {
        let mut area = wide_area();
        area.set_disabled(true);
        assert!(area.is_disabled());
        assert_eq!(area.size_range(), SizeRange::default());
        // Optimal size still comes from the content
        assert_eq!(area.optimal_size(), Size::new(300, 50));
    }

    #[test]
    fn test_layout_pass_wide_content() {
        let mut area = wide_area();
        area.update_layout(Rect::new(0, 0, 200, 100));

        // The block keeps its fixed height inside the taller layout rect
        assert_eq!(area.content_size(), Size::new(300, 50));
        assert_eq!(area.visible_size(), Size::new(200, 92));
        assert_eq!(area.horizontal_scrollbar().bounds(), Rect::new(0, 92, 200, 8));
        assert!(area.vertical_scrollbar().bounds().is_empty());
        assert_eq!(area.content_layout().bounds(), Rect::new(0, 0, 300, 92));
        assert_eq!(area.content_layout().clip_rect(), Rect::new(0, 0, 200, 92));
        assert_eq!(area.content_bounds(), Rect::new(0, 0, 200, 92));
        assert!(!area.needs_layout());
    }

    #[test]
    fn test_handle_sized_after_layout() {
        let mut area = wide_area();
        area.update_layout(Rect::new(0, 0, 200, 100));
        // 200 * 200 / 300
        assert_eq!(area.horizontal_scrollbar().handle_length(), 133);
        assert_eq!(area.horizontal_scrollbar().scroll_position(), 0.0);
    }

    #[test]
    fn test_clipped_bounds() {
        let mut area = wide_area();
        area.set_layout_area(Rect::new(0, 0, 200, 100), Rect::new(50, 0, 500, 40));
        assert_eq!(area.clipped_bounds(), Rect::new(50, 0, 150, 40));
        assert_eq!(area.content_layout().clip_rect(), Rect::new(50, 0, 150, 40));
        // The horizontal bar sits below the parent clip
        assert!(area.horizontal_scrollbar().clip_rect().is_empty());
    }

    #[test]
    fn test_resolve_layout_is_pure() {
        let area = wide_area();
        let a = area.resolve_layout(Rect::new(0, 0, 200, 100));
        let b = area.resolve_layout(Rect::new(0, 0, 200, 100));
        assert_eq!(a, b);
        assert_eq!(area.content_size(), Size::zero());
    }

    #[test]
    fn test_scrollbar_config_changes_bar_width() {
        let config = crate::widgets::scroll::ScrollbarBuilder::new().width(12).build();
        let mut area = wide_area().scrollbar_config(config);
        area.update_layout(Rect::new(0, 0, 200, 100));
        assert_eq!(area.visible_size(), Size::new(200, 88));
        assert_eq!(area.horizontal_scrollbar().bounds(), Rect::new(0, 88, 200, 12));
    }
}
