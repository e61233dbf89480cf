//! Scroll area layout resolution.
//!
//! Given the allotted area and the content's size range, decide which
//! scrollbars are shown and where the content and both bars go.
//!
//! Showing a scrollbar shrinks the visible area, which can make the content
//! overflow on the other axis. The horizontal bar is decided first, then the
//! vertical one, and if the vertical bar narrowed the viewport the horizontal
//! bar is checked once more. There is no further iteration: after that single
//! re-check every bar that is hidden under `ShowIfDoesntFit` has content that
//! fits its axis, so the only possible imprecision is a bar that stays shown
//! after a later measurement made it unnecessary.

use crate::layout::{Layout, Size, SizeRange};
use crate::layout_stats;
use crate::widgets::scroll::ScrollbarPolicy;
use crate::widgets::widget::{saturating_i32, Rect};

/// Scrollbar policies for both axes. Fixed for the life of a scroll area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollPolicies {
    pub horizontal: ScrollbarPolicy,
    pub vertical: ScrollbarPolicy,
}

impl ScrollPolicies {
    pub fn new(horizontal: ScrollbarPolicy, vertical: ScrollbarPolicy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Result of resolving a scroll area inside an allotted rect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollLayout {
    /// Where the content layout goes. Shifted up/left by the scroll offsets.
    pub content: Rect,
    pub horizontal_bar: Rect,
    pub vertical_bar: Rect,
    /// Size the content actually occupies
    pub content_size: Size,
    /// Allotted size minus the space taken by shown scrollbars
    pub visible_size: Size,
    pub horizontal_active: bool,
    pub vertical_active: bool,
    /// Scroll offsets clamped to the resolved scrollable extent
    pub offset_x: f32,
    pub offset_y: f32,
}

impl ScrollLayout {
    pub fn max_scroll_x(&self) -> u32 {
        self.content_size
            .width
            .saturating_sub(self.visible_size.width)
    }

    pub fn max_scroll_y(&self) -> u32 {
        self.content_size
            .height
            .saturating_sub(self.visible_size.height)
    }
}

fn needs_bar(policy: ScrollbarPolicy, content: u32, visible: u32) -> bool {
    match policy {
        ScrollbarPolicy::NeverShow => false,
        ScrollbarPolicy::ShowIfDoesntFit => content > visible,
        ScrollbarPolicy::AlwaysShow => true,
    }
}

/// Layout extent after a scrollbar reserved space on this axis.
fn shrunk_extent(policy: ScrollbarPolicy, optimal: u32, visible: u32) -> u32 {
    if policy.allows_overflow() {
        // Never go below optimal size
        optimal.max(visible)
    } else {
        visible
    }
}

/// Measures the content and counts how often it was asked.
struct Measure<'a, L: Layout + ?Sized> {
    content: &'a L,
    count: u32,
}

impl<L: Layout + ?Sized> Measure<'_, L> {
    fn at(&mut self, width: u32, height: u32) -> Size {
        self.count += 1;
        self.content.actual_size(width, height)
    }
}

/// Resolve content and scrollbar rects for `area`.
///
/// `offset` is the current scroll offset in pixels; it is clamped to the
/// scrollable extent of the resolved layout. The result only depends on the
/// arguments, so calling this twice with the same inputs gives the same layout.
pub fn resolve<L: Layout + ?Sized>(
    area: Rect,
    content_range: &SizeRange,
    content: &L,
    policies: ScrollPolicies,
    bar_width: u32,
    offset: (f32, f32),
) -> ScrollLayout {
    let horizontal = policies.horizontal;
    let vertical = policies.vertical;

    // Scroll area technically provides "infinite" space, so content gets its
    // optimal size on every axis that is allowed to overflow
    let optimal_width = if horizontal.allows_overflow() {
        content_range.optimal.width
    } else {
        area.width
    };
    let optimal_height = if vertical.allows_overflow() {
        content_range.optimal.height
    } else {
        area.height
    };

    let mut layout_width = optimal_width.max(area.width);
    let mut layout_height = optimal_height.max(area.height);

    let mut measure = Measure { content, count: 0 };
    let mut content_size = measure.at(layout_width, layout_height);
    let mut visible_size = area.size();

    let mut horizontal_active = needs_bar(horizontal, content_size.width, visible_size.width);
    if horizontal_active {
        visible_size.height = area.height.saturating_sub(bar_width);
        layout_height = shrunk_extent(vertical, optimal_height, visible_size.height);
        content_size = measure.at(layout_width, layout_height);
    }

    let vertical_active = needs_bar(vertical, content_size.height, visible_size.height);
    let mut rechecked = false;
    if vertical_active {
        visible_size.width = area.width.saturating_sub(bar_width);
        layout_width = shrunk_extent(horizontal, optimal_width, visible_size.width);
        content_size = measure.at(layout_width, layout_height);

        // Width has been reduced, the horizontal bar may be needed now
        if !horizontal_active
            && horizontal == ScrollbarPolicy::ShowIfDoesntFit
            && content_size.width > visible_size.width
        {
            rechecked = true;
            horizontal_active = true;
            visible_size.height = area.height.saturating_sub(bar_width);
            layout_height = shrunk_extent(vertical, optimal_height, visible_size.height);
            content_size = measure.at(layout_width, layout_height);
        }
    }

    log::trace!(
        "scroll area {:?}: horizontal={} vertical={} rechecked={} content={:?} visible={:?}",
        area,
        horizontal_active,
        vertical_active,
        rechecked,
        content_size,
        visible_size
    );
    layout_stats::record_resolve(measure.count, rechecked);

    let max_x = content_size.width.saturating_sub(visible_size.width) as f32;
    let max_y = content_size.height.saturating_sub(visible_size.height) as f32;
    let offset_x = clamp_offset(offset.0, max_x);
    let offset_y = clamp_offset(offset.1, max_y);

    let content_rect = Rect::new(
        area.x.saturating_sub(offset_x.floor() as i32),
        area.y.saturating_sub(offset_y.floor() as i32),
        layout_width,
        layout_height,
    );

    let vertical_bar = if vertical_active {
        let height = if horizontal_active {
            area.height.saturating_sub(bar_width)
        } else {
            area.height
        };
        Rect::new(
            area.x.saturating_add(saturating_i32(area.width.saturating_sub(bar_width))),
            area.y,
            bar_width,
            height,
        )
    } else {
        // Collapsed just past the content so it never takes part in hit testing
        Rect::new(area.x.saturating_add(saturating_i32(layout_width)), area.y, 0, 0)
    };

    let horizontal_bar = if horizontal_active {
        let width = if vertical_active {
            area.width.saturating_sub(bar_width)
        } else {
            area.width
        };
        Rect::new(
            area.x,
            area.y.saturating_add(saturating_i32(area.height.saturating_sub(bar_width))),
            width,
            bar_width,
        )
    } else {
        Rect::new(area.x, area.y.saturating_add(saturating_i32(layout_height)), 0, 0)
    };

    ScrollLayout {
        content: content_rect,
        horizontal_bar,
        vertical_bar,
        content_size,
        visible_size,
        horizontal_active,
        vertical_active,
        offset_x,
        offset_y,
    }
}

fn clamp_offset(offset: f32, max: f32) -> f32 {
    if offset.is_nan() {
        0.0
    } else {
        offset.clamp(0.0, max)
    }
}
