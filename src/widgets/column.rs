use crate::invalidation::ChangeFlags;
use crate::layout::{CrossAxisAlignment, Layout, Size, SizeRange, UNBOUNDED};

use super::widget::{saturating_i32, Event, EventResponse, Rect, Widget};

/// Vertical stack of child widgets.
///
/// Children get their optimal height; spare height is shared evenly among the
/// children that can still grow, and missing height is taken evenly from the
/// children that can still shrink.
pub struct Column {
    dirty_flags: ChangeFlags,
    children: Vec<Box<dyn Widget>>,
    spacing: u32,
    cross_axis_alignment: CrossAxisAlignment,
    bounds: Rect,
    clip: Rect,
}

impl Column {
    /// Check if any child widget needs layout
    fn any_child_needs_layout(&self) -> bool {
        self.children.iter().any(|child| child.needs_layout())
    }

    pub fn new() -> Self {
        Self::with_children(Vec::new())
    }

    pub fn with_children(children: Vec<Box<dyn Widget>>) -> Self {
        Self {
            dirty_flags: ChangeFlags::default(),
            children,
            spacing: 0,
            cross_axis_alignment: CrossAxisAlignment::default(),
            bounds: Rect::default(),
            clip: Rect::default(),
        }
    }

    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }

    pub fn spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn cross_axis_alignment(mut self, alignment: CrossAxisAlignment) -> Self {
        self.cross_axis_alignment = alignment;
        self
    }

    /// Append a child after construction. Marks the column for layout.
    pub fn push(&mut self, widget: impl Widget + 'static) {
        self.children.push(Box::new(widget));
        self.dirty_flags |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
    }

    /// Remove all children. Marks the column for layout.
    pub fn clear(&mut self) {
        self.children.clear();
        self.dirty_flags |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
    }

    pub fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn clip_rect(&self) -> Rect {
        self.clip
    }

    fn total_spacing(&self) -> u64 {
        self.spacing as u64 * self.children.len().saturating_sub(1) as u64
    }

    /// Child rects relative to the column origin for a `width` x `height` area.
    fn child_rects(&self, width: u32, height: u32) -> Vec<Rect> {
        let ranges: Vec<SizeRange> = self.children.iter().map(|c| c.size_range()).collect();
        let available = (height as u64).saturating_sub(self.total_spacing());
        let heights = distribute_heights(&ranges, available);

        let mut rects = Vec::with_capacity(ranges.len());
        let mut y: i64 = 0;
        for (range, child_height) in ranges.iter().zip(heights) {
            let child_width = match self.cross_axis_alignment {
                CrossAxisAlignment::Stretch => range.clamp_width(width),
                _ => range
                    .optimal
                    .width
                    .min(range.max.width)
                    .min(width)
                    .max(range.min.width),
            };
            let free = width.saturating_sub(child_width);
            let x = match self.cross_axis_alignment {
                CrossAxisAlignment::Start | CrossAxisAlignment::Stretch => 0,
                CrossAxisAlignment::Center => free / 2,
                CrossAxisAlignment::End => free,
            };

            rects.push(Rect::new(
                saturating_i32(x),
                y.min(i32::MAX as i64) as i32,
                child_width,
                child_height,
            ));
            y += child_height as i64 + self.spacing as i64;
        }
        rects
    }
}

/// Share `available` height among children described by `ranges`.
fn distribute_heights(ranges: &[SizeRange], available: u64) -> Vec<u32> {
    let mut heights: Vec<u32> = ranges
        .iter()
        .map(|r| r.clamp_height(r.optimal.height))
        .collect();
    let used: u64 = heights.iter().map(|&h| h as u64).sum();

    if used < available {
        let mut extra = available - used;
        while extra > 0 {
            let growable: Vec<usize> = (0..heights.len())
                .filter(|&i| heights[i] < ranges[i].max.height)
                .collect();
            if growable.is_empty() {
                break;
            }
            let given = share(&mut heights, &growable, extra, |i, h| {
                (ranges[i].max.height - h) as u64
            }, true);
            if given == 0 {
                break;
            }
            extra -= given;
        }
    } else if used > available {
        let mut deficit = used - available;
        while deficit > 0 {
            let shrinkable: Vec<usize> = (0..heights.len())
                .filter(|&i| heights[i] > ranges[i].min.height)
                .collect();
            if shrinkable.is_empty() {
                break;
            }
            let taken = share(&mut heights, &shrinkable, deficit, |i, h| {
                (h - ranges[i].min.height) as u64
            }, false);
            if taken == 0 {
                break;
            }
            deficit -= taken;
        }
    }

    heights
}

/// Spread `amount` evenly over `indices`, each limited by `room`. Returns how much was moved.
fn share(
    heights: &mut [u32],
    indices: &[usize],
    amount: u64,
    room: impl Fn(usize, u32) -> u64,
    grow: bool,
) -> u64 {
    let count = indices.len() as u64;
    let per_child = amount / count;
    let mut remainder = amount % count;
    let mut moved = 0;

    for &i in indices {
        let mut want = per_child;
        if remainder > 0 {
            want += 1;
            remainder -= 1;
        }
        let step = want.min(room(i, heights[i]));
        if grow {
            heights[i] += step as u32;
        } else {
            heights[i] -= step as u32;
        }
        moved += step;
    }
    moved
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Layout for Column {
    fn actual_size(&self, width: u32, height: u32) -> Size {
        self.child_rects(width, height)
            .iter()
            .fold(Size::zero(), |acc, r| {
                acc.max(Size::new(
                    (r.right().max(0) as u64).min(UNBOUNDED as u64) as u32,
                    (r.bottom().max(0) as u64).min(UNBOUNDED as u64) as u32,
                ))
            })
    }
}

impl Widget for Column {
    fn size_range(&self) -> SizeRange {
        let spacing = self.total_spacing();
        let mut min = (0u32, 0u64);
        let mut optimal = (0u32, 0u64);
        let mut max = (0u32, 0u64);

        for child in &self.children {
            let range = child.size_range();
            min.0 = min.0.max(range.min.width);
            min.1 += range.min.height as u64;
            optimal.0 = optimal.0.max(range.optimal.width);
            optimal.1 += range.optimal.height as u64;
            max.0 = max.0.max(range.max.width);
            max.1 += range.max.height as u64;
        }

        let height = |h: u64| {
            if self.children.is_empty() {
                0
            } else {
                (h + spacing).min(UNBOUNDED as u64) as u32
            }
        };

        SizeRange::new(
            Size::new(min.0, height(min.1)),
            Size::new(optimal.0, height(optimal.1)),
            Size::new(max.0, height(max.1)),
        )
    }

    fn set_layout_area(&mut self, area: Rect, clip: Rect) {
        let rects = self.child_rects(area.width, area.height);
        for (child, rect) in self.children.iter_mut().zip(rects) {
            child.set_layout_area(rect.offset(area.x, area.y), clip);
        }

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
        for child in &mut self.children {
            if child.event(event) == EventResponse::Handled {
                return EventResponse::Handled;
            }
        }
        EventResponse::Ignored
    }

    fn mark_dirty(&mut self, flags: ChangeFlags) {
        self.dirty_flags |= flags;
    }

    fn needs_layout(&self) -> bool {
        self.dirty_flags.contains(ChangeFlags::NEEDS_LAYOUT) || self.any_child_needs_layout()
    }

    fn needs_paint(&self) -> bool {
        self.dirty_flags.contains(ChangeFlags::NEEDS_PAINT)
            || self.children.iter().any(|child| child.needs_paint())
    }

    fn clear_dirty(&mut self) {
        self.dirty_flags = ChangeFlags::empty();
        // Also clear child dirty flags
        for child in &mut self.children {
            child.clear_dirty();
        }
    }
}

pub fn column() -> Column {
    Column::new()
}

#[macro_export]
macro_rules! column {
    ($($child:expr),* $(,)?) => {
        {
            let mut c = $crate::widgets::Column::new();
            $(
                c = c.child($child);
            )*
            c
        }
    };
}
