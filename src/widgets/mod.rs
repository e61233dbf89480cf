pub mod block;
pub mod column;
pub mod scroll;
pub mod scroll_area;
pub mod scrollbar;
pub mod widget;

/// Macro to implement common dirty flag methods for simple widgets.
///
/// Containers keep their custom implementation because they recurse to children.
macro_rules! impl_dirty_flags {
    () => {
        fn mark_dirty(&mut self, flags: crate::invalidation::ChangeFlags) {
            self.dirty_flags |= flags;
        }
        fn needs_layout(&self) -> bool {
            self.dirty_flags
                .contains(crate::invalidation::ChangeFlags::NEEDS_LAYOUT)
        }
        fn needs_paint(&self) -> bool {
            self.dirty_flags
                .contains(crate::invalidation::ChangeFlags::NEEDS_PAINT)
        }
        fn clear_dirty(&mut self) {
            self.dirty_flags = crate::invalidation::ChangeFlags::empty();
        }
    };
}
pub(crate) use impl_dirty_flags;

pub use block::{block, Block};
pub use column::{column, Column};
pub use scroll::{ScrollbarAxis, ScrollbarBuilder, ScrollbarConfig, ScrollbarPolicy};
pub use scroll_area::{scroll_area, ScrollArea, ScrollLayout, ScrollPolicies};
pub use scrollbar::ScrollBar;
pub use widget::{Event, EventResponse, MouseButton, Rect, Widget};
