//! Scroll area layout and scrolling for retained-mode GUI containers.
//!
//! A [`ScrollArea`](widgets::ScrollArea) wraps a vertical content layout and
//! shows a horizontal and a vertical scrollbar according to a per-axis
//! [`ScrollbarPolicy`](widgets::ScrollbarPolicy). Each layout pass decides
//! which bars are needed, lays the content out at its scrolled position and
//! clips it to the visible area.
//!
//! ```
//! use scrollarea::prelude::*;
//!
//! let mut area = scroll_area().child(block().width(at_least(300)).height(50));
//! area.update_layout(Rect::new(0, 0, 200, 100));
//!
//! assert!(area.last_layout().horizontal_active);
//! assert_eq!(area.horizontal_scrollbar().bounds(), Rect::new(0, 92, 200, 8));
//! ```

pub mod invalidation;
pub mod layout;
pub mod layout_stats;
pub mod widgets;

pub mod prelude {
    pub use crate::invalidation::ChangeFlags;
    pub use crate::layout::{
        at_least, at_most, CrossAxisAlignment, Layout, Length, Size, SizeRange, UNBOUNDED,
    };
    pub use crate::widgets::{
        block, column, scroll_area, Block, Column, Event, EventResponse, MouseButton, Rect,
        ScrollArea, ScrollBar, ScrollLayout, ScrollPolicies, ScrollbarAxis, ScrollbarBuilder,
        ScrollbarConfig, ScrollbarPolicy, Widget,
    };
    pub use crate::column;
}
