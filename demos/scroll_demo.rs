//! Headless scroll area walkthrough.
//!
//! Run with `RUST_LOG=debug cargo run --example scroll_demo` to see the layout
//! passes, add `--features layout-stats` for resolver statistics.

use scrollarea::layout_stats;
use scrollarea::prelude::*;

fn main() {
    env_logger::init();

    // A list of rows taller and wider than the window
    let mut list = column().spacing(4);
    for i in 0..20 {
        list.push(block().width(at_least(240 + i * 4)).height(24));
    }

    let mut area = scroll_area().content(list);
    let viewport = Rect::new(0, 0, 200, 120);
    area.update_layout(viewport);
    report("initial", &area);

    area.scroll_down_px(100);
    area.update_layout(viewport);
    report("down 100px", &area);

    area.event(&Event::MouseWheel {
        x: 50,
        y: 50,
        delta: 2.0,
    });
    area.update_layout(viewport);
    report("wheel 2 steps", &area);

    area.scroll_right_pct(0.5);
    area.update_layout(viewport);
    report("right 50%", &area);

    area.scroll_to_vertical(1.0);
    area.update_layout(viewport);
    report("to bottom", &area);

    layout_stats::log_summary();
}

fn report(step: &str, area: &ScrollArea) {
    let layout = area.last_layout();
    println!(
        "{step:>14}: content={}x{} visible={}x{} offset=({:.0}, {:.0}) scroll=({:.2}, {:.2}) bars=(h: {}, v: {})",
        layout.content_size.width,
        layout.content_size.height,
        layout.visible_size.width,
        layout.visible_size.height,
        layout.offset_x,
        layout.offset_y,
        area.horizontal_scroll(),
        area.vertical_scroll(),
        layout.horizontal_active,
        layout.vertical_active,
    );
}
