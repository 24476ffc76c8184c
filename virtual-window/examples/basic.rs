// Example: fixed-height list over a large dataset plus the scroll-to helper.
use virtual_window::{Align, FixedWindow, FixedWindowOptions, Window};

fn main() {
    let rows: Vec<String> = (0..1_000_000).map(|i| format!("row {i}")).collect();
    let mut w = FixedWindow::new(
        FixedWindowOptions::new(rows.len(), 35.0)
            .with_viewport_height(600.0)
            .with_viewport_width(Some(320.0)),
    );
    w.set_scroll_top(123_456.0);

    let mut mounted = Vec::new();
    w.collect_window_items(&rows, &mut mounted);
    println!("total_height={}", w.total_height());
    println!("visible_range={:?}", w.visible_range());
    println!("window_range={:?} mounted={}", w.window_range(), mounted.len());
    if let Some(first) = mounted.first() {
        println!("first: {} at {:?}", first.item, first.style);
    }

    let to = w.scroll_to_index_offset(rows.len() - 1, Align::End);
    w.set_scroll_top(to);
    println!("after scroll_to_index: scroll_top={} percent={:?}", w.scroll_top(), w.scroll_percent());
}
