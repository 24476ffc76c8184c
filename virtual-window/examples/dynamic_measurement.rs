// Example: variable heights measured after render, and scroll jump prevention.
use virtual_window::{Align, VariableWindow, VariableWindowOptions, Window};

fn main() {
    let mut w = VariableWindow::new(VariableWindowOptions::new(100, 50.0).with_viewport_height(300.0));
    w.set_scroll_top(1_000.0);
    println!(
        "before: scroll_top={} total={} range={:?}",
        w.scroll_top(),
        w.total_height(),
        w.visible_range()
    );

    // Heights reported by the host once the mounted rows are laid out.
    let mut indexes = Vec::new();
    w.collect_window_indexes(&mut indexes);
    let updated = w.measure_many(indexes.iter().map(|&i| (i, 40.0 + (i % 3) as f64 * 20.0)));
    println!("measure_many: updated={updated} version={} total={}", w.version(), w.total_height());

    // An item above the viewport grew: keep the visible content in place.
    let applied = w.resize_item(2, 120.0);
    println!("resize_item(2): applied={applied} scroll_top={}", w.scroll_top());

    let to = w.scroll_to_index_offset(60, Align::Center);
    w.set_scroll_top(to);
    println!("scroll_to_index(60): scroll_top={} range={:?}", w.scroll_top(), w.visible_range());
}
