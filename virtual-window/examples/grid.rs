// Example: responsive grid reflowing on container resize.
use virtual_window::{GridWindow, GridWindowOptions, Window};

fn main() {
    let mut g = GridWindow::new(
        GridWindowOptions::new(10_000, 180.0, 240.0)
            .with_gap(16.0)
            .with_container_width(800.0)
            .with_viewport_height(720.0),
    );
    g.set_scroll_top(5_000.0);
    println!(
        "columns={} rows={} total={} range={:?}",
        g.column_count(),
        g.row_count(),
        g.total_height(),
        g.window_range()
    );

    g.set_container_width(1_400.0);
    println!(
        "after resize: columns={} rows={} range={:?}",
        g.column_count(),
        g.row_count(),
        g.window_range()
    );

    g.for_each_placement(&mut |index, style| {
        if index % 50 == 0 {
            println!("cell {index}: top={} left={}", style.top, style.left);
        }
    });
}
