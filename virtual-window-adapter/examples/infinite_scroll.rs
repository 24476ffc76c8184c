// Example: infinite scroll with end-reached pagination and is-scrolling debounce.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use virtual_window::{VariableWindow, VariableWindowOptions, Window};
use virtual_window_adapter::{Controller, ControllerOptions};

const PAGE: usize = 50;

fn main() {
    let fetch_requested = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&fetch_requested);

    let w = VariableWindow::new(VariableWindowOptions::new(PAGE, 60.0).with_viewport_height(480.0));
    let mut c = Controller::new(w, ControllerOptions::default().with_end_reached_threshold(0.9))
        .with_on_end_reached(move || flag.store(true, Ordering::SeqCst));

    let mut now_ms = 0u64;
    let mut scroll_top = 0.0;
    for _ in 0..40 {
        now_ms += 16;
        scroll_top = c.window().clamp_scroll_top(scroll_top + 180.0);
        let outcome = c.on_scroll(scroll_top, now_ms);
        if outcome.end_reached {
            println!("end reached at scroll_top={scroll_top} count={}", c.window().count());
        }
        // The page "arrives" on the next frame.
        if fetch_requested.swap(false, Ordering::SeqCst) {
            let count = c.window().count() + PAGE;
            c.set_count(count);
        }
        c.tick(now_ms);
    }

    now_ms += 200;
    let stopped = c.tick(now_ms);
    println!(
        "stopped={stopped} is_scrolling={} count={} total={}",
        c.is_scrolling(),
        c.window().count(),
        c.window().total_height()
    );
    c.teardown();
}
