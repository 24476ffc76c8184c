use alloc::sync::Arc;
use core::fmt;

use virtual_window::{
    EndReachedDetector, GridWindow, Measurement, ScrollDebounce, VariableWindow, Window,
};

use crate::ControllerOptions;

/// Callback invoked when the user scrolls near the end of the content.
///
/// Fire-and-forget: the controller neither awaits nor retries it. Typically it kicks off a page
/// fetch; once the page lands, the host calls [`Controller::set_count`] with the longer length.
pub type OnEndReached = Arc<dyn Fn() + Send + Sync>;

/// What a scroll event changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollOutcome {
    /// `on_end_reached` was invoked for this event.
    pub end_reached: bool,
    pub is_scrolling: bool,
}

/// A framework-neutral controller that owns one window engine plus the per-view scroll state
/// (end-reached latch and `is_scrolling` debounce).
///
/// Adapters drive it by calling:
/// - `on_scroll` / `on_viewport_height` (and `on_container_width` for grids) when UI events occur
/// - `tick(now_ms)` each frame/timer tick to resolve the `is_scrolling` debounce
/// - `teardown` when the view unmounts
///
/// Every mounted view gets its own controller; nothing is shared between instances.
pub struct Controller<W> {
    window: W,
    end_reached: EndReachedDetector,
    debounce: ScrollDebounce,
    on_end_reached: Option<OnEndReached>,
    mounted: bool,
}

impl<W: Window> Controller<W> {
    pub fn new(window: W, options: ControllerOptions) -> Self {
        ctrace!(
            threshold = options.end_reached_threshold,
            delay_ms = options.is_scrolling_reset_delay_ms,
            "Controller::new"
        );
        Self {
            window,
            end_reached: EndReachedDetector::new(options.end_reached_threshold),
            debounce: ScrollDebounce::new(options.is_scrolling_reset_delay_ms),
            on_end_reached: None,
            mounted: true,
        }
    }

    pub fn from_window(window: W) -> Self {
        Self::new(window, ControllerOptions::default())
    }

    pub fn with_on_end_reached(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_end_reached = Some(Arc::new(f));
        self
    }

    pub fn set_on_end_reached(&mut self, f: Option<impl Fn() + Send + Sync + 'static>) {
        self.on_end_reached = f.map(|f| Arc::new(f) as OnEndReached);
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    pub fn into_window(self) -> W {
        self.window
    }

    pub fn end_reached(&self) -> &EndReachedDetector {
        &self.end_reached
    }

    pub fn set_end_reached_threshold(&mut self, threshold: f64) {
        self.end_reached.set_threshold(threshold);
    }

    pub fn set_is_scrolling_reset_delay_ms(&mut self, delay_ms: u64) {
        self.debounce.set_delay_ms(delay_ms);
    }

    pub fn is_scrolling(&self) -> bool {
        self.debounce.is_scrolling()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Call this for every scroll event, in dispatch order.
    ///
    /// Updates the engine's scroll offset, restarts the `is_scrolling` debounce and runs the
    /// end-reached check, invoking `on_end_reached` at most once per excursion past the
    /// threshold.
    pub fn on_scroll(&mut self, scroll_top: f64, now_ms: u64) -> ScrollOutcome {
        if !self.mounted {
            return ScrollOutcome::default();
        }
        self.window.set_scroll_top(scroll_top);
        self.debounce.on_scroll_event(now_ms);
        ctrace!(scroll_top, now_ms, "Controller::on_scroll");

        let end_reached = self.end_reached.evaluate(
            self.window.scroll_top(),
            self.window.viewport_height(),
            self.window.total_height(),
        );
        if end_reached {
            if let Some(cb) = self.on_end_reached.clone() {
                cb();
            }
        }
        ScrollOutcome {
            end_reached,
            is_scrolling: true,
        }
    }

    /// Resolves the `is_scrolling` debounce. Returns `true` when scrolling just stopped.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.mounted {
            return false;
        }
        let stopped = self.debounce.poll(now_ms);
        if stopped {
            ctrace!(now_ms, "Controller: scrolling stopped");
        }
        stopped
    }

    pub fn on_viewport_height(&mut self, viewport_height: f64) {
        self.window.set_viewport_height(viewport_height);
    }

    /// Appends (or shrinks) the collection, e.g. after a page fetched by `on_end_reached` lands.
    pub fn set_count(&mut self, count: usize) {
        self.window.set_count(count);
    }

    /// Swaps in an unrelated dataset (e.g. after a filter change): the view behaves as freshly
    /// mounted.
    pub fn replace_dataset(&mut self, count: usize) {
        cdebug!(count, "Controller::replace_dataset");
        self.window.reset(count);
        self.end_reached.rearm();
        self.debounce.cancel();
    }

    /// Unmounts the view: clears the pending debounce deadline and drops the callback so nothing
    /// fires into a disposed view. Later calls are no-ops.
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        cdebug!("Controller::teardown");
        self.debounce.cancel();
        self.on_end_reached = None;
        self.mounted = false;
    }
}

impl Controller<VariableWindow> {
    /// Forwards a measured height to the engine.
    pub fn measure(&mut self, index: usize, height: f64) -> Measurement {
        self.window.measure(index, height)
    }
}

impl Controller<GridWindow> {
    /// Call this from the container's resize observer.
    pub fn on_container_width(&mut self, container_width: f64) {
        self.window.set_container_width(container_width);
    }
}

impl<W: fmt::Debug> fmt::Debug for Controller<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("window", &self.window)
            .field("end_reached", &self.end_reached)
            .field("debounce", &self.debounce)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
