use alloc::vec::Vec;

use crate::{Align, FrameState, ItemStyle, VisibleRange, WindowItem};

/// The surface shared by [`crate::FixedWindow`], [`crate::VariableWindow`] and
/// [`crate::GridWindow`].
///
/// Every engine is a pure function of `(count, viewport, scroll_top)` plus its own layout state.
/// Adapters (see `virtual-window-adapter`) drive any engine through this trait.
pub trait Window {
    fn count(&self) -> usize;

    /// Changes the item count.
    ///
    /// Growing is treated as an append (pagination) and keeps layout state for existing items.
    /// Shrinking is treated as a new dataset.
    fn set_count(&mut self, count: usize);

    /// Behaves as a fresh mount over `count` items: layout state is discarded and
    /// `scroll_top` returns to zero.
    fn reset(&mut self, count: usize);

    fn viewport_height(&self) -> f64;
    fn set_viewport_height(&mut self, viewport_height: f64);

    fn scroll_top(&self) -> f64;
    fn set_scroll_top(&mut self, scroll_top: f64);

    fn overscan(&self) -> usize;
    fn set_overscan(&mut self, overscan: usize);

    /// Height of the whole scroll content.
    fn total_height(&self) -> f64;

    /// Items overlapping the viewport, without overscan. `None` when there are no items.
    fn visible_range(&self) -> Option<VisibleRange>;

    /// Items that must be mounted: [`Window::visible_range`] widened by the overscan.
    fn window_range(&self) -> Option<VisibleRange>;

    /// Placement of `index`, or `None` when it is out of bounds.
    fn item_style(&self, index: usize) -> Option<ItemStyle>;

    /// Emits every mounted index with its placement, in ascending index order.
    fn for_each_placement(&self, f: &mut dyn FnMut(usize, ItemStyle));

    fn max_scroll_top(&self) -> f64 {
        (self.total_height() - self.viewport_height()).max(0.0)
    }

    fn clamp_scroll_top(&self, scroll_top: f64) -> f64 {
        scroll_top.clamp(0.0, self.max_scroll_top())
    }

    /// `(scroll_top + viewport_height) / total_height`, or `None` for empty content.
    fn scroll_percent(&self) -> Option<f64> {
        let total = self.total_height();
        (total > 0.0).then(|| (self.scroll_top() + self.viewport_height()) / total)
    }

    fn frame_state(&self) -> FrameState {
        FrameState {
            scroll_top: self.scroll_top(),
            viewport_height: self.viewport_height(),
        }
    }

    fn restore_frame_state(&mut self, frame: FrameState) {
        self.set_viewport_height(frame.viewport_height);
        self.set_scroll_top(frame.scroll_top);
    }

    /// Computes the (clamped) scroll offset that brings `index` into view.
    ///
    /// Indexes past the end are clamped to the last item. Returns `0.0` for empty content.
    fn scroll_to_index_offset(&self, index: usize, align: Align) -> f64 {
        let count = self.count();
        if count == 0 {
            return 0.0;
        }
        let Some(style) = self.item_style(index.min(count - 1)) else {
            return 0.0;
        };

        let view = self.viewport_height();
        let target = match align {
            Align::Start => style.top,
            Align::End => style.bottom() - view,
            Align::Center => style.top + style.height / 2.0 - view / 2.0,
            Align::Auto => {
                let cur = self.scroll_top();
                if style.top >= cur && style.bottom() <= cur + view {
                    cur
                } else if style.top < cur {
                    style.top
                } else {
                    style.bottom() - view
                }
            }
        };
        self.clamp_scroll_top(target)
    }

    /// Calls `f` for every mounted item of `items`.
    ///
    /// Indexes the engine considers mounted but that `items` does not contain (the caller's slice
    /// is shorter than [`Window::count`]) are skipped.
    fn for_each_window_item<'a, T>(&self, items: &'a [T], mut f: impl FnMut(WindowItem<'a, T>))
    where
        Self: Sized,
    {
        self.for_each_placement(&mut |index, style| {
            if let Some(item) = items.get(index) {
                f(WindowItem { item, index, style });
            }
        });
    }

    /// Collects the mounted items into `out` (clears `out` first).
    ///
    /// For hot paths prefer [`Window::for_each_window_item`] and reuse a scratch buffer.
    fn collect_window_items<'a, T>(&self, items: &'a [T], out: &mut Vec<WindowItem<'a, T>>)
    where
        Self: Sized,
    {
        out.clear();
        self.for_each_window_item(items, |it| out.push(it));
    }

    /// Collects the mounted indexes into `out` (clears `out` first).
    fn collect_window_indexes(&self, out: &mut Vec<usize>) {
        out.clear();
        self.for_each_placement(&mut |index, _| out.push(index));
    }
}
