use crate::geometry::{sanitize_extent, sanitize_scroll_top, uniform_range};
use crate::{FixedWindowOptions, ItemStyle, VisibleRange, Window, WindowError};

/// Windowing over items that all share one height.
///
/// Range lookup is O(1) index arithmetic:
/// `start = floor(scroll_top / item_height) - overscan` and
/// `end = floor((scroll_top + viewport_height) / item_height) + overscan`, both clamped.
#[derive(Clone, Debug)]
pub struct FixedWindow {
    options: FixedWindowOptions,
    scroll_top: f64,
}

impl FixedWindow {
    /// Creates a window, clamping invalid geometry to [`crate::MIN_EXTENT`].
    pub fn new(options: FixedWindowOptions) -> Self {
        let mut options = options;
        options.item_height = sanitize_extent("item_height", options.item_height);
        options.viewport_height = sanitize_extent("viewport_height", options.viewport_height);
        let scroll_top = sanitize_scroll_top(options.initial_scroll_top);
        wdebug!(
            count = options.count,
            item_height = options.item_height,
            overscan = options.overscan,
            "FixedWindow::new"
        );
        Self {
            options,
            scroll_top,
        }
    }

    /// Like [`FixedWindow::new`], but rejects invalid geometry instead of clamping it.
    pub fn try_new(options: FixedWindowOptions) -> Result<Self, WindowError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    pub fn options(&self) -> &FixedWindowOptions {
        &self.options
    }

    pub fn item_height(&self) -> f64 {
        self.options.item_height
    }

    pub fn set_item_height(&mut self, item_height: f64) {
        self.options.item_height = sanitize_extent("item_height", item_height);
    }

    pub fn set_viewport_width(&mut self, viewport_width: Option<f64>) {
        self.options.viewport_width = viewport_width;
    }

    /// Index of the item under `offset`, clamped to the collection.
    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        uniform_range(self.options.count, self.options.item_height, offset, 0.0, 0)
            .map(|r| r.start_index)
    }

    fn style_of(&self, index: usize) -> ItemStyle {
        let h = self.options.item_height;
        ItemStyle {
            top: index as f64 * h,
            left: 0.0,
            width: self.options.viewport_width,
            height: h,
        }
    }
}

impl Window for FixedWindow {
    fn count(&self) -> usize {
        self.options.count
    }

    fn set_count(&mut self, count: usize) {
        wtrace!(count, "FixedWindow::set_count");
        self.options.count = count;
    }

    fn reset(&mut self, count: usize) {
        wdebug!(count, "FixedWindow::reset");
        self.options.count = count;
        self.scroll_top = 0.0;
    }

    fn viewport_height(&self) -> f64 {
        self.options.viewport_height
    }

    fn set_viewport_height(&mut self, viewport_height: f64) {
        self.options.viewport_height = sanitize_extent("viewport_height", viewport_height);
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, scroll_top: f64) {
        self.scroll_top = sanitize_scroll_top(scroll_top);
    }

    fn overscan(&self) -> usize {
        self.options.overscan
    }

    fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
    }

    fn total_height(&self) -> f64 {
        self.options.count as f64 * self.options.item_height
    }

    fn visible_range(&self) -> Option<VisibleRange> {
        uniform_range(
            self.options.count,
            self.options.item_height,
            self.scroll_top,
            self.options.viewport_height,
            0,
        )
    }

    fn window_range(&self) -> Option<VisibleRange> {
        uniform_range(
            self.options.count,
            self.options.item_height,
            self.scroll_top,
            self.options.viewport_height,
            self.options.overscan,
        )
    }

    fn item_style(&self, index: usize) -> Option<ItemStyle> {
        (index < self.options.count).then(|| self.style_of(index))
    }

    fn for_each_placement(&self, f: &mut dyn FnMut(usize, ItemStyle)) {
        let Some(range) = self.window_range() else {
            return;
        };
        for index in range.iter() {
            f(index, self.style_of(index));
        }
    }
}
