use core::num::NonZeroUsize;

use crate::geometry::{
    floor_to_i64, sanitize_extent, sanitize_non_negative, sanitize_scroll_top, uniform_range,
};
use crate::{GridWindowOptions, ItemStyle, VisibleRange, Window, WindowError};

/// Windowing over fixed-size cells that wrap into rows.
///
/// The column count is either forced through [`GridWindowOptions::column_count`] or derived from
/// the container width on every query, so it can never disagree with the width it came from.
/// Rows are located like [`crate::FixedWindow`] locates items, with a row stride of
/// `item_height + gap`. The last row may be partial.
#[derive(Clone, Debug)]
pub struct GridWindow {
    options: GridWindowOptions,
    scroll_top: f64,
}

impl GridWindow {
    /// Creates a grid, clamping invalid geometry.
    pub fn new(options: GridWindowOptions) -> Self {
        let mut options = options;
        options.item_width = sanitize_extent("item_width", options.item_width);
        options.item_height = sanitize_extent("item_height", options.item_height);
        options.viewport_height = sanitize_extent("viewport_height", options.viewport_height);
        options.gap = sanitize_non_negative("gap", options.gap);
        options.container_width = sanitize_non_negative("container_width", options.container_width);
        let scroll_top = sanitize_scroll_top(options.initial_scroll_top);
        wdebug!(
            count = options.count,
            item_width = options.item_width,
            item_height = options.item_height,
            gap = options.gap,
            container_width = options.container_width,
            "GridWindow::new"
        );
        Self {
            options,
            scroll_top,
        }
    }

    /// Like [`GridWindow::new`], but rejects invalid geometry instead of clamping it.
    pub fn try_new(options: GridWindowOptions) -> Result<Self, WindowError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    pub fn options(&self) -> &GridWindowOptions {
        &self.options
    }

    pub fn container_width(&self) -> f64 {
        self.options.container_width
    }

    /// Feeds a new container width (e.g. from a resize observer). The layout reflows on the next
    /// query; items may jump columns, which is expected.
    pub fn set_container_width(&mut self, container_width: f64) {
        let next = sanitize_non_negative("container_width", container_width);
        if next != self.options.container_width {
            wtrace!(
                from = self.options.container_width,
                to = next,
                "GridWindow::set_container_width"
            );
        }
        self.options.container_width = next;
    }

    pub fn forced_column_count(&self) -> Option<NonZeroUsize> {
        self.options.column_count
    }

    /// Forces a column count, or returns to width-derived columns with `None`.
    pub fn set_forced_column_count(&mut self, column_count: Option<NonZeroUsize>) {
        self.options.column_count = column_count;
    }

    pub fn set_gap(&mut self, gap: f64) {
        self.options.gap = sanitize_non_negative("gap", gap);
    }

    pub fn set_item_size(&mut self, item_width: f64, item_height: f64) {
        self.options.item_width = sanitize_extent("item_width", item_width);
        self.options.item_height = sanitize_extent("item_height", item_height);
    }

    /// Columns per row: forced, or `floor(container_width / (item_width + gap))`, at least one.
    pub fn column_count(&self) -> usize {
        if let Some(forced) = self.options.column_count {
            return forced.get();
        }
        let stride = self.options.item_width + self.options.gap;
        let derived = floor_to_i64(self.options.container_width / stride);
        usize::try_from(derived).unwrap_or(0).max(1)
    }

    pub fn row_count(&self) -> usize {
        self.options.count.div_ceil(self.column_count())
    }

    /// `(row, column)` of `index`.
    pub fn cell_of(&self, index: usize) -> (usize, usize) {
        let columns = self.column_count();
        (index / columns, index % columns)
    }

    fn row_stride(&self) -> f64 {
        self.options.item_height + self.options.gap
    }

    /// Rows overlapping the viewport, widened by the overscan (in rows).
    pub fn row_range(&self) -> Option<VisibleRange> {
        self.rows_for(self.options.overscan)
    }

    fn rows_for(&self, overscan: usize) -> Option<VisibleRange> {
        uniform_range(
            self.row_count(),
            self.row_stride(),
            self.scroll_top,
            self.options.viewport_height,
            overscan,
        )
    }

    /// Converts a row range into the flat item range it covers.
    fn items_in_rows(&self, rows: VisibleRange) -> VisibleRange {
        let columns = self.column_count();
        let last = self.options.count.saturating_sub(1);
        let start = rows.start_index.saturating_mul(columns).min(last);
        let end = rows
            .end_index
            .saturating_mul(columns)
            .saturating_add(columns - 1)
            .min(last);
        VisibleRange::new(start, end)
    }

    fn style_of(&self, row: usize, column: usize) -> ItemStyle {
        let gap = self.options.gap;
        ItemStyle {
            top: row as f64 * (self.options.item_height + gap),
            left: column as f64 * (self.options.item_width + gap),
            width: Some(self.options.item_width),
            height: self.options.item_height,
        }
    }
}

impl Window for GridWindow {
    fn count(&self) -> usize {
        self.options.count
    }

    fn set_count(&mut self, count: usize) {
        wtrace!(count, "GridWindow::set_count");
        self.options.count = count;
    }

    fn reset(&mut self, count: usize) {
        wdebug!(count, "GridWindow::reset");
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
        self.row_count() as f64 * self.row_stride()
    }

    fn visible_range(&self) -> Option<VisibleRange> {
        self.rows_for(0).map(|rows| self.items_in_rows(rows))
    }

    fn window_range(&self) -> Option<VisibleRange> {
        self.row_range().map(|rows| self.items_in_rows(rows))
    }

    fn item_style(&self, index: usize) -> Option<ItemStyle> {
        if index >= self.options.count {
            return None;
        }
        let (row, column) = self.cell_of(index);
        Some(self.style_of(row, column))
    }

    fn for_each_placement(&self, f: &mut dyn FnMut(usize, ItemStyle)) {
        let Some(rows) = self.row_range() else {
            return;
        };
        let columns = self.column_count();
        let count = self.options.count;
        for row in rows.iter() {
            for column in 0..columns {
                let index = row * columns + column;
                if index >= count {
                    return;
                }
                f(index, self.style_of(row, column));
            }
        }
    }
}
