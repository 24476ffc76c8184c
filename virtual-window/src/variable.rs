use crate::geometry::{
    expand_range, first_reaching, last_starting_by, sanitize_extent, sanitize_scroll_top,
};
use crate::heights::{MeasuredHeights, is_valid_measurement};
use crate::positions::PositionTable;
use crate::{
    ItemStyle, Measurement, Position, VariableWindowOptions, VisibleRange, Window, WindowError,
};

/// Windowing over items whose heights are only known after they are rendered.
///
/// Every item starts at `estimated_item_height`. The host reports real heights through
/// [`VariableWindow::measure`] (or the batch/scroll-adjusting variants); each effective change
/// rebuilds the position table from the changed index forward. Scrolling never rebuilds the
/// table: range lookup is two binary searches over it.
///
/// Measurements are keyed by index. Growing the collection keeps them; shrinking or
/// [`Window::reset`] discards them, since indexes may then point at different items.
#[derive(Clone, Debug)]
pub struct VariableWindow {
    options: VariableWindowOptions,
    scroll_top: f64,
    measured: MeasuredHeights,
    table: PositionTable,
}

impl VariableWindow {
    /// Creates a window, clamping invalid geometry to [`crate::MIN_EXTENT`].
    pub fn new(options: VariableWindowOptions) -> Self {
        let mut options = options;
        options.estimated_item_height =
            sanitize_extent("estimated_item_height", options.estimated_item_height);
        options.viewport_height = sanitize_extent("viewport_height", options.viewport_height);
        let scroll_top = sanitize_scroll_top(options.initial_scroll_top);
        wdebug!(
            count = options.count,
            estimated_item_height = options.estimated_item_height,
            overscan = options.overscan,
            "VariableWindow::new"
        );
        let mut w = Self {
            options,
            scroll_top,
            measured: MeasuredHeights::new(),
            table: PositionTable::new(),
        };
        w.rebuild_from(0);
        w
    }

    /// Like [`VariableWindow::new`], but rejects invalid geometry instead of clamping it.
    pub fn try_new(options: VariableWindowOptions) -> Result<Self, WindowError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    pub fn options(&self) -> &VariableWindowOptions {
        &self.options
    }

    pub fn estimated_item_height(&self) -> f64 {
        self.options.estimated_item_height
    }

    /// Changes the estimate used for unmeasured items. Measurements are kept.
    pub fn set_estimated_item_height(&mut self, estimated_item_height: f64) {
        let next = sanitize_extent("estimated_item_height", estimated_item_height);
        if next == self.options.estimated_item_height {
            return;
        }
        self.options.estimated_item_height = next;
        self.rebuild_from(0);
    }

    pub fn set_viewport_width(&mut self, viewport_width: Option<f64>) {
        self.options.viewport_width = viewport_width;
    }

    /// Reports the rendered height of `index`.
    ///
    /// Reporting the height the table already uses is a no-op (no rebuild, no version bump),
    /// which keeps measure-on-render loops from spinning.
    pub fn measure(&mut self, index: usize, height: f64) -> Measurement {
        let outcome = self.record(index, height);
        if outcome.is_updated() {
            self.rebuild_from(index);
        }
        outcome
    }

    /// Applies a batch of measurements and rebuilds the table once.
    ///
    /// Returns how many entries changed the table.
    pub fn measure_many(&mut self, measurements: impl IntoIterator<Item = (usize, f64)>) -> usize {
        let mut lowest: Option<usize> = None;
        let mut updated = 0usize;
        for (index, height) in measurements {
            if self.record(index, height).is_updated() {
                updated += 1;
                lowest = Some(lowest.map_or(index, |l| l.min(index)));
            }
        }
        if let Some(from) = lowest {
            self.rebuild_from(from);
        }
        updated
    }

    /// Measures `index` and, when it starts above the current scroll offset, shifts
    /// `scroll_top` by the height change so the content under the viewport does not jump.
    ///
    /// Returns the applied scroll shift (zero when nothing moved).
    pub fn resize_item(&mut self, index: usize, height: f64) -> f64 {
        let Some(before) = self.table.get(index) else {
            return 0.0;
        };
        let Measurement::Updated { delta } = self.measure(index, height) else {
            return 0.0;
        };
        if before.top >= self.scroll_top {
            return 0.0;
        }
        let next = (self.scroll_top + delta).max(0.0);
        let applied = next - self.scroll_top;
        wtrace!(index, delta, applied, "VariableWindow::resize_item adjusted scroll");
        self.scroll_top = next;
        applied
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.measured.contains_key(&index)
    }

    /// Number of recorded measurements.
    pub fn measured_len(&self) -> usize {
        self.measured.len()
    }

    /// Discards all measurements, falling back to the estimate everywhere.
    pub fn reset_measurements(&mut self) {
        if self.measured.is_empty() {
            return;
        }
        wdebug!(cached = self.measured.len(), "VariableWindow::reset_measurements");
        self.measured.clear();
        self.rebuild_from(0);
    }

    /// The current position table, one row per item.
    pub fn positions(&self) -> &[Position] {
        self.table.as_slice()
    }

    pub fn position(&self, index: usize) -> Option<Position> {
        self.table.get(index)
    }

    /// Bumped once per effective table change. Together with [`Window::count`] it identifies a
    /// layout, so hosts can memoize anything derived from the positions.
    pub fn version(&self) -> u64 {
        self.table.version()
    }

    /// Index of the first item reaching `offset`, clamped to the collection.
    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        let count = self.options.count;
        (count > 0).then(|| first_reaching(self.table.as_slice(), offset).min(count - 1))
    }

    fn height_of(&self, index: usize) -> f64 {
        self.measured
            .get(&index)
            .copied()
            .unwrap_or(self.options.estimated_item_height)
    }

    fn record(&mut self, index: usize, height: f64) -> Measurement {
        if index >= self.options.count {
            wtrace!(index, count = self.options.count, "measure: out of bounds");
            return Measurement::OutOfBounds;
        }
        if !is_valid_measurement(height) {
            wwarn!(index, height, "measure: rejected invalid height");
            return Measurement::Rejected;
        }
        let current = self.height_of(index);
        self.measured.insert(index, height);
        if current == height {
            return Measurement::Unchanged;
        }
        wtrace!(index, height, previous = current, "measure");
        Measurement::Updated {
            delta: height - current,
        }
    }

    fn rebuild_from(&mut self, from: usize) {
        let measured = &self.measured;
        let estimate = self.options.estimated_item_height;
        self.table.rebuild(self.options.count, from, |i| {
            measured.get(&i).copied().unwrap_or(estimate)
        });
        debug_assert_eq!(self.table.len(), self.options.count);
    }

    fn style_of(&self, position: Position) -> ItemStyle {
        ItemStyle {
            top: position.top,
            left: 0.0,
            width: self.options.viewport_width,
            height: position.height,
        }
    }
}

impl Window for VariableWindow {
    fn count(&self) -> usize {
        self.options.count
    }

    fn set_count(&mut self, count: usize) {
        let prev = self.options.count;
        if count == prev {
            return;
        }
        self.options.count = count;
        if count > prev {
            wtrace!(prev, count, "VariableWindow::set_count (append)");
            self.rebuild_from(prev);
            return;
        }

        wdebug!(prev, count, "VariableWindow::set_count (shrink, measurements dropped)");
        self.measured.clear();
        self.rebuild_from(0);
        self.scroll_top = self.scroll_top.min(self.max_scroll_top());
    }

    fn reset(&mut self, count: usize) {
        wdebug!(count, cached = self.measured.len(), "VariableWindow::reset");
        self.options.count = count;
        self.measured.clear();
        self.scroll_top = 0.0;
        self.rebuild_from(0);
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
        self.table.total()
    }

    fn visible_range(&self) -> Option<VisibleRange> {
        let count = self.options.count;
        if count == 0 {
            return None;
        }
        let positions = self.table.as_slice();
        let start = first_reaching(positions, self.scroll_top).min(count - 1);
        let bottom = self.scroll_top + self.options.viewport_height;
        let end = last_starting_by(positions, start, bottom).unwrap_or(start);
        Some(VisibleRange::new(start, end))
    }

    fn window_range(&self) -> Option<VisibleRange> {
        self.visible_range()
            .map(|r| expand_range(r, self.options.overscan, self.options.count))
    }

    fn item_style(&self, index: usize) -> Option<ItemStyle> {
        self.table.get(index).map(|p| self.style_of(p))
    }

    fn for_each_placement(&self, f: &mut dyn FnMut(usize, ItemStyle)) {
        let Some(range) = self.window_range() else {
            return;
        };
        let positions = &self.table.as_slice()[range.start_index..=range.end_index];
        for (offset, &position) in positions.iter().enumerate() {
            f(range.start_index + offset, self.style_of(position));
        }
    }
}
