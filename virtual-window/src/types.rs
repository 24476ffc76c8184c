use core::ops::RangeInclusive;

/// Where to place an item when computing a scroll-to offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Keep the current offset when the item is fully visible, otherwise scroll the least.
    Auto,
}

/// An inclusive range of item indexes.
///
/// Engines never produce an empty `VisibleRange`; an empty collection yields `None` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // inclusive
}

impl VisibleRange {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        debug_assert!(
            start_index <= end_index,
            "VisibleRange: start after end (start={start_index}, end={end_index})"
        );
        Self {
            start_index,
            end_index,
        }
    }

    /// Number of indexes covered (always at least one).
    pub fn item_count(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index <= self.end_index
    }

    pub fn iter(&self) -> RangeInclusive<usize> {
        self.start_index..=self.end_index
    }
}

/// Absolute placement of one item inside the scroll content, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStyle {
    pub top: f64,
    pub left: f64,
    /// `None` for list rows that stretch across the viewport width when it is unknown.
    pub width: Option<f64>,
    pub height: f64,
}

impl ItemStyle {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// One entry of a render pass: the caller's item, its index, and where to put it.
#[derive(Debug)]
pub struct WindowItem<'a, T> {
    pub item: &'a T,
    pub index: usize,
    pub style: ItemStyle,
}

impl<T> Clone for WindowItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for WindowItem<'_, T> {}

/// A row of the variable-height position table.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub top: f64,
    pub height: f64,
}

impl Position {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Result of reporting a measured height to a [`crate::VariableWindow`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Measurement {
    /// The height matched what the table already used; nothing was recomputed.
    Unchanged,
    /// The table was rebuilt; `delta` is `new - previous` height.
    Updated { delta: f64 },
    /// The height was NaN, infinite or negative and was dropped.
    Rejected,
    /// The index is not part of the current collection.
    OutOfBounds,
}

impl Measurement {
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

/// A lightweight snapshot of scroll geometry, useful for restoring a view across sessions.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub scroll_top: f64,
    pub viewport_height: f64,
}
