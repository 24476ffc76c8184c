use alloc::vec::Vec;

use crate::Position;

/// Cumulative `top` offsets for a variable-height list.
///
/// The table is derived state: `positions[i].top` is the sum of the heights before `i`. It is
/// rebuilt incrementally from the lowest changed index and stamped with a version so callers can
/// memoize on `(len, version)`.
#[derive(Clone, Debug, Default)]
pub(crate) struct PositionTable {
    positions: Vec<Position>,
    total: f64,
    version: u64,
}

impl PositionTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.positions.len()
    }

    pub(crate) fn as_slice(&self) -> &[Position] {
        &self.positions
    }

    pub(crate) fn get(&self, index: usize) -> Option<Position> {
        self.positions.get(index).copied()
    }

    pub(crate) fn total(&self) -> f64 {
        self.total
    }

    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    /// Resizes the table to `len` rows and recomputes every row from `from` onwards.
    ///
    /// `height_of(i)` must return a finite, non-negative height.
    pub(crate) fn rebuild(&mut self, len: usize, from: usize, height_of: impl Fn(usize) -> f64) {
        let from = from.min(self.positions.len()).min(len);
        self.positions.truncate(len);
        self.positions.resize(len, Position::default());

        let mut top = match from.checked_sub(1) {
            Some(prev) => self.positions[prev].bottom(),
            None => 0.0,
        };
        for (i, slot) in self.positions.iter_mut().enumerate().skip(from) {
            let height = height_of(i);
            debug_assert!(
                height.is_finite() && height >= 0.0,
                "PositionTable: invalid height (index={i}, height={height})"
            );
            *slot = Position { top, height };
            top += height;
        }

        self.total = top;
        self.version = self.version.wrapping_add(1);
    }
}
