#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Sparse `index -> measured height` map. Grows as items are measured and is only cleared when
/// the dataset is replaced.
#[cfg(feature = "std")]
pub(crate) type MeasuredHeights = HashMap<usize, f64>;
#[cfg(not(feature = "std"))]
pub(crate) type MeasuredHeights = BTreeMap<usize, f64>;

/// Heights accepted from a measurement: finite and not negative. Zero is a valid (collapsed) row.
pub(crate) fn is_valid_measurement(height: f64) -> bool {
    height.is_finite() && height >= 0.0
}
