//! Range arithmetic shared by the window engines.

use crate::{Position, VisibleRange, WindowError};

/// Smallest extent accepted for configured geometry (item sizes, viewport height).
pub const MIN_EXTENT: f64 = 1.0;

/// Default number of extra items (or grid rows) rendered on each side of the viewport.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Floors `value` without `std`. NaN maps to 0 and out-of-range values saturate.
pub(crate) fn floor_to_i64(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    let truncated = value as i64;
    if (truncated as f64) > value {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}

/// Clamps a signed index into `[min, max]`.
pub(crate) fn clamp_index(value: i64, min: usize, max: usize) -> usize {
    let lo = i64::try_from(min).unwrap_or(i64::MAX);
    let hi = i64::try_from(max).unwrap_or(i64::MAX);
    if value <= lo {
        min
    } else if value >= hi {
        max
    } else {
        value as usize
    }
}

fn overscan_i64(overscan: usize) -> i64 {
    i64::try_from(overscan).unwrap_or(i64::MAX)
}

pub(crate) fn is_valid_extent(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub(crate) fn check_extent(field: &'static str, value: f64) -> Result<(), WindowError> {
    if is_valid_extent(value) {
        Ok(())
    } else {
        Err(WindowError::InvalidGeometry { field, value })
    }
}

/// Replaces a non-finite or non-positive extent with [`MIN_EXTENT`].
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn sanitize_extent(field: &'static str, value: f64) -> f64 {
    if is_valid_extent(value) {
        return value;
    }
    wwarn!(field, value, clamped = MIN_EXTENT, "invalid extent clamped");
    MIN_EXTENT
}

/// Like [`sanitize_extent`] but zero is allowed (gaps, container widths).
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn sanitize_non_negative(field: &'static str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        return value;
    }
    wwarn!(field, value, "invalid length clamped to 0");
    0.0
}

pub(crate) fn sanitize_scroll_top(value: f64) -> f64 {
    if value.is_finite() {
        return value;
    }
    wwarn!(value, "non-finite scroll offset treated as 0");
    0.0
}

/// Inclusive range of uniform tracks (`stride` pixels each) overlapping
/// `[scroll_top, scroll_top + viewport_height]`, widened by `overscan` on both ends.
///
/// Out-of-range scroll offsets are tolerated: the result is always clamped to `0..count`.
pub(crate) fn uniform_range(
    count: usize,
    stride: f64,
    scroll_top: f64,
    viewport_height: f64,
    overscan: usize,
) -> Option<VisibleRange> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    let overscan = overscan_i64(overscan);

    let first = floor_to_i64(scroll_top / stride).saturating_sub(overscan);
    let start = clamp_index(first, 0, last);
    let end = floor_to_i64((scroll_top + viewport_height) / stride).saturating_add(overscan);
    let end = clamp_index(end, start, last);
    Some(VisibleRange::new(start, end))
}

/// Widens a strict range by `overscan` on both ends, clamped to `0..count`.
pub(crate) fn expand_range(range: VisibleRange, overscan: usize, count: usize) -> VisibleRange {
    let start = range.start_index.saturating_sub(overscan);
    let end = range
        .end_index
        .saturating_add(overscan)
        .min(count.saturating_sub(1))
        .max(start);
    VisibleRange::new(start, end)
}

/// First index whose extent reaches `offset` (`top + height >= offset`).
///
/// Returns `positions.len()` when every item ends before `offset`.
pub(crate) fn first_reaching(positions: &[Position], offset: f64) -> usize {
    let mut lo = 0usize;
    let mut hi = positions.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if positions[mid].bottom() < offset {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Last index at or after `from` whose top is at or above `offset` (`top <= offset`).
///
/// Returns `None` when no item in `from..` starts by `offset`.
pub(crate) fn last_starting_by(positions: &[Position], from: usize, offset: f64) -> Option<usize> {
    let mut lo = from.min(positions.len());
    let mut hi = positions.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if positions[mid].top <= offset {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    (lo > from).then(|| lo - 1)
}
