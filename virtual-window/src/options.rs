use core::num::NonZeroUsize;

use crate::WindowError;
use crate::geometry::{DEFAULT_OVERSCAN, check_extent};

fn check_non_negative(field: &'static str, value: f64) -> Result<(), WindowError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WindowError::InvalidGeometry { field, value })
    }
}

/// Configuration for [`crate::FixedWindow`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedWindowOptions {
    pub count: usize,
    /// Uniform row height in pixels.
    pub item_height: f64,
    pub viewport_height: f64,
    /// Optional viewport width, copied into each emitted style.
    pub viewport_width: Option<f64>,
    pub overscan: usize,
    pub initial_scroll_top: f64,
}

impl FixedWindowOptions {
    pub fn new(count: usize, item_height: f64) -> Self {
        Self {
            count,
            item_height,
            viewport_height: 0.0,
            viewport_width: None,
            overscan: DEFAULT_OVERSCAN,
            initial_scroll_top: 0.0,
        }
    }

    pub fn with_viewport_height(mut self, viewport_height: f64) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_viewport_width(mut self, viewport_width: Option<f64>) -> Self {
        self.viewport_width = viewport_width;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_initial_scroll_top(mut self, scroll_top: f64) -> Self {
        self.initial_scroll_top = scroll_top;
        self
    }

    /// Checks geometry without clamping anything.
    pub fn validate(&self) -> Result<(), WindowError> {
        check_extent("item_height", self.item_height)?;
        check_extent("viewport_height", self.viewport_height)
    }
}

/// Configuration for [`crate::VariableWindow`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableWindowOptions {
    pub count: usize,
    /// Height assumed for every item until it is measured.
    pub estimated_item_height: f64,
    pub viewport_height: f64,
    pub viewport_width: Option<f64>,
    pub overscan: usize,
    pub initial_scroll_top: f64,
}

impl VariableWindowOptions {
    pub fn new(count: usize, estimated_item_height: f64) -> Self {
        Self {
            count,
            estimated_item_height,
            viewport_height: 0.0,
            viewport_width: None,
            overscan: DEFAULT_OVERSCAN,
            initial_scroll_top: 0.0,
        }
    }

    pub fn with_viewport_height(mut self, viewport_height: f64) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_viewport_width(mut self, viewport_width: Option<f64>) -> Self {
        self.viewport_width = viewport_width;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_initial_scroll_top(mut self, scroll_top: f64) -> Self {
        self.initial_scroll_top = scroll_top;
        self
    }

    pub fn validate(&self) -> Result<(), WindowError> {
        check_extent("estimated_item_height", self.estimated_item_height)?;
        check_extent("viewport_height", self.viewport_height)
    }
}

/// Configuration for [`crate::GridWindow`].
///
/// `column_count` forces the number of columns; when `None` it is derived from
/// `container_width / (item_width + gap)` (floored, at least one).
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridWindowOptions {
    pub count: usize,
    pub item_width: f64,
    pub item_height: f64,
    /// Space between rows and between columns.
    pub gap: f64,
    pub column_count: Option<NonZeroUsize>,
    pub container_width: f64,
    pub viewport_height: f64,
    /// Extra rows rendered above and below the viewport.
    pub overscan: usize,
    pub initial_scroll_top: f64,
}

impl GridWindowOptions {
    pub fn new(count: usize, item_width: f64, item_height: f64) -> Self {
        Self {
            count,
            item_width,
            item_height,
            gap: 0.0,
            column_count: None,
            container_width: 0.0,
            viewport_height: 0.0,
            overscan: DEFAULT_OVERSCAN,
            initial_scroll_top: 0.0,
        }
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_column_count(mut self, column_count: Option<NonZeroUsize>) -> Self {
        self.column_count = column_count;
        self
    }

    pub fn with_container_width(mut self, container_width: f64) -> Self {
        self.container_width = container_width;
        self
    }

    pub fn with_viewport_height(mut self, viewport_height: f64) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_initial_scroll_top(mut self, scroll_top: f64) -> Self {
        self.initial_scroll_top = scroll_top;
        self
    }

    pub fn validate(&self) -> Result<(), WindowError> {
        check_extent("item_width", self.item_width)?;
        check_extent("item_height", self.item_height)?;
        check_extent("viewport_height", self.viewport_height)?;
        check_non_negative("gap", self.gap)?;
        check_non_negative("container_width", self.container_width)
    }
}
