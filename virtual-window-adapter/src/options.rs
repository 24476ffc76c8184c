use virtual_window::{
    DEFAULT_END_REACHED_THRESHOLD, DEFAULT_IS_SCROLLING_RESET_DELAY_MS, EndReachedDetector,
    WindowError,
};

/// Scroll-behaviour settings for [`crate::Controller`].
///
/// Callbacks are not part of the options so they can be loaded from a host config file
/// (with `feature = "serde"`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerOptions {
    /// Fraction of the content (`(scroll_top + viewport) / total`) that triggers `on_end_reached`.
    pub end_reached_threshold: f64,
    pub is_scrolling_reset_delay_ms: u64,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            end_reached_threshold: DEFAULT_END_REACHED_THRESHOLD,
            is_scrolling_reset_delay_ms: DEFAULT_IS_SCROLLING_RESET_DELAY_MS,
        }
    }
}

impl ControllerOptions {
    pub fn with_end_reached_threshold(mut self, threshold: f64) -> Self {
        self.end_reached_threshold = threshold;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    /// Rejects a threshold outside `(0, 1]`. [`crate::Controller::new`] falls back to the
    /// default threshold instead.
    pub fn validate(&self) -> Result<(), WindowError> {
        EndReachedDetector::try_new(self.end_reached_threshold).map(|_| ())
    }
}
