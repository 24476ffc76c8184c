use crate::WindowError;

/// Default fraction of the content that must be scrolled through before firing.
pub const DEFAULT_END_REACHED_THRESHOLD: f64 = 0.8;

/// State of an [`EndReachedDetector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndReachedState {
    /// Ready to fire the next time the threshold is crossed.
    Armed,
    /// Already fired for the current excursion past the threshold.
    Fired,
}

/// Near-the-end detection with hysteresis, for driving pagination.
///
/// `scroll_percent = (scroll_top + viewport_height) / total_height`. Crossing the threshold while
/// armed fires once and latches; the detector re-arms only after the percentage drops back below
/// the threshold. Hovering at or past the threshold therefore never re-fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EndReachedDetector {
    threshold: f64,
    state: EndReachedState,
}

impl Default for EndReachedDetector {
    fn default() -> Self {
        Self::new(DEFAULT_END_REACHED_THRESHOLD)
    }
}

fn is_valid_threshold(threshold: f64) -> bool {
    threshold.is_finite() && threshold > 0.0 && threshold <= 1.0
}

impl EndReachedDetector {
    /// Creates an armed detector. An invalid threshold falls back to the default.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: sanitize_threshold(threshold),
            state: EndReachedState::Armed,
        }
    }

    pub fn try_new(threshold: f64) -> Result<Self, WindowError> {
        if !is_valid_threshold(threshold) {
            return Err(WindowError::InvalidThreshold { value: threshold });
        }
        Ok(Self::new(threshold))
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = sanitize_threshold(threshold);
    }

    pub fn state(&self) -> EndReachedState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.state == EndReachedState::Armed
    }

    /// Forces the detector back to [`EndReachedState::Armed`] (e.g. after a dataset swap).
    pub fn rearm(&mut self) {
        self.state = EndReachedState::Armed;
    }

    /// Feeds one scroll event. Returns `true` exactly when the caller should request more data.
    ///
    /// Empty content (`total_height <= 0`) has no meaningful percentage and leaves the state
    /// untouched.
    pub fn evaluate(&mut self, scroll_top: f64, viewport_height: f64, total_height: f64) -> bool {
        if total_height.is_nan() || total_height <= 0.0 {
            return false;
        }
        let percent = (scroll_top + viewport_height) / total_height;
        match self.state {
            EndReachedState::Armed if percent >= self.threshold => {
                wdebug!(percent, threshold = self.threshold, "end reached");
                self.state = EndReachedState::Fired;
                true
            }
            EndReachedState::Fired if percent < self.threshold => {
                wtrace!(percent, threshold = self.threshold, "end-reached re-armed");
                self.state = EndReachedState::Armed;
                false
            }
            _ => false,
        }
    }
}

fn sanitize_threshold(threshold: f64) -> f64 {
    if is_valid_threshold(threshold) {
        return threshold;
    }
    wwarn!(
        threshold,
        fallback = DEFAULT_END_REACHED_THRESHOLD,
        "invalid end-reached threshold"
    );
    DEFAULT_END_REACHED_THRESHOLD
}
