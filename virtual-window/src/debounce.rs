/// Quiet period after the last scroll event before `is_scrolling` drops back to `false`.
pub const DEFAULT_IS_SCROLLING_RESET_DELAY_MS: u64 = 150;

/// Debounced `is_scrolling` flag.
///
/// There is at most one pending deadline: every scroll event replaces it. The host drives time
/// by passing `now_ms` to [`ScrollDebounce::on_scroll_event`] and [`ScrollDebounce::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollDebounce {
    delay_ms: u64,
    deadline_ms: Option<u64>,
    is_scrolling: bool,
}

impl Default for ScrollDebounce {
    fn default() -> Self {
        Self::new(DEFAULT_IS_SCROLLING_RESET_DELAY_MS)
    }
}

impl ScrollDebounce {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline_ms: None,
            is_scrolling: false,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Changes the delay. A pending deadline keeps the delay it was scheduled with.
    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    /// When the pending deadline expires, if any.
    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Marks scrolling and (re)schedules the single pending deadline.
    pub fn on_scroll_event(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(self.delay_ms));
        self.is_scrolling = true;
    }

    /// Resolves the deadline. Returns `true` when `is_scrolling` just dropped to `false`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                self.is_scrolling = false;
                true
            }
            _ => false,
        }
    }

    /// Drops the pending deadline without firing it.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
        self.is_scrolling = false;
    }
}
