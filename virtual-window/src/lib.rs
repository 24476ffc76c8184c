//! Headless windowing engines for very long lists and grids.
//!
//! For a scroll controller that wires an engine to end-reached pagination and `is_scrolling`
//! debouncing, see the `virtual-window-adapter` crate.
//!
//! Each engine is a pure function of (item count, viewport geometry, scroll offset) to the
//! subset of indexes that must be mounted plus their absolute placement:
//!
//! - [`FixedWindow`]: uniform item height, O(1) range arithmetic.
//! - [`VariableWindow`]: per-item heights measured after render, falling back to an estimate;
//!   the visible range is found by binary search over a cumulative position table.
//! - [`GridWindow`]: fixed-size cells wrapping into rows; columns follow the container width.
//!
//! All three implement [`Window`]. [`EndReachedDetector`] and [`ScrollDebounce`] are the small
//! state machines a host attaches to the same scroll events.
//!
//! The crate is UI-agnostic. A host is expected to provide:
//! - the viewport height (and container width for grids)
//! - the scroll offset on every scroll event
//! - measured heights for variable-height items, once rendered
//!
//! All geometry is in `f64` pixels.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod debounce;
mod end_reached;
mod error;
mod fixed;
mod geometry;
mod grid;
mod heights;
mod options;
mod positions;
mod types;
mod variable;
mod window;

#[cfg(test)]
mod tests;

pub use debounce::{DEFAULT_IS_SCROLLING_RESET_DELAY_MS, ScrollDebounce};
pub use end_reached::{DEFAULT_END_REACHED_THRESHOLD, EndReachedDetector, EndReachedState};
pub use error::WindowError;
pub use fixed::FixedWindow;
pub use geometry::{DEFAULT_OVERSCAN, MIN_EXTENT};
pub use grid::GridWindow;
pub use options::{FixedWindowOptions, GridWindowOptions, VariableWindowOptions};
pub use types::{
    Align, FrameState, ItemStyle, Measurement, Position, VisibleRange, WindowItem,
};
pub use variable::VariableWindow;
pub use window::Window;
