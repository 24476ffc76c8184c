//! Adapter utilities for the `virtual-window` crate.
//!
//! The `virtual-window` crate holds the layout engines and the small scroll state machines. This
//! crate wires them together into a per-view [`Controller`]:
//!
//! - forwards scroll/resize events to a [`virtual_window::Window`] engine
//! - fires an `on_end_reached` pagination callback with hysteresis
//! - debounces `is_scrolling` from host-supplied timestamps
//! - tears everything down on unmount
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod options;


pub use controller::{Controller, OnEndReached, ScrollOutcome};
pub use options::ControllerOptions;
