//! Animated scrolling for the `scroll-into-view` crate.
//!
//! The core crate computes how far a container must move to reveal a set of elements and can
//! apply that in one step. This crate adds the parts that depend on time and callbacks:
//!
//! - [`Easing`] curves and a [`Tween`] sampled by wall-clock milliseconds
//! - [`ScrollIntoViewOptions`]: smooth/immediate, duration, easing, completion and step callbacks
//! - [`Controller`]: runs requests, keeps one animation per container, and is advanced by the
//!   host's frame loop through `tick`
//!
//! Nothing here owns UI objects or schedules frames; the adapter calls `tick(tree, now_ms)`.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod options;
mod tween;


pub use controller::Controller;
pub use options::{CompleteCallback, ScrollIntoViewOptions, StepCallback};
pub use tween::{Easing, Speed, Tween};
