//! Scrolls the nearest scrollable ancestor of one or more elements just enough to bring them into
//! view.
//!
//! Unlike the browser's native `scrollIntoView`, nothing happens when the elements are already
//! fully visible, and when they are not, the container moves by exactly the overflow instead of
//! snapping the elements to an edge.
//!
//! The crate is headless. A host implements [`ScrollTree`] to expose parent links and geometry
//! (bounding rects, scroll offsets, client heights); [`Document`] is an in-memory host, and
//! `WebDom` (feature `web`) binds to `web_sys`. On top of that:
//!
//! - [`plan_scroll_into_view`] / [`scroll_into_view`]: compute or apply the correction
//! - [`is_out_of_view`]: whether every element has left its container's visible window
//! - [`common_ancestor`]: the nearest ancestor shared by a set of elements
//!
//! For animated scrolling with easing and completion callbacks, see the
//! `scroll-into-view-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod ancestor;
mod document;
mod plan;
mod tree;
mod types;
mod visibility;
#[cfg(feature = "web")]
mod web;

#[cfg(test)]
mod tests;

pub use ancestor::common_ancestor;
pub use document::{Document, NodeId};
pub use plan::{plan_scroll_into_view, scroll_into_view};
pub use tree::{
    ScrollTree, ancestors, clamp_scroll_top, is_scrollable, max_scroll_top, scroll_parent,
    viewport_height,
};
pub use types::{Rect, ScrollDirection, ScrollPlan};
pub use visibility::is_out_of_view;
#[cfg(feature = "web")]
pub use web::WebDom;
