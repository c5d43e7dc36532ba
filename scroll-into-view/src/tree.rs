use alloc::vec::Vec;

use crate::Rect;

/// The host document as seen by this crate.
///
/// This is the only seam between the algorithms and a real UI: a browser binding, a TUI widget
/// tree or the in-memory [`crate::Document`]. Geometry is read on every call and never cached,
/// so implementations should report live values.
///
/// Heights and offsets are in the host's pixel unit. `bounding_rect` is relative to the visual
/// viewport (like `getBoundingClientRect`), `offset_top` is relative to the element's offset
/// parent.
pub trait ScrollTree {
    /// A handle to an element. Cheap to clone; equality means "same element".
    type Node: Clone + PartialEq;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Whether `node` is the document body, whose viewport falls back to the window.
    fn is_body(&self, node: &Self::Node) -> bool;

    fn client_height(&self, node: &Self::Node) -> f64;

    /// Height of the node's content, including the part hidden by overflow.
    fn scroll_height(&self, node: &Self::Node) -> f64;

    fn window_height(&self) -> f64;

    fn bounding_rect(&self, node: &Self::Node) -> Rect;

    fn scroll_top(&self, node: &Self::Node) -> f64;

    fn set_scroll_top(&mut self, node: &Self::Node, scroll_top: f64);

    fn offset_top(&self, node: &Self::Node) -> f64;

    fn offset_height(&self, node: &Self::Node) -> f64;
}

/// Returns the visible height of `node`.
///
/// This is `client_height`, except for the body: when it reports zero height (e.g. all of its
/// children are absolutely positioned) or more than the window, the window height is used.
pub fn viewport_height<T: ScrollTree + ?Sized>(tree: &T, node: &T::Node) -> f64 {
    let client = tree.client_height(node);
    if !tree.is_body(node) {
        return client;
    }
    let window = tree.window_height();
    if client > window || client == 0.0 {
        window
    } else {
        client
    }
}

/// Returns the largest valid scroll offset of `node`.
pub fn max_scroll_top<T: ScrollTree + ?Sized>(tree: &T, node: &T::Node) -> f64 {
    (tree.scroll_height(node) - viewport_height(tree, node)).max(0.0)
}

/// Clamps `scroll_top` into `[0, max_scroll_top(node)]`.
///
/// Non-finite inputs clamp to zero.
pub fn clamp_scroll_top<T: ScrollTree + ?Sized>(tree: &T, node: &T::Node, scroll_top: f64) -> f64 {
    if !scroll_top.is_finite() {
        return 0.0;
    }
    scroll_top.clamp(0.0, max_scroll_top(tree, node))
}

/// Whether the content of `node` is taller than its viewport.
pub fn is_scrollable<T: ScrollTree + ?Sized>(tree: &T, node: &T::Node) -> bool {
    tree.scroll_height(node) > viewport_height(tree, node)
}

/// Finds the nearest scrollable element, starting at `node` itself and walking up.
///
/// Callers usually pass an ancestor (the common ancestor of a selection, or an element's parent).
/// Returns `None` if nothing on the chain scrolls.
pub fn scroll_parent<T: ScrollTree + ?Sized>(tree: &T, node: &T::Node) -> Option<T::Node> {
    let mut cur = Some(node.clone());
    while let Some(n) = cur {
        if is_scrollable(tree, &n) {
            return Some(n);
        }
        cur = tree.parent(&n);
    }
    None
}

/// Returns the ancestors of `node`, nearest first. The node itself is not included.
pub fn ancestors<T: ScrollTree + ?Sized>(tree: &T, node: &T::Node) -> Vec<T::Node> {
    let mut out = Vec::new();
    let mut cur = tree.parent(node);
    while let Some(n) = cur {
        cur = tree.parent(&n);
        out.push(n);
    }
    out
}
