use crate::tree::{ScrollTree, scroll_parent, viewport_height};

/// Returns `true` if every element in `elements` is out of its container's visible window.
///
/// For each element the container is the nearest scrollable element starting at the element's
/// parent. With `pY` the container's scroll offset, `pH` its viewport height, `elY` the
/// element's `offset_top` and `elH` its `offset_height`, an element is out of view when
///
/// - `completely`: `elY > pY + pH` or `elY + elH < pY`
/// - otherwise: `elY + elH > pY + pH` or `elY < pY`
///
/// So `completely = false` reports an element that sticks out on either side, and
/// `completely = true` only one that lies entirely past an edge.
///
/// An element without a scrollable container counts as in view. An empty set is vacuously out
/// of view.
pub fn is_out_of_view<T: ScrollTree + ?Sized>(
    tree: &T,
    elements: &[T::Node],
    completely: bool,
) -> bool {
    elements
        .iter()
        .all(|el| element_out_of_view(tree, el, completely))
}

fn element_out_of_view<T: ScrollTree + ?Sized>(tree: &T, el: &T::Node, completely: bool) -> bool {
    let Some(container) = tree.parent(el).and_then(|p| scroll_parent(tree, &p)) else {
        sitrace!("is_out_of_view: no scroll container, treating as visible");
        return false;
    };

    let p_y = tree.scroll_top(&container);
    let p_h = viewport_height(tree, &container);
    let el_y = tree.offset_top(el);
    let el_h = tree.offset_height(el);

    let below = if completely {
        el_y > p_y + p_h
    } else {
        el_y + el_h > p_y + p_h
    };
    let above = if completely {
        el_y + el_h < p_y
    } else {
        el_y < p_y
    };

    below || above
}
