use crate::tree::{ScrollTree, clamp_scroll_top, scroll_parent, viewport_height};
use crate::{Rect, ScrollPlan, common_ancestor};

/// Computes the smallest scroll that brings `elements` into view, without touching the host.
///
/// The container is the nearest scrollable element starting at the elements' common ancestor.
/// The union of the elements' bounding rects is re-based onto the container's top edge; then:
///
/// - if the union starts above the visible area, the target is `scroll_top + top`
/// - else if it ends below the visible area, the target is `scroll_top + (bottom - viewport)`
/// - otherwise no scroll is needed (`target == None`)
///
/// Targets are clamped to the container's scroll range.
///
/// Returns `None` when there is nothing to scroll: an empty set, no common ancestor, or no
/// scrollable container.
pub fn plan_scroll_into_view<T: ScrollTree + ?Sized>(
    tree: &T,
    elements: &[T::Node],
) -> Option<ScrollPlan<T::Node>> {
    let Some(ancestor) = common_ancestor(tree, elements) else {
        sidebug!(elements = elements.len(), "plan: no common ancestor");
        return None;
    };
    let Some(container) = scroll_parent(tree, &ancestor) else {
        sidebug!("plan: no scrollable container");
        return None;
    };

    let container_top = tree.bounding_rect(&container).top;
    let viewport = viewport_height(tree, &container);
    let scroll_top = tree.scroll_top(&container);

    let bounds = elements
        .iter()
        .map(|el| tree.bounding_rect(el).translate(-container_top))
        .fold(
            Rect::new(f64::INFINITY, f64::NEG_INFINITY),
            |acc, r| acc.union(&r),
        );

    let raw_target = if bounds.top < 0.0 {
        Some(scroll_top + bounds.top)
    } else if bounds.bottom > viewport {
        Some(scroll_top + (bounds.bottom - viewport))
    } else {
        None
    };
    let target = raw_target.map(|t| clamp_scroll_top(tree, &container, t));

    sitrace!(
        top = bounds.top,
        bottom = bounds.bottom,
        viewport,
        scroll_top,
        ?target,
        "plan_scroll_into_view"
    );

    Some(ScrollPlan {
        container,
        scroll_top,
        viewport_height: viewport,
        bounds,
        target,
    })
}

/// Scrolls the nearest scrollable ancestor of `elements` just enough to show them, immediately.
///
/// This is the non-animated form. For smooth scrolling and completion callbacks, drive the
/// plan through the `scroll-into-view-adapter` crate's controller.
///
/// Returns the applied plan, or `None` when there was no scroll target.
pub fn scroll_into_view<T: ScrollTree + ?Sized>(
    tree: &mut T,
    elements: &[T::Node],
) -> Option<ScrollPlan<T::Node>> {
    let plan = plan_scroll_into_view(&*tree, elements)?;
    if let Some(target) = plan.target {
        tree.set_scroll_top(&plan.container, target);
    }
    Some(plan)
}
