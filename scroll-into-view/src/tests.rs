use crate::*;

use alloc::vec;
use alloc::vec::Vec;

struct ListFixture {
    doc: Document,
    root: NodeId,
    list: NodeId,
    items: Vec<NodeId>,
}

// A 200px tall list at y=100 holding ten 50px rows (max scroll 300).
fn list_fixture() -> ListFixture {
    let mut doc = Document::new(600.0);
    let root = doc.append_root(1000.0);
    let list = doc.append_child(root, 100.0, 200.0);
    let items = (0..10)
        .map(|i| doc.append_child(list, i as f64 * 50.0, 50.0))
        .collect();
    ListFixture {
        doc,
        root,
        list,
        items,
    }
}

#[test]
fn rect_union_and_translate() {
    let a = Rect::new(10.0, 20.0);
    let b = Rect::new(15.0, 40.0);
    assert_eq!(a.union(&b), Rect::new(10.0, 40.0));
    assert_eq!(a.translate(-5.0), Rect::new(5.0, 15.0));
    assert_eq!(b.height(), 25.0);
}

#[test]
fn viewport_height_uses_window_for_degenerate_body() {
    let mut doc = Document::new(600.0);
    let html = doc.append_root(600.0);
    let body = doc.append_child(html, 0.0, 0.0);
    doc.set_body(body, true);
    let div = doc.append_child(body, 0.0, 0.0);

    // Zero-height body falls back to the window.
    assert_eq!(viewport_height(&doc, &body), 600.0);

    // Taller than the window also falls back.
    doc.set_height(body, 900.0);
    assert_eq!(viewport_height(&doc, &body), 600.0);

    doc.set_height(body, 400.0);
    assert_eq!(viewport_height(&doc, &body), 400.0);

    // Ordinary elements never fall back.
    assert_eq!(viewport_height(&doc, &div), 0.0);
}

#[test]
fn scroll_parent_walks_up_from_the_given_node() {
    let f = list_fixture();
    assert_eq!(scroll_parent(&f.doc, &f.items[3]), Some(f.list));
    assert_eq!(scroll_parent(&f.doc, &f.list), Some(f.list));
    assert_eq!(scroll_parent(&f.doc, &f.root), None);
    assert!(is_scrollable(&f.doc, &f.list));
    assert_eq!(max_scroll_top(&f.doc, &f.list), 300.0);
}

#[test]
fn ancestors_are_nearest_first() {
    let f = list_fixture();
    assert_eq!(ancestors(&f.doc, &f.items[0]), vec![f.list, f.root]);
    assert!(ancestors(&f.doc, &f.root).is_empty());
}

#[test]
fn common_ancestor_of_singleton_is_parent() {
    let f = list_fixture();
    assert_eq!(common_ancestor(&f.doc, &[f.items[4]]), Some(f.list));
    assert_eq!(common_ancestor(&f.doc, &[f.list]), Some(f.root));
    assert_eq!(common_ancestor(&f.doc, &[f.root]), None);
}

#[test]
fn common_ancestor_of_siblings_and_mixed_depths() {
    let mut f = list_fixture();
    assert_eq!(
        common_ancestor(&f.doc, &[f.items[1], f.items[7]]),
        Some(f.list)
    );

    let nested = f.doc.append_child(f.items[2], 10.0, 10.0);
    assert_eq!(common_ancestor(&f.doc, &[f.items[5], nested]), Some(f.list));
    // An element is never its own common ancestor, even with its descendants.
    assert_eq!(common_ancestor(&f.doc, &[f.items[2], nested]), Some(f.list));
    assert_eq!(common_ancestor(&f.doc, &[f.items[0], f.list]), Some(f.root));
}

#[test]
fn common_ancestor_of_disjoint_trees_is_none() {
    let mut f = list_fixture();
    let other_root = f.doc.append_root(100.0);
    let other = f.doc.append_child(other_root, 0.0, 10.0);
    assert_eq!(common_ancestor(&f.doc, &[f.items[0], other]), None);
    assert_eq!(common_ancestor(&f.doc, &[]), None);
}

#[test]
fn plan_is_noop_when_already_visible() {
    let f = list_fixture();
    let plan = plan_scroll_into_view(&f.doc, &[f.items[1]]).unwrap();
    assert_eq!(plan.container, f.list);
    assert_eq!(plan.bounds, Rect::new(50.0, 100.0));
    assert_eq!(plan.viewport_height, 200.0);
    assert_eq!(plan.target, None);
    assert!(!plan.needs_scroll());
    assert_eq!(plan.direction(), None);
}

#[test]
fn plan_scrolls_down_by_bottom_overflow() {
    let f = list_fixture();
    let plan = plan_scroll_into_view(&f.doc, &[f.items[5]]).unwrap();
    // Bottom at 300, viewport 200: previous + (elementBottom - visibleBottom).
    assert_eq!(plan.bounds, Rect::new(250.0, 300.0));
    assert_eq!(plan.target, Some(100.0));
    assert_eq!(plan.delta(), 100.0);
    assert_eq!(plan.direction(), Some(ScrollDirection::Forward));
}

#[test]
fn plan_scrolls_up_by_top_overflow() {
    let mut f = list_fixture();
    f.doc.set_scroll_top(&f.list, 300.0);

    let plan = plan_scroll_into_view(&f.doc, &[f.items[2]]).unwrap();
    assert_eq!(plan.scroll_top, 300.0);
    assert_eq!(plan.bounds.top, -200.0);
    assert_eq!(plan.target, Some(100.0));
    assert_eq!(plan.direction(), Some(ScrollDirection::Backward));
}

#[test]
fn plan_prefers_top_edge_when_union_exceeds_viewport() {
    let mut f = list_fixture();
    f.doc.set_scroll_top(&f.list, 100.0);
    let plan = plan_scroll_into_view(&f.doc, &[f.items[0], f.items[9]]).unwrap();
    assert_eq!(plan.bounds, Rect::new(-100.0, 400.0));
    assert_eq!(plan.target, Some(0.0));
}

#[test]
fn plan_covers_union_of_several_elements() {
    let f = list_fixture();
    let plan = plan_scroll_into_view(&f.doc, &[f.items[5], f.items[3]]).unwrap();
    assert_eq!(plan.bounds, Rect::new(150.0, 300.0));
    assert_eq!(plan.target, Some(100.0));
}

#[test]
fn plan_target_is_clamped_to_scroll_range() {
    let mut f = list_fixture();
    let above = f.doc.append_child(f.list, -40.0, 30.0);
    let below = f.doc.append_child(f.list, 480.0, 40.0);

    let plan = plan_scroll_into_view(&f.doc, &[above]).unwrap();
    assert_eq!(plan.target, Some(0.0));

    // Content is now 520 tall, so the bottom row fits exactly at the max offset.
    let plan = plan_scroll_into_view(&f.doc, &[below]).unwrap();
    assert_eq!(plan.target, Some(320.0));
    assert_eq!(max_scroll_top(&f.doc, &f.list), 320.0);
}

#[test]
fn plan_without_scroll_container_is_none() {
    let mut doc = Document::new(600.0);
    let root = doc.append_root(500.0);
    let a = doc.append_child(root, 0.0, 100.0);
    let b = doc.append_child(root, 100.0, 100.0);
    assert_eq!(plan_scroll_into_view(&doc, &[a, b]), None);
    assert_eq!(plan_scroll_into_view(&doc, &[]), None);
}

#[test]
fn scroll_into_view_applies_target_immediately() {
    let mut f = list_fixture();
    let plan = scroll_into_view(&mut f.doc, &[f.items[6]]).unwrap();
    assert_eq!(plan.target, Some(150.0));
    assert_eq!(f.doc.scroll_top(&f.list), 150.0);

    // Now visible: a second call leaves the offset alone.
    let plan = scroll_into_view(&mut f.doc, &[f.items[6]]).unwrap();
    assert_eq!(plan.target, None);
    assert_eq!(f.doc.scroll_top(&f.list), 150.0);
}

#[test]
fn scroll_into_view_uses_body_with_window_viewport() {
    let mut doc = Document::new(600.0);
    let html = doc.append_root(600.0);
    let body = doc.append_child(html, 0.0, 0.0);
    doc.set_body(body, true);
    let content = doc.append_child(body, 0.0, 1500.0);
    let target = doc.append_child(content, 1000.0, 100.0);

    assert_eq!(scroll_parent(&doc, &content), Some(body));
    let plan = scroll_into_view(&mut doc, &[target]).unwrap();
    assert_eq!(plan.container, body);
    assert_eq!(plan.viewport_height, 600.0);
    assert_eq!(doc.scroll_top(&body), 500.0);
}

#[test]
fn is_out_of_view_partial_mode() {
    let f = list_fixture();
    assert!(!is_out_of_view(&f.doc, &[f.items[0]], false));
    assert!(!is_out_of_view(&f.doc, &[f.items[3]], false));
    // Sticks out past the bottom edge.
    assert!(is_out_of_view(&f.doc, &[f.items[4]], false));
    assert!(is_out_of_view(&f.doc, &[f.items[5]], false));
}

#[test]
fn is_out_of_view_completely_mode() {
    let f = list_fixture();
    assert!(!is_out_of_view(&f.doc, &[f.items[3]], true));
    // Starts exactly at the bottom edge: not strictly past it.
    assert!(!is_out_of_view(&f.doc, &[f.items[4]], true));
    assert!(is_out_of_view(&f.doc, &[f.items[5]], true));
}

#[test]
fn is_out_of_view_after_scrolling() {
    let mut f = list_fixture();
    f.doc.set_scroll_top(&f.list, 100.0);

    assert!(is_out_of_view(&f.doc, &[f.items[1]], false));
    assert!(!is_out_of_view(&f.doc, &[f.items[1]], true));
    assert!(is_out_of_view(&f.doc, &[f.items[0]], false));
    assert!(!is_out_of_view(&f.doc, &[f.items[2]], false));
}

#[test]
fn is_out_of_view_requires_every_element() {
    let f = list_fixture();
    assert!(is_out_of_view(&f.doc, &[f.items[5], f.items[9]], true));
    assert!(!is_out_of_view(&f.doc, &[f.items[5], f.items[0]], true));
    assert!(is_out_of_view(&f.doc, &[], true));
    // No scrollable container: counts as visible.
    assert!(!is_out_of_view(&f.doc, &[f.root], false));
    assert!(!is_out_of_view(&f.doc, &[f.list], false));
}

#[test]
fn document_clamps_scroll_and_offsets_nested_rects() {
    let mut f = list_fixture();
    f.doc.set_scroll_top(&f.list, 10_000.0);
    assert_eq!(f.doc.scroll_top(&f.list), 300.0);
    f.doc.set_scroll_top(&f.list, -5.0);
    assert_eq!(f.doc.scroll_top(&f.list), 0.0);
    f.doc.set_scroll_top(&f.list, f64::NAN);
    assert_eq!(f.doc.scroll_top(&f.list), 0.0);

    f.doc.set_scroll_top(&f.list, 120.0);
    assert_eq!(f.doc.layout_top(f.items[4]), 300.0);
    assert_eq!(f.doc.bounding_rect(&f.items[4]), Rect::new(180.0, 230.0));
    // A node's own scroll does not move its own box.
    assert_eq!(f.doc.bounding_rect(&f.list), Rect::new(100.0, 300.0));
    assert_eq!(f.doc.children(f.list).len(), 10);
    assert_eq!(f.doc.len(), 12);
}
