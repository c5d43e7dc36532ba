use scroll_into_view::{Document, ScrollTree};
use scroll_into_view_adapter::{Controller, Easing, ScrollIntoViewOptions};

fn main() {
    // An adapter would:
    // - call scroll_into_view when the app asks for it
    // - call tick(tree, now_ms) from its frame loop while is_animating()
    // - call on_scroll(container) when the user scrolls by hand
    let mut doc = Document::new(720.0);
    let page = doc.append_root(720.0);
    let list = doc.append_child(page, 0.0, 240.0);
    let rows: Vec<_> = (0..200)
        .map(|i| doc.append_child(list, i as f64 * 20.0, 20.0))
        .collect();

    let mut c = Controller::new();
    let plan = c.scroll_into_view(
        &mut doc,
        &[rows[120], rows[122]],
        ScrollIntoViewOptions::new()
            .with_duration(240)
            .with_easing(Easing::EaseOutExpo)
            .on_complete(|container| println!("complete: {container:?}")),
        0,
    );
    println!("plan: {plan:?}");

    let mut now_ms = 0u64;
    while c.tick(&mut doc, now_ms) {
        if now_ms % 80 == 0 {
            println!("t={now_ms} scroll_top={}", doc.scroll_top(&list));
        }
        now_ms += 16;
    }

    println!("done: scroll_top={}", doc.scroll_top(&list));
}
