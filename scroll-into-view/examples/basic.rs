use scroll_into_view::{
    Document, ScrollTree, common_ancestor, is_out_of_view, plan_scroll_into_view,
    scroll_into_view,
};

fn main() {
    // A 300px tall list at y=80 with forty 24px rows.
    let mut doc = Document::new(720.0);
    let page = doc.append_root(720.0);
    let list = doc.append_child(page, 80.0, 300.0);
    let rows: Vec<_> = (0..40)
        .map(|i| doc.append_child(list, i as f64 * 24.0, 24.0))
        .collect();

    println!(
        "common ancestor of rows 3 and 30: {:?}",
        common_ancestor(&doc, &[rows[3], rows[30]])
    );

    for &row in &[rows[2], rows[20], rows[5]] {
        let plan = plan_scroll_into_view(&doc, &[row]);
        println!(
            "row {:?}: out_of_view={} plan={plan:?}",
            row,
            is_out_of_view(&doc, &[row], false)
        );
        scroll_into_view(&mut doc, &[row]);
        println!("  scroll_top -> {}", doc.scroll_top(&list));
    }
}
