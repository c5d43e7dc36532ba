use alloc::vec::Vec;

use crate::tree::{ScrollTree, ancestors};

/// Finds the nearest ancestor shared by every element in `elements`.
///
/// Each ancestor chain is cut down to the length of the shortest one, keeping the root-side
/// entries so that equal indexes mean equal depth. The chains are then scanned from the deepest
/// entry towards the root and the first entry on which all of them agree is returned.
///
/// The elements themselves are never candidates: for a single element this returns its parent,
/// and for an element and its own child it returns the element's parent.
///
/// Returns `None` for an empty set or when the elements share no ancestor.
pub fn common_ancestor<T: ScrollTree + ?Sized>(tree: &T, elements: &[T::Node]) -> Option<T::Node> {
    if elements.is_empty() {
        return None;
    }

    let chains: Vec<Vec<T::Node>> = elements.iter().map(|el| ancestors(tree, el)).collect();
    let min_len = chains.iter().map(Vec::len).min().unwrap_or(0);

    let aligned: Vec<&[T::Node]> = chains
        .iter()
        .map(|chain| &chain[chain.len() - min_len..])
        .collect();

    let (first, rest) = aligned.split_first()?;
    for (i, candidate) in first.iter().enumerate() {
        if rest.iter().all(|chain| chain[i] == *candidate) {
            sitrace!(depth_from_root = min_len - i, "common_ancestor: found");
            return Some(candidate.clone());
        }
    }

    sitrace!(elements = elements.len(), "common_ancestor: none");
    None
}
