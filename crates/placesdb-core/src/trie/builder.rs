// crates/placesdb-core/src/trie/builder.rs
use super::{RecordStore, TrieNode};

/// Builds the tree under `root` from the whole (sorted) store.
pub(super) fn build(store: &RecordStore) -> TrieNode {
    let mut root = TrieNode::new(0);
    construct(store, 0..store.len(), 0, &mut root);
    root
}

/// Splits `range` into runs sharing the same byte at `depth`.
///
/// A run whose names end at `depth` becomes the node's match range; every
/// other run becomes a child, recursively built one byte deeper. Runs come
/// out in sorted order, so children are appended already ascending.
fn construct(
    store: &RecordStore,
    range: std::ops::Range<usize>,
    depth: usize,
    node: &mut TrieNode,
) {
    let mut idx = range.start;
    while idx < range.end {
        let run_end = end_of_run(store, idx, range.end, depth);

        match store.key(idx).get(depth) {
            None => node.match_range = Some(idx as u32..run_end as u32),
            Some(&label) => {
                let mut child = TrieNode::new(label);
                construct(store, idx..run_end, depth + 1, &mut child);
                node.children.push(child);
            }
        }

        idx = run_end;
    }
}

/// First index in `from..to` whose byte at `depth` differs from `from`'s.
fn end_of_run(store: &RecordStore, from: usize, to: usize, depth: usize) -> usize {
    let first = store.key(from).get(depth);
    (from + 1..to)
        .find(|&i| store.key(i).get(depth) != first)
        .unwrap_or(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, PlaceRecord};

    fn store(names: &[&str]) -> RecordStore {
        RecordStore::from_records(
            names
                .iter()
                .map(|n| PlaceRecord::new(*n, "XX", Location::new(0.0, 0.0)))
                .collect(),
        )
    }

    #[test]
    fn empty_store_builds_bare_root() {
        let root = build(&store(&[]));
        assert!(root.children.is_empty());
        assert!(root.match_range.is_none());
    }

    #[test]
    fn terminator_sets_range_instead_of_child() {
        let root = build(&store(&["ab", "ab", "abc"]));
        let a = &root.children[0];
        let b = &a.children[0];
        assert_eq!(b.label, b'b');
        assert_eq!(b.match_range, Some(0..2));
        assert_eq!(b.children.len(), 1);
        assert_eq!(b.children[0].match_range, Some(2..3));
    }

    #[test]
    fn children_come_out_ascending() {
        let root = build(&store(&["delta", "alpha", "Charlie", "bravo"]));
        let labels: Vec<u8> = root.children.iter().map(|c| c.label).collect();
        assert_eq!(labels, b"abcd".to_vec());
    }
}
