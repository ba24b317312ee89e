// crates/placesdb-core/src/trie/node.rs
use std::ops::Range;

/// One level of the trie.
///
/// Children are kept sorted ascending by `label`; the builder emits them in
/// that order and lookups binary-search them.
#[derive(Clone, Debug, Default)]
pub(crate) struct TrieNode {
    /// Lowercase ASCII byte on the edge into this node; `0` for the root.
    pub(crate) label: u8,
    pub(crate) children: Vec<TrieNode>,
    /// Records whose whole folded name ends at this node.
    pub(crate) match_range: Option<Range<u32>>,
}

impl TrieNode {
    pub(crate) fn new(label: u8) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    pub(crate) fn child(&self, label: u8) -> Option<&TrieNode> {
        self.children
            .binary_search_by(|c| c.label.cmp(&label))
            .ok()
            .map(|i| &self.children[i])
    }

    /// Number of nodes in this subtree, including `self`.
    pub(crate) fn count(&self) -> usize {
        1 + self.children.iter().map(TrieNode::count).sum::<usize>()
    }
}
