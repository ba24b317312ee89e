// crates/placesdb-core/src/trie/index.rs
use super::{builder, RecordStore, TrieNode};
use crate::error::{PlacesError, Result};
use crate::model::PlaceRecord;
use crate::text::fold_key;
use std::ops::Range;

/// Outcome of a trie lookup: one contiguous slice of the store.
///
/// An empty slice means "not found". `is_ambiguous` is set when the slice
/// spans more than one distinct name.
#[derive(Clone, Copy, Debug)]
pub struct TrieQueryResult<'a> {
    pub matches: &'a [PlaceRecord],
    pub is_ambiguous: bool,
}

impl<'a> TrieQueryResult<'a> {
    pub(crate) fn not_found() -> Self {
        Self {
            matches: &[],
            is_ambiguous: false,
        }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Exactly one record and no ambiguity.
    pub fn is_unique(&self) -> bool {
        self.matches.len() == 1 && !self.is_ambiguous
    }
}

/// Read-only prefix index over an owned [`RecordStore`].
#[derive(Clone, Debug)]
pub struct PlacesTrie {
    store: RecordStore,
    root: TrieNode,
}

impl PlacesTrie {
    pub fn build(store: RecordStore) -> Self {
        let root = builder::build(&store);
        let trie = Self { store, root };
        debug_assert!(trie.check_invariants().is_ok());
        trie
    }

    pub fn size(&self) -> usize {
        self.store.len()
    }

    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    pub fn records(&self) -> &[PlaceRecord] {
        self.store.as_slice()
    }

    /// Looks up `name` (case- and accent-insensitive).
    ///
    /// A full name returns its records. A prefix of exactly one longer name
    /// completes to it. A prefix shared by several names returns all of
    /// their records, flagged ambiguous.
    pub fn query(&self, name: &str) -> TrieQueryResult<'_> {
        let key = fold_key(name);
        let mut node = &self.root;
        for label in key.bytes() {
            match node.child(label) {
                Some(next) => node = next,
                None => return TrieQueryResult::not_found(),
            }
        }
        self.first_completion(node)
    }

    fn first_completion(&self, mut node: &TrieNode) -> TrieQueryResult<'_> {
        loop {
            if let Some(range) = &node.match_range {
                return self.result(range.start as usize..range.end as usize, false);
            }
            match node.children.as_slice() {
                // Unreachable for a tree built by `builder`.
                [] => return TrieQueryResult::not_found(),
                [only] => node = only,
                _ => return self.ambiguous_range(node),
            }
        }
    }

    /// Everything under `node`: from the first range down the leftmost
    /// path to the end of the last leaf down the rightmost path.
    fn ambiguous_range(&self, node: &TrieNode) -> TrieQueryResult<'_> {
        let Some(begin) = leftmost_range(node).map(|r| r.start) else {
            return TrieQueryResult::not_found();
        };
        let Some(end) = rightmost_leaf(node)
            .and_then(|n| n.match_range.as_ref())
            .map(|r| r.end)
        else {
            return TrieQueryResult::not_found();
        };
        self.result(begin as usize..end as usize, true)
    }

    fn result(&self, range: Range<usize>, is_ambiguous: bool) -> TrieQueryResult<'_> {
        TrieQueryResult {
            matches: &self.store.as_slice()[range],
            is_ambiguous,
        }
    }

    /// Verifies the structural invariants lookups rely on: children strictly
    /// ascending by label, every leaf ends a name, and each subtree covers one
    /// contiguous slice of the store, with sibling slices adjacent and ordered.
    pub fn check_invariants(&self) -> Result<()> {
        let span = subtree_span(&self.root, self.store.len())?;
        match span {
            Some(s) if s != (0..self.store.len()) => Err(corrupt(format!(
                "root covers {s:?}, store has {} records",
                self.store.len()
            ))),
            None if !self.store.is_empty() => Err(corrupt("root covers no records".into())),
            _ => Ok(()),
        }
    }
}

fn leftmost_range(node: &TrieNode) -> Option<&Range<u32>> {
    let mut cur = node.children.first()?;
    loop {
        if let Some(range) = &cur.match_range {
            return Some(range);
        }
        cur = cur.children.first()?;
    }
}

fn rightmost_leaf(node: &TrieNode) -> Option<&TrieNode> {
    let mut cur = node.children.last()?;
    while let Some(last) = cur.children.last() {
        cur = last;
    }
    Some(cur)
}

fn corrupt(reason: String) -> PlacesError {
    PlacesError::InvalidIndex(reason)
}

/// Range of store indices under `node`, checking invariants on the way down.
fn subtree_span(node: &TrieNode, len: usize) -> Result<Option<Range<usize>>> {
    if node.children.is_empty() && node.match_range.is_none() && node.label != 0 {
        return Err(corrupt(format!("leaf {:?} ends no name", node.label as char)));
    }

    let mut span: Option<Range<usize>> = None;
    if let Some(r) = &node.match_range {
        let r = r.start as usize..r.end as usize;
        if r.is_empty() || r.end > len {
            return Err(corrupt(format!("bad match range {r:?}")));
        }
        span = Some(r);
    }

    for pair in node.children.windows(2) {
        if pair[0].label >= pair[1].label {
            return Err(corrupt(format!(
                "children out of order: {:?} before {:?}",
                pair[0].label as char, pair[1].label as char
            )));
        }
    }

    for child in &node.children {
        let Some(child_span) = subtree_span(child, len)? else {
            continue;
        };
        span = match span {
            None => Some(child_span),
            Some(s) if s.end == child_span.start => Some(s.start..child_span.end),
            Some(s) => {
                return Err(corrupt(format!(
                    "subtree {:?} at {child_span:?} does not follow {s:?}",
                    child.label as char
                )))
            }
        };
    }
    Ok(span)
}
