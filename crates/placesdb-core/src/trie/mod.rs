// crates/placesdb-core/src/trie/mod.rs

//! # Places Trie
//!
//! A character tree over the folded names of a [`RecordStore`].
//!
//! Nodes never copy records. Each node that ends a name stores a
//! `[begin, end)` range into the store, and because the store is sorted,
//! every subtree covers one contiguous slice of it. Prefix lookups are
//! therefore pure index arithmetic.

mod builder;
mod index;
mod node;

pub use index::{PlacesTrie, TrieQueryResult};
pub(crate) use node::TrieNode;

use crate::store::RecordStore;
