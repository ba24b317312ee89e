// crates/placesdb-core/src/lib.rs

//! # placesdb-core
//!
//! An in-memory prefix index over US place records (name, state,
//! coordinates). Build it once from the fixed-width places file, then look
//! places up by name and optional state:
//!
//! ```rust
//! use placesdb_core::{Location, PlaceRecord, PlacesIndex};
//!
//! let index = PlacesIndex::from_records(vec![
//!     PlaceRecord::new("Springfield", "IL", Location::new(39.78, -89.65)),
//!     PlaceRecord::new("Springfield", "MO", Location::new(37.21, -93.29)),
//! ]);
//!
//! assert!(index.resolve("springfield", None).is_ambiguous);
//! assert!(index.resolve("springfield", Some("MO")).is_unique());
//! ```

pub mod api; // Serializable views for remote callers
pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod resolve;
pub mod store;
pub mod text;
pub mod trie;

// Re-exports
pub use crate::common::IndexStats;
pub use crate::error::{PlacesError, Result};
pub use crate::loader::LoadOptions;
pub use crate::model::{Location, PlaceRecord};
pub use crate::resolve::PlacesIndex;
pub use crate::store::RecordStore;
pub use crate::trie::{PlacesTrie, TrieQueryResult};
