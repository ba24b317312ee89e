// crates/placesdb-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a built index.
///
/// Returned by [`crate::PlacesIndex::stats`]. `places` counts what was
/// indexed; `dropped` counts input lines skipped during ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub places: usize,
    pub dropped: usize,
    pub nodes: usize,
}
