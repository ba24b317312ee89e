// crates/placesdb-core/src/resolve.rs
use crate::common::IndexStats;
use crate::error::Result;
use crate::loader::{self, LoadOptions};
use crate::model::{Location, PlaceRecord};
use crate::store::RecordStore;
use crate::text::same_state;
use crate::trie::{PlacesTrie, TrieQueryResult};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// An owned, immutable place index: build once, then query from any number
/// of threads.
#[derive(Clone, Debug)]
pub struct PlacesIndex {
    trie: PlacesTrie,
    dropped: usize,
}

impl PlacesIndex {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "places2k.txt"
    }

    /// Indexes already-parsed records.
    pub fn from_records(records: Vec<PlaceRecord>) -> Self {
        Self::build(records, 0)
    }

    /// Parses a fixed-width places stream and indexes it.
    ///
    /// Fails on the first malformed line; nothing is indexed in that case.
    pub fn from_reader<R: BufRead>(reader: R, options: LoadOptions) -> Result<Self> {
        let ingested = loader::read_places(reader, options)?;
        Ok(Self::build(ingested.records, ingested.dropped))
    }

    /// **Standard Loader:** reads and indexes a places file (`.gz` allowed
    /// with the `compact` feature).
    pub fn load_from_path(path: impl AsRef<Path>, options: LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading places");
        let reader = loader::open_stream(path)?;
        Self::from_reader(reader, options)
    }

    fn build(records: Vec<PlaceRecord>, dropped: usize) -> Self {
        let trie = PlacesTrie::build(RecordStore::from_records(records));
        let index = Self { trie, dropped };
        info!(
            places = index.size(),
            dropped,
            nodes = index.trie.node_count(),
            "built places index"
        );
        index
    }

    pub fn size(&self) -> usize {
        self.trie.size()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            places: self.size(),
            dropped: self.dropped,
            nodes: self.trie.node_count(),
        }
    }

    /// All records, in index order.
    pub fn records(&self) -> &[PlaceRecord] {
        self.trie.records()
    }

    pub fn trie(&self) -> &PlacesTrie {
        &self.trie
    }

    /// Raw trie lookup by name, without the state rule.
    pub fn query(&self, name: &str) -> TrieQueryResult<'_> {
        self.trie.query(name)
    }

    /// Looks up a place by name and optional state.
    ///
    /// - A unique hit, or a prefix spanning several names, is returned as is.
    /// - Without a state, one name found in several states is ambiguous.
    /// - With a state, the hits are narrowed to that state; the ambiguity
    ///   flag is left as the trie computed it.
    pub fn resolve(&self, name: &str, state: Option<&str>) -> TrieQueryResult<'_> {
        let mut result = self.trie.query(name);
        let state = state.map(str::trim).filter(|s| !s.is_empty());

        if result.len() != 1 && !result.is_ambiguous {
            match state {
                Some(state) => result.matches = narrow_to_state(result.matches, state),
                None if result.len() > 1 => result.is_ambiguous = true,
                None => {}
            }
        }

        debug!(
            name,
            state = state.unwrap_or(""),
            matches = result.len(),
            ambiguous = result.is_ambiguous,
            "resolved place"
        );
        result
    }

    /// The indexed place closest to `location`, if any.
    pub fn nearest(&self, location: &Location) -> Option<&PlaceRecord> {
        self.records().iter().min_by(|a, b| {
            let da = location.distance_miles(&a.location());
            let db = location.distance_miles(&b.location());
            da.total_cmp(&db)
        })
    }
}

/// Records of one name are sorted by state, so the hits form one run.
fn narrow_to_state<'a>(matches: &'a [PlaceRecord], state: &str) -> &'a [PlaceRecord] {
    let start = matches
        .iter()
        .position(|p| same_state(p.state(), state))
        .unwrap_or(matches.len());
    let len = matches[start..]
        .iter()
        .take_while(|p| same_state(p.state(), state))
        .count();
    &matches[start..start + len]
}
