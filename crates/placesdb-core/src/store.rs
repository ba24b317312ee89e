// crates/placesdb-core/src/store.rs
use crate::model::PlaceRecord;
use crate::text::fold_key;

/// The sorted, immutable record array every trie range points into.
///
/// Sorted by folded name, then folded state, so records sharing a name
/// (and within that, a name + state pair) sit next to each other.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<PlaceRecord>,
    /// Folded names, parallel to `records`.
    keys: Vec<String>,
}

impl RecordStore {
    /// Sorts `records` into index order. Records whose folded name is empty
    /// are skipped; the trie has nowhere to put them.
    pub fn from_records(records: Vec<PlaceRecord>) -> Self {
        let mut keyed: Vec<(String, String, PlaceRecord)> = records
            .into_iter()
            .map(|r| (fold_key(r.name()), r.state().to_ascii_lowercase(), r))
            .filter(|(key, _, _)| !key.is_empty())
            .collect();
        // Stable: duplicates keep their input order.
        keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

        let (keys, records) = keyed.into_iter().map(|(key, _, r)| (key, r)).unzip();
        Self { records, keys }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[PlaceRecord] {
        &self.records
    }

    pub fn get(&self, idx: usize) -> Option<&PlaceRecord> {
        self.records.get(idx)
    }

    /// Folded name bytes of the record at `idx`.
    pub(crate) fn key(&self, idx: usize) -> &[u8] {
        self.keys[idx].as_bytes()
    }
}
