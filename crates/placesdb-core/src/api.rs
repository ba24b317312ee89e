// crates/placesdb-core/src/api.rs

//! Plain, serializable views for callers on the far side of a wire.
//!
//! Nothing here exposes trie internals: a lookup becomes an ordered list of
//! `{name, state, lat, long}` plus an ambiguity flag.

use crate::model::{Location, PlaceRecord};
use crate::resolve::PlacesIndex;
use crate::trie::TrieQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceView {
    pub name: String,
    pub state: String,
    pub lat: f64,
    pub long: f64,
}

impl From<&PlaceRecord> for PlaceView {
    fn from(p: &PlaceRecord) -> Self {
        let loc = p.location();
        Self {
            name: p.name().to_string(),
            state: p.state().to_string(),
            lat: loc.lat,
            long: loc.long,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LookupView {
    pub places: Vec<PlaceView>,
    pub ambiguous: bool,
}

impl From<TrieQueryResult<'_>> for LookupView {
    fn from(r: TrieQueryResult<'_>) -> Self {
        Self {
            places: r.matches.iter().map(PlaceView::from).collect(),
            ambiguous: r.is_ambiguous,
        }
    }
}

#[cfg(feature = "json")]
impl LookupView {
    pub fn to_json(&self) -> crate::Result<String> {
        to_json(self)
    }
}

/// Pretty-printed JSON for any of the views (or [`crate::IndexStats`]).
#[cfg(feature = "json")]
pub fn to_json<T: Serialize>(value: &T) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// A place lookup as it arrives from a remote caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacesRequest {
    Named { name: String, state: String },
    Location(Location),
}

/// The answer sent back for a [`PlacesRequest`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacesResponse {
    Found(PlaceView),
    Ambiguous(Vec<PlaceView>),
    Error(String),
}

#[cfg(feature = "json")]
impl PlacesResponse {
    pub fn to_json(&self) -> crate::Result<String> {
        to_json(self)
    }
}

impl PlacesIndex {
    /// Serves one request. Never fails: misses become [`PlacesResponse::Error`].
    pub fn answer(&self, req: &PlacesRequest) -> PlacesResponse {
        match req {
            PlacesRequest::Named { name, state } => {
                let r = self.resolve(name, Some(state.as_str()));
                match r.matches {
                    [] if state.trim().is_empty() => {
                        PlacesResponse::Error(format!("No place named '{name}' found"))
                    }
                    [] => {
                        PlacesResponse::Error(format!("No place named '{name}' found in {state}"))
                    }
                    [only] if !r.is_ambiguous => PlacesResponse::Found(only.into()),
                    many => PlacesResponse::Ambiguous(many.iter().map(PlaceView::from).collect()),
                }
            }
            PlacesRequest::Location(loc) => match self.nearest(loc) {
                Some(p) => PlacesResponse::Found(p.into()),
                None => PlacesResponse::Error("Index is empty".to_string()),
            },
        }
    }
}
