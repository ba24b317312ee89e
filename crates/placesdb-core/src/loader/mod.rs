// crates/placesdb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Turns the fixed-width places file into [`PlaceRecord`]s.
//!
//! Each line is exactly 164 bytes:
//!
//! | bytes      | field                         |
//! |------------|-------------------------------|
//! | `0..2`     | state code                    |
//! | `9..73`    | name + administrative suffix  |
//! | `143..153` | latitude                      |
//! | `153..164` | longitude                     |
//!
//! The last word of the name ("city", "town", "CDP", ...) is dropped.
//! Census-designated places are skipped entirely. Any malformed line aborts
//! the whole load.

use crate::error::{PlacesError, Result};
use crate::model::{Location, PlaceRecord};
use std::io::BufRead;
use std::ops::Range;
use tracing::{debug, info};

pub mod common_io;

pub use common_io::open_stream;

pub const LINE_LEN: usize = 164;

const STATE: Range<usize> = 0..2;
const NAME: Range<usize> = 9..73;
const LAT: Range<usize> = 143..153;
const LONG: Range<usize> = 153..164;

/// Suffix marking a census-designated place.
pub const CDP_MARKER: &str = "CDP";

/// Knobs for reading a places file.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Expected number of records; pre-sizes the record vector.
    pub capacity_hint: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            capacity_hint: 25_000,
        }
    }
}

/// Output of [`read_places`]: the kept records plus how many lines were skipped.
#[derive(Debug, Default)]
pub struct Ingested {
    pub records: Vec<PlaceRecord>,
    pub dropped: usize,
}

/// Reads every line of `reader`, failing on the first malformed one.
pub fn read_places<R: BufRead>(mut reader: R, options: LoadOptions) -> Result<Ingested> {
    let mut out = Ingested::default();
    out.records
        .try_reserve(options.capacity_hint)
        .map_err(|_| PlacesError::Capacity {
            hint: options.capacity_hint,
        })?;

    let mut buf = Vec::with_capacity(LINE_LEN + 2);
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        match parse_line(&buf, line_no)? {
            Some(record) => out.records.push(record),
            None => out.dropped += 1,
        }
    }
    out.records.shrink_to_fit();

    info!(
        lines = line_no,
        kept = out.records.len(),
        dropped = out.dropped,
        "read places file"
    );
    Ok(out)
}

/// Parses one raw line (line terminator optional).
///
/// Returns `Ok(None)` for lines that are valid but not indexed: census
/// designated places and names that are empty once the suffix is removed.
pub fn parse_line(raw: &[u8], line_no: usize) -> Result<Option<PlaceRecord>> {
    let line = strip_terminator(raw);
    if line.len() != LINE_LEN {
        return Err(PlacesError::InvalidLine {
            line: line_no,
            reason: format!("expected {LINE_LEN} bytes, found {}", line.len()),
        });
    }

    let raw_name = String::from_utf8_lossy(&line[NAME]);
    let (name, suffix) = split_last_word(&raw_name);
    if suffix == CDP_MARKER || name.is_empty() {
        debug!(line = line_no, name = %raw_name.trim_end(), "skipping place");
        return Ok(None);
    }

    let state = String::from_utf8_lossy(&line[STATE]).trim().to_string();
    let lat = parse_coord(&line[LAT], line_no)?;
    let long = parse_coord(&line[LONG], line_no)?;

    Ok(Some(PlaceRecord::new(name, state, Location::new(lat, long))))
}

fn strip_terminator(raw: &[u8]) -> &[u8] {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Splits off the last whitespace-separated word: `"Seattle city"` ->
/// `("Seattle", "city")`. A single word leaves an empty name.
fn split_last_word(s: &str) -> (&str, &str) {
    let s = s.trim_end();
    match s.rfind(char::is_whitespace) {
        Some(idx) => (s[..idx].trim_end(), s[idx..].trim_start()),
        None => ("", s),
    }
}

fn parse_coord(bytes: &[u8], line_no: usize) -> Result<f64> {
    let text = String::from_utf8_lossy(bytes);
    text.trim()
        .parse()
        .map_err(|_| PlacesError::InvalidCoordinate {
            line: line_no,
            value: text.trim().to_string(),
        })
}
