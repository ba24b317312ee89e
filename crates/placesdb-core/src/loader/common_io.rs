// crates/placesdb-core/src/loader/common_io.rs
use crate::error::{PlacesError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a places file for line reading.
///
/// With the `compact` feature, paths ending in `.gz` are decoded on the fly.
pub fn open_stream(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| {
        PlacesError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    #[cfg(feature = "compact")]
    if is_gzip(path) {
        return Ok(Box::new(BufReader::new(GzDecoder::new(file))));
    }

    Ok(Box::new(BufReader::new(file)))
}

#[cfg_attr(not(feature = "compact"), allow(dead_code))]
fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
