//! Error handling example for placesdb-rs
//!
//! Loading is fail-fast; lookups never fail.

use placesdb_core::{LoadOptions, PlacesError, PlacesIndex, Result};

fn main() -> Result<()> {
    println!("=== placesdb-rs Error Handling Example ===\n");

    // Example 1: Missing dataset
    println!("--- Example 1: Loading a file that does not exist ---");
    match PlacesIndex::load_from_path("/no/such/places2k.txt", LoadOptions::default()) {
        Ok(index) => println!("✓ Loaded {} places", index.size()),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 2: A malformed line aborts the whole build
    println!("--- Example 2: Malformed input ---");
    let text = "IL       Springfield city   (truncated)\n";
    match PlacesIndex::from_reader(text.as_bytes(), LoadOptions::default()) {
        Err(PlacesError::InvalidLine { line, reason }) => println!("✗ line {line}: {reason}"),
        Err(e) => return Err(e),
        Ok(_) => println!("unexpected success"),
    }
    println!();

    // Example 3: Lookups on an empty index just come back empty
    println!("--- Example 3: Querying an empty index ---");
    let index = PlacesIndex::from_records(Vec::new());
    let r = index.resolve("Springfield", Some("IL"));
    println!("  matches: {}, ambiguous: {}", r.len(), r.is_ambiguous);

    Ok(())
}
