//! Basic usage example for placesdb-rs
//!
//! This example demonstrates how to:
//! - Build an index from place records
//! - Resolve exact names, prefixes, and same-named places
//! - Turn results into serializable views

use placesdb_core::api::LookupView;
use placesdb_core::{Location, PlaceRecord, PlacesIndex, Result};

fn main() -> Result<()> {
    println!("=== placesdb-rs Basic Lookup Example ===\n");

    let index = PlacesIndex::from_records(vec![
        PlaceRecord::new("Springfield", "IL", Location::new(39.781721, -89.650148)),
        PlaceRecord::new("Springfield", "MO", Location::new(37.196304, -93.286312)),
        PlaceRecord::new("Springdale", "AR", Location::new(36.187301, -94.128804)),
        PlaceRecord::new("Seattle", "WA", Location::new(47.620499, -122.350876)),
    ]);
    println!("Indexed {} places\n", index.size());

    for (name, state) in [
        ("seattle", None),
        ("sea", None),
        ("spring", None),
        ("springfield", None),
        ("springfield", Some("MO")),
        ("boston", None),
    ] {
        let r = index.resolve(name, state);
        println!(
            "{name:>12} {:<4} -> {} match(es), ambiguous: {}",
            state.unwrap_or("-"),
            r.len(),
            r.is_ambiguous
        );
        for p in r.matches {
            println!("{:>20}{}, {}", "", p.name(), p.state());
        }
    }
    println!();

    let view = LookupView::from(index.resolve("spring", None));
    println!("As JSON:\n{}", view.to_json()?);

    Ok(())
}
