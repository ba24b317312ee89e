//! placesdb — Command-line interface for placesdb-core
//!
//! Loads the fixed-width places file into a prefix index and answers
//! lookups from the terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ placesdb stats
//!
//! - Look up a place (prefixes work; ambiguous hits list every candidate)
//!   $ placesdb lookup springfield
//!   $ placesdb lookup springfield --state MO
//!   $ placesdb --json lookup "san lu"
//!
//! - Nearest place to a coordinate
//!   $ placesdb near 47.6 -122.3
//!
//! Data source
//! -----------
//!
//! By default the CLI reads `data/places2k.txt` next to the `placesdb-core`
//! crate. Use `--input <path>` or `PLACESDB_INPUT` to point elsewhere.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use placesdb_core::api::{to_json, LookupView, PlaceView};
use placesdb_core::{LoadOptions, Location, PlacesIndex};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let input_path = args.input.unwrap_or_else(|| {
        PlacesIndex::default_data_dir().join(PlacesIndex::default_dataset_filename())
    });
    let options = LoadOptions {
        capacity_hint: args.capacity_hint,
    };
    tracing::debug!(path = %input_path.display(), ?options, "opening places file");
    let index = PlacesIndex::load_from_path(&input_path, options)?;

    match args.command {
        Commands::Stats => {
            let stats = index.stats();
            if args.json {
                println!("{}", to_json(&stats)?);
            } else {
                println!("Index statistics:");
                println!("  Places: {}", stats.places);
                println!("  Skipped lines: {}", stats.dropped);
                println!("  Trie nodes: {}", stats.nodes);
            }
        }

        Commands::Lookup { name, state } => {
            let view = LookupView::from(index.resolve(&name, state.as_deref()));
            if args.json {
                println!("{}", view.to_json()?);
            } else if view.places.is_empty() {
                println!("No places found matching: {name}");
            } else {
                if view.ambiguous {
                    println!("Ambiguous: {} candidates", view.places.len());
                }
                for p in &view.places {
                    print_place(p);
                }
            }
        }

        Commands::Near { lat, long } => match index.nearest(&Location::new(lat, long)) {
            Some(p) => {
                let view = PlaceView::from(p);
                if args.json {
                    println!("{}", to_json(&view)?);
                } else {
                    print_place(&view);
                }
            }
            None => eprintln!("Index is empty"),
        },
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_place(p: &PlaceView) {
    println!("{}, {} ({:.6}, {:.6})", p.name, p.state, p.lat, p.long);
}
