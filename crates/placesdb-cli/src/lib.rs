//! placesdb-cli
//! ============
//!
//! Command-line interface for the `placesdb-core` place index.
//!
//! This crate primarily provides a binary (`placesdb`). The library target
//! only carries this overview so docs.rs renders a page for the crate.
//!
//! Quick start
//! -----------
//!
//! ```text
//! placesdb --input places2k.txt stats
//! placesdb lookup springfield --state MO
//! placesdb --json lookup "spring"
//! placesdb near 47.6 -122.3
//! ```
//!
//! For programmatic access use the `placesdb-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
