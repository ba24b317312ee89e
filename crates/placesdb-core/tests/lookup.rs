use placesdb_core::{LoadOptions, Location, PlaceRecord, PlacesError, PlacesIndex};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::io::Write;

fn line(state: &str, name: &str, lat: f64, long: f64) -> String {
    // Pad by bytes; the layout is byte-oriented.
    let mut out = format!("{state:<2}0000000{name}{}", " ".repeat(64 - name.len()));
    out.push_str(&" ".repeat(143 - out.len()));
    out.push_str(&format!("{lat:>10.6}{long:>11.6}"));
    out
}

fn sample_file() -> String {
    [
        line("IL", "Springfield city", 39.781721, -89.650148),
        line("MO", "Springfield city", 37.196304, -93.286312),
        line("AR", "Springdale city", 36.187301, -94.128804),
        line("VA", "Springfield CDP", 38.781277, -77.179275),
        line("WA", "Seattle city", 47.620499, -122.350876),
        line("CO", "Cañon City city", 38.443159, -105.226283),
    ]
    .join("\n")
}

#[test]
fn loads_from_disk_and_skips_cdps() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(sample_file().as_bytes()).unwrap();

    let index = PlacesIndex::load_from_path(tmp.path(), LoadOptions::default()).unwrap();
    assert_eq!(index.size(), 5);
    assert_eq!(index.stats().dropped, 1);

    // The Virginia CDP never made it in.
    let r = index.resolve("Springfield", Some("VA"));
    assert!(r.is_empty());
}

#[cfg(feature = "compact")]
#[test]
fn loads_gzipped_files() {
    use flate2::{write::GzEncoder, Compression};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("places2k.txt.gz");
    let mut enc = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
    enc.write_all(sample_file().as_bytes()).unwrap();
    enc.finish().unwrap();

    let index = PlacesIndex::load_from_path(&path, LoadOptions::default()).unwrap();
    assert_eq!(index.size(), 5);
}

#[test]
fn example_dataset_behaves_as_documented() {
    let index = PlacesIndex::from_reader(sample_file().as_bytes(), LoadOptions::default()).unwrap();

    let r = index.resolve("spring", None);
    assert!(r.is_ambiguous);
    assert_eq!(r.len(), 3);

    let r = index.resolve("springfield", None);
    assert!(r.is_ambiguous);
    assert_eq!(r.len(), 2);

    let r = index.resolve("springfield", Some("MO"));
    assert_eq!(r.len(), 1);
    assert_eq!(r.matches[0].state(), "MO");

    let upper = index.resolve("SPRINGFIELD", Some("IL"));
    let lower = index.resolve("springfield", Some("il"));
    assert_eq!(upper.matches, lower.matches);
    assert_eq!(upper.is_ambiguous, lower.is_ambiguous);

    assert_eq!(index.resolve("canon city", Some("co")).len(), 1);
}

#[test]
fn malformed_file_builds_nothing() {
    let text = format!("{}\n{}\n", sample_file(), "XX too short");
    let err = PlacesIndex::from_reader(text.as_bytes(), LoadOptions::default()).unwrap_err();
    assert!(matches!(err, PlacesError::InvalidLine { line: 7, .. }));
}

#[test]
fn absurd_capacity_hint_fails_the_build() {
    let options = LoadOptions {
        capacity_hint: usize::MAX,
    };
    let err = PlacesIndex::from_reader(sample_file().as_bytes(), options).unwrap_err();
    assert!(matches!(err, PlacesError::Capacity { .. }));
}

#[test]
fn missing_file_is_reported() {
    let err =
        PlacesIndex::load_from_path("/no/such/places.txt", LoadOptions::default()).unwrap_err();
    assert!(matches!(err, PlacesError::NotFound(_)));
}

// -----------------------------------------------------------------------------
// Properties
// -----------------------------------------------------------------------------

const STATES: [&str; 4] = ["AK", "IL", "MO", "TX"];

fn places() -> impl Strategy<Value = Vec<(String, &'static str)>> {
    prop::collection::btree_set(("[a-cA-C]{1,5}", 0..STATES.len()), 0..40).prop_map(|set| {
        // One record per (folded name, state).
        let mut seen = BTreeSet::new();
        set.into_iter()
            .filter(|(n, s)| seen.insert((n.to_lowercase(), *s)))
            .map(|(n, s)| (n, STATES[s]))
            .collect()
    })
}

fn build(places: &[(String, &'static str)]) -> PlacesIndex {
    PlacesIndex::from_records(
        places
            .iter()
            .map(|(n, s)| PlaceRecord::new(n.clone(), *s, Location::new(0.0, 0.0)))
            .collect(),
    )
}

fn common_prefix<'a>(names: impl Iterator<Item = &'a String>) -> String {
    names
        .map(String::as_str)
        .reduce(|a, b| {
            let n = a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count();
            &a[..n]
        })
        .unwrap_or("")
        .to_string()
}

proptest! {
    #[test]
    fn every_record_resolves_to_itself(sample in places()) {
        let index = build(&sample);
        prop_assert!(index.trie().check_invariants().is_ok());

        for (name, state) in &sample {
            let r = index.resolve(name, Some(*state));
            prop_assert!(r.is_unique(), "{name}/{state}");
            prop_assert_eq!(r.matches[0].state(), *state);
            prop_assert!(r.matches[0].name().eq_ignore_ascii_case(name));
        }
    }

    #[test]
    fn branching_prefixes_cover_every_completion(sample in places()) {
        let index = build(&sample);
        let names: BTreeSet<String> = sample.iter().map(|(n, _)| n.to_lowercase()).collect();

        for name in &names {
            for end in 0..name.len() {
                let prefix = &name[..end];
                let under: BTreeSet<&String> =
                    names.iter().filter(|n| n.starts_with(prefix)).collect();
                let lcp = common_prefix(under.iter().copied());
                if under.len() < 2 || names.contains(&lcp) {
                    continue;
                }

                let expected = sample
                    .iter()
                    .filter(|(n, _)| n.to_lowercase().starts_with(prefix))
                    .count();
                let r = index.resolve(prefix, None);
                prop_assert!(r.is_ambiguous, "{prefix}");
                prop_assert_eq!(r.len(), expected);
            }
        }
    }

    #[test]
    fn absent_names_are_empty(sample in places(), probe in "[a-c]{0,3}z[a-c]{0,2}") {
        let index = build(&sample);
        let r = index.resolve(&probe, None);
        prop_assert!(r.is_empty());
        prop_assert!(!r.is_ambiguous);
    }

    #[test]
    fn lookups_ignore_case(sample in places()) {
        let index = build(&sample);
        for (name, state) in &sample {
            let upper =
                index.resolve(&name.to_uppercase(), Some(state.to_lowercase().as_str()));
            let lower = index.resolve(&name.to_lowercase(), Some(*state));
            prop_assert_eq!(upper.matches, lower.matches);
            prop_assert_eq!(upper.is_ambiguous, lower.is_ambiguous);
        }
    }

    #[test]
    fn size_excludes_cdp_lines(kept in 0usize..20, cdps in 0usize..20) {
        let mut lines = Vec::new();
        for i in 0..kept {
            lines.push(line("IL", &format!("Town{i} village"), 40.0, -89.0));
        }
        for i in 0..cdps {
            lines.push(line("IL", &format!("Place{i} CDP"), 40.0, -89.0));
        }
        let text = lines.join("\n");

        let index = PlacesIndex::from_reader(text.as_bytes(), LoadOptions::default()).unwrap();
        prop_assert_eq!(index.size(), kept);
        prop_assert_eq!(index.stats().dropped, cdps);
    }
}
