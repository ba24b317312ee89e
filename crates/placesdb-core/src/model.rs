// crates/placesdb-core/src/model.rs
use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub long: f64,
}

impl Location {
    /// Mean earth radius used by [`Location::distance_miles`].
    pub const EARTH_RADIUS_MILES: f64 = 3958.8;

    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }

    /// Great-circle distance (haversine) in statute miles.
    pub fn distance_miles(&self, other: &Location) -> f64 {
        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let d_lat = lat2 - lat1;
        let d_long = (other.long - self.long).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_long / 2.0).sin().powi(2);
        2.0 * Self::EARTH_RADIUS_MILES * a.sqrt().asin()
    }
}

/// A single populated place: the unit the index stores and returns.
///
/// Records are immutable once built; the index only ever hands out
/// shared references into its sorted store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    name: String,
    state: String,
    location: Location,
}

impl PlaceRecord {
    /// The state code is stored trimmed, so padded codes sort and compare
    /// like their plain form.
    pub fn new(name: impl Into<String>, state: impl Into<String>, location: Location) -> Self {
        let state: String = state.into();
        Self {
            name: name.into(),
            state: state.trim().to_string(),
            location,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Two-letter postal code, e.g. `"IL"`.
    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_code_is_trimmed() {
        let p = PlaceRecord::new("Springfield", " IL ", Location::new(39.78, -89.65));
        assert_eq!(p.state(), "IL");
    }

    #[test]
    fn distance_to_self_is_zero() {
        let seattle = Location::new(47.6062, -122.3321);
        assert!(seattle.distance_miles(&seattle).abs() < 1e-9);
    }

    #[test]
    fn distance_seattle_to_portland() {
        let seattle = Location::new(47.6062, -122.3321);
        let portland = Location::new(45.5152, -122.6784);
        let d = seattle.distance_miles(&portland);
        assert!((140.0..150.0).contains(&d), "got {d}");
    }
}
