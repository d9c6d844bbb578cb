//! Geo primitives — coordinates, great-circle distance, and rendering.
//!
//! Distances are computed with the Haversine formula over a spherical
//! Earth. Inputs are plain degree-valued numbers and are deliberately not
//! range-checked: callers own that contract, and out-of-range degrees
//! yield a mathematically defined but physically meaningless result.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres, as used by the Haversine computation.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create a coordinate pair from decimal degrees.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parse a `"lat,lng"` string into a coordinate pair.
    ///
    /// Both parts are trimmed and parsed as floats. Returns `None` when the
    /// text does not have exactly two comma-separated parts, when either
    /// part fails to parse, or when a part parses to NaN. Values are not
    /// range-checked.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split(',');
        let lat: f64 = parts.next()?.trim().parse().ok()?;
        let lng: f64 = parts.next()?.trim().parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        if lat.is_nan() || lng.is_nan() {
            return None;
        }
        Some(Self { lat, lng })
    }

    /// Haversine great-circle distance to `other`, in kilometres.
    ///
    /// Always ≥ 0 for in-range inputs; 0 (within float epsilon) when the
    /// two points coincide.
    #[must_use]
    pub fn distance_km(self, other: Self) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Render a distance for display: rounded metres under one kilometre,
/// one-decimal kilometres otherwise.
///
/// ```
/// use serbisyo_domain::geo::format_distance;
///
/// assert_eq!(format_distance(0.5), "500 m");
/// assert_eq!(format_distance(2.567), "2.6 km");
/// ```
#[must_use]
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round())
    } else {
        format!("{km:.1} km")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    // Coordinates used widely in the tests: central Manila and a point in
    // Mandaluyong roughly 3.4 km away.
    const MANILA: Coordinates = Coordinates {
        lat: 14.5995,
        lng: 120.9842,
    };
    const MANDALUYONG: Coordinates = Coordinates {
        lat: 14.6042,
        lng: 121.0153,
    };

    #[test]
    fn should_return_zero_distance_for_identical_points() {
        assert!(MANILA.distance_km(MANILA).abs() < EPSILON);
    }

    #[test]
    fn should_match_known_manila_distance() {
        let distance = MANILA.distance_km(MANDALUYONG);
        assert!(
            (distance - 3.4).abs() < 0.2,
            "expected ~3.4 km, got {distance}"
        );
    }

    #[test]
    fn should_be_symmetric() {
        let forward = MANILA.distance_km(MANDALUYONG);
        let back = MANDALUYONG.distance_km(MANILA);
        assert!((forward - back).abs() < EPSILON);
    }

    #[test]
    fn should_not_range_check_degree_inputs() {
        // Out-of-range degrees are the caller's problem; the math still
        // produces a number rather than an error.
        let weird = Coordinates::new(250.0, 400.0);
        let distance = Coordinates::new(0.0, 0.0).distance_km(weird);
        assert!(distance >= 0.0);
    }

    #[test]
    fn should_render_rounded_metres_below_one_kilometre() {
        assert_eq!(format_distance(0.5), "500 m");
        assert_eq!(format_distance(0.25), "250 m");
        assert_eq!(format_distance(0.0351), "35 m");
    }

    #[test]
    fn should_render_one_decimal_kilometres_from_one_kilometre() {
        assert_eq!(format_distance(1.0), "1.0 km");
        assert_eq!(format_distance(2.567), "2.6 km");
    }

    #[test]
    fn should_round_metres_up_to_a_thousand_just_below_one_kilometre() {
        // 0.9996 km is still below the km cutoff, so it renders as metres.
        assert_eq!(format_distance(0.9996), "1000 m");
    }

    #[test]
    fn should_parse_well_formed_coordinates() {
        let parsed = Coordinates::parse("14.5995,120.9842").unwrap();
        assert!((parsed.lat - 14.5995).abs() < EPSILON);
        assert!((parsed.lng - 120.9842).abs() < EPSILON);
    }

    #[test]
    fn should_parse_coordinates_with_surrounding_whitespace() {
        let parsed = Coordinates::parse(" 14.5995 , 120.9842 ").unwrap();
        assert!((parsed.lat - 14.5995).abs() < EPSILON);
    }

    #[test]
    fn should_reject_non_numeric_parts() {
        assert!(Coordinates::parse("not,coords").is_none());
    }

    #[test]
    fn should_reject_wrong_part_count() {
        assert!(Coordinates::parse("1,2,3").is_none());
        assert!(Coordinates::parse("14.5995").is_none());
        assert!(Coordinates::parse("").is_none());
    }

    #[test]
    fn should_reject_nan_parts() {
        assert!(Coordinates::parse("nan,120.9842").is_none());
        assert!(Coordinates::parse("14.5995,NaN").is_none());
    }

    #[test]
    fn should_not_range_check_parsed_values() {
        let parsed = Coordinates::parse("91.0,181.0").unwrap();
        assert!((parsed.lat - 91.0).abs() < EPSILON);
    }

    #[test]
    fn should_display_as_comma_separated_pair() {
        assert_eq!(Coordinates::new(14.5, 121.0).to_string(), "14.5,121");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let json = serde_json::to_string(&MANILA).unwrap();
        let parsed: Coordinates = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, MANILA);
    }
}
