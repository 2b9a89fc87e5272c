use serde::{Deserialize, Serialize};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A position on the globe, serialized as `[longitude, latitude]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Great-circle distance in kilometres.
    #[must_use]
    pub fn haversine_km(self, other: Self) -> f64 {
        let (lat1, lat2) = (self.latitude.to_radians(), other.latitude.to_radians());
        let d_lat = lat2 - lat1;
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self { longitude, latitude }
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.longitude, point.latitude]
    }
}

const CITIES: &[(&str, GeoPoint)] = &[
    ("new york", GeoPoint::new(-74.0060, 40.7128)),
    ("los angeles", GeoPoint::new(-118.2437, 34.0522)),
    ("chicago", GeoPoint::new(-87.6298, 41.8781)),
    ("boston", GeoPoint::new(-71.0589, 42.3601)),
    ("san francisco", GeoPoint::new(-122.4194, 37.7749)),
    ("seattle", GeoPoint::new(-122.3321, 47.6062)),
    ("denver", GeoPoint::new(-104.9903, 39.7392)),
    ("houston", GeoPoint::new(-95.3698, 29.7604)),
    ("phoenix", GeoPoint::new(-112.0742, 33.4484)),
    ("miami", GeoPoint::new(-80.1918, 25.7617)),
    ("dallas", GeoPoint::new(-96.7969, 32.7767)),
    ("philadelphia", GeoPoint::new(-75.1652, 39.9526)),
    ("atlanta", GeoPoint::new(-84.3880, 33.7490)),
    ("detroit", GeoPoint::new(-83.0458, 42.3314)),
    ("portland", GeoPoint::new(-122.6765, 45.5152)),
    ("london", GeoPoint::new(-0.1278, 51.5074)),
    ("paris", GeoPoint::new(2.3522, 48.8566)),
    ("tokyo", GeoPoint::new(139.6917, 35.6895)),
    ("dubai", GeoPoint::new(55.2708, 25.2048)),
    ("singapore", GeoPoint::new(103.8198, 1.3521)),
    ("sydney", GeoPoint::new(151.2093, -33.8688)),
    ("toronto", GeoPoint::new(-79.3957, 43.6629)),
    ("mumbai", GeoPoint::new(72.8479, 19.0760)),
    ("bangalore", GeoPoint::new(77.5946, 12.9716)),
    ("delhi", GeoPoint::new(77.2090, 28.6139)),
    ("hyderabad", GeoPoint::new(78.4744, 17.3850)),
    ("kolkata", GeoPoint::new(88.3639, 22.5726)),
    ("chennai", GeoPoint::new(80.2707, 13.0827)),
    ("pune", GeoPoint::new(73.8567, 18.5204)),
    ("bangkok", GeoPoint::new(100.5018, 13.7563)),
    ("hong kong", GeoPoint::new(114.1733, 22.3193)),
];

/// Looks a city up in the built-in table.
///
/// The trimmed, lower-cased name is matched exactly first, then by substring in either
/// direction (`"Greater London"` finds `london`). Unknown or blank names give `None`.
#[must_use]
pub fn city_coordinates(name: &str) -> Option<GeoPoint> {
    let key = name.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }

    CITIES
        .iter()
        .find(|(city, _)| *city == key)
        .or_else(|| CITIES.iter().find(|(city, _)| key.contains(city) || city.contains(&*key)))
        .map(|(_, point)| *point)
}
