use std::fmt;

/// Mean meters per degree of latitude. Plenty accurate at city scale.
const METERS_PER_DEGREE: f64 = 111_320.0;

/// A point on the globe in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// The visible map region: a center plus a span in meters per axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    pub center: Coordinate,
    pub latitudinal_meters: f64,
    pub longitudinal_meters: f64,
}

impl Region {
    /// A square region of `meters` per axis around `center`.
    pub fn around(center: Coordinate, meters: f64) -> Self {
        Self {
            center,
            latitudinal_meters: meters,
            longitudinal_meters: meters,
        }
    }

    /// The span in degrees, `(latitude delta, longitude delta)`.
    ///
    /// Longitude circles shrink towards the poles, so the longitudinal delta
    /// grows with the cosine of the center latitude.
    pub fn degree_span(&self) -> (f64, f64) {
        let latitude_delta = self.latitudinal_meters / METERS_PER_DEGREE;
        let longitude_delta = self.longitudinal_meters
            / (METERS_PER_DEGREE * self.center.latitude.to_radians().cos());
        (latitude_delta, longitude_delta)
    }
}

#[test]
fn degree_span_at_seoul_latitudes() {
    let region = Region::around(Coordinate::new(37.517829, 126.886270), 400.0);
    let (latitude_delta, longitude_delta) = region.degree_span();

    assert!((latitude_delta - 0.003593).abs() < 1e-5);
    // A degree of longitude is shorter than a degree of latitude up here.
    assert!(longitude_delta > latitude_delta);
    assert!((longitude_delta - 0.004530).abs() < 1e-5);
}

#[test]
fn degree_span_is_symmetric_at_the_equator() {
    let region = Region::around(Coordinate::new(0.0, 0.0), 400.0);
    let (latitude_delta, longitude_delta) = region.degree_span();

    assert!((latitude_delta - longitude_delta).abs() < 1e-12);
}
