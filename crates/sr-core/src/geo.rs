//! Geographic coordinate type and the map's projection and distance math.
//!
//! `GeoPoint` uses `f64` latitude/longitude (degrees). Distance and area
//! computations below project onto a local planar approximation rather than
//! using great-circle formulas directly — this matches how the street-map
//! data this engine was built against already reasons about positions, and
//! keeps the per-pair distance and the polygon-area math consistent with one
//! another.

/// A geographic coordinate, degrees latitude/longitude.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Mean Earth radius, metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Equirectangular projection anchored at a fixed reference latitude.
///
/// `x = R * lon * cos(phi_bar)`, `y = R * lat` (both in radians before
/// scaling). A single anchor keeps every projected point in one consistent
/// planar frame, which is what polygon-area and angle computations need —
/// unlike point-to-point distance, which is more accurate when each pair
/// picks its own local latitude (see [`distance_m`]).
#[derive(Copy, Clone, Debug)]
pub struct Projection {
    mean_lat_rad: f64,
}

impl Projection {
    /// Anchor at the mean of the extreme latitudes `(lat_min + lat_max) / 2`,
    /// as is conventional for a bounded map region.
    pub fn from_bounds(lat_min: f64, lat_max: f64) -> Self {
        Projection {
            mean_lat_rad: ((lat_min + lat_max) * 0.5).to_radians(),
        }
    }

    /// Project a geographic point to planar metres `(x, y)`.
    pub fn project(&self, p: GeoPoint) -> (f64, f64) {
        let x = EARTH_RADIUS_M * p.lon.to_radians() * self.mean_lat_rad.cos();
        let y = EARTH_RADIUS_M * p.lat.to_radians();
        (x, y)
    }

    /// Inverse of [`Projection::project`].
    pub fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        let lat = (y / EARTH_RADIUS_M).to_degrees();
        let lon = (x / (EARTH_RADIUS_M * self.mean_lat_rad.cos())).to_degrees();
        GeoPoint::new(lat, lon)
    }
}

/// Straight-line distance in metres between two points.
///
/// Uses an equirectangular projection anchored at the *pair's own* mean
/// latitude rather than a map-wide anchor, so the approximation stays
/// accurate regardless of how far apart the two points are from the map's
/// overall latitude band. This is the distance function used by the router's
/// heuristic and by every length computation in the index.
pub fn distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_avg_rad = ((a.lat + b.lat) * 0.5).to_radians();
    let x1 = EARTH_RADIUS_M * a.lon.to_radians() * lat_avg_rad.cos();
    let y1 = EARTH_RADIUS_M * a.lat.to_radians();
    let x2 = EARTH_RADIUS_M * b.lon.to_radians() * lat_avg_rad.cos();
    let y2 = EARTH_RADIUS_M * b.lat.to_radians();
    ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
}

/// Angle, in radians, at the point shared between two adjacent segments,
/// each given as `(near_endpoint, far_reference_point)` where
/// `near_endpoint` is the point shared with the other segment.
///
/// Returns `None` if the two segments are degenerate (coincident far
/// points), mirroring the "no well-defined angle" case. The result is the
/// angle of the turn one would make walking from the far point of segment
/// one, through the shared point, to the far point of segment two — i.e. pi
/// minus the interior angle between the two rays, via the law of cosines.
pub fn angle_at_shared_point(shared: GeoPoint, far1: GeoPoint, far2: GeoPoint) -> Option<f64> {
    let a = distance_m(shared, far1);
    let b = distance_m(shared, far2);
    let c = distance_m(far1, far2);
    if a == 0.0 || b == 0.0 {
        return None;
    }
    let cos_interior = ((a * a + b * b - c * c) / (2.0 * a * b)).clamp(-1.0, 1.0);
    let interior = cos_interior.acos();
    Some(std::f64::consts::PI - interior)
}

/// Area enclosed by a closed polygon, in square metres, via the shoelace
/// formula applied to points projected onto `proj`.
///
/// The polygon must have at least 4 points with `points[0] == points[last]`
/// (explicitly closed); returns `None` otherwise. Coordinates are taken
/// relative to the first point before summing, which keeps the running sum
/// small regardless of how far the feature sits from the projection anchor.
pub fn polygon_area_m2(proj: &Projection, points: &[GeoPoint]) -> Option<f64> {
    if points.len() < 4 {
        return None;
    }
    let first = points.first()?;
    let last = points.last()?;
    if (first.lat - last.lat).abs() > f64::EPSILON || (first.lon - last.lon).abs() > f64::EPSILON {
        return None;
    }

    let (ref_x, ref_y) = proj.project(*first);
    let projected: Vec<(f64, f64)> = points
        .iter()
        .map(|p| {
            let (x, y) = proj.project(*p);
            (x - ref_x, y - ref_y)
        })
        .collect();

    let mut area = 0.0;
    for pair in projected.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        area += (y1 - y0) * (x0 + x1) * 0.5;
    }
    Some(area.abs())
}
