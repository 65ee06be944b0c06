//! Geographic ⇄ projected-meters transforms.
//!
//! The grid engine never does projection math itself: it goes through a
//! [`ProjectionAdapter`], which wraps any [`Projection`] and clamps inverse
//! results to the range the grid is drawn for.

use crate::core::geo::{LatLng, Point, ProjectedExtent};
use std::f64::consts::PI;

/// Web Mercator projection constants
const EARTH_RADIUS: f64 = 6378137.0;

/// A plane projection mapping the sphere onto a fixed square extent
pub trait Projection: Send + Sync {
    /// Degrees to projected meters
    fn forward(&self, lat_lng: LatLng) -> Point;

    /// Projected meters to degrees. May be out of range near the poles.
    fn inverse(&self, point: Point) -> LatLng;

    /// Valid range on both axes
    fn extent(&self) -> ProjectedExtent {
        ProjectedExtent::WEB_MERCATOR
    }
}

/// Spherical Mercator (EPSG:3857)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WebMercator;

impl Projection for WebMercator {
    fn forward(&self, lat_lng: LatLng) -> Point {
        let x = lat_lng.lng.to_radians() * EARTH_RADIUS;
        let y = ((PI / 4.0 + lat_lng.lat.to_radians() / 2.0).tan().ln()) * EARTH_RADIUS;
        Point::new(x, y)
    }

    fn inverse(&self, point: Point) -> LatLng {
        let lng = (point.x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (point.y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
        LatLng::new(lat, lng)
    }
}

/// Wraps a projection with the clamping rules the grid relies on
#[derive(Debug, Clone, Default)]
pub struct ProjectionAdapter<P: Projection = WebMercator> {
    projection: P,
}

impl<P: Projection> ProjectionAdapter<P> {
    pub fn new(projection: P) -> Self {
        Self { projection }
    }

    pub fn projection(&self) -> &P {
        &self.projection
    }

    pub fn extent(&self) -> ProjectedExtent {
        self.projection.extent()
    }

    pub fn forward(&self, lng: f64, lat: f64) -> Point {
        self.projection.forward(LatLng::new(lat, lng))
    }

    /// Inverse transform, clamped to |lat| ≤ 85 and |lng| ≤ 180.
    pub fn inverse(&self, x: f64, y: f64) -> LatLng {
        self.projection.inverse(Point::new(x, y)).clamp_drawable()
    }

    /// Northing of a parallel, in meters
    pub fn latitude_northing(&self, lat: f64) -> f64 {
        self.forward(0.0, lat).y
    }

    /// Easting of a meridian, in meters
    pub fn longitude_easting(&self, lng: f64) -> f64 {
        self.forward(lng, 0.0).x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::PROJECTED_EXTENT_MAX;

    #[test]
    fn test_forward_hits_extent_at_antimeridian() {
        let adapter = ProjectionAdapter::new(WebMercator);
        let easting = adapter.longitude_easting(180.0);
        assert!((easting - PROJECTED_EXTENT_MAX).abs() < 1e-3);
    }

    #[test]
    fn test_round_trip() {
        let adapter = ProjectionAdapter::new(WebMercator);
        for &(lng, lat) in &[(0.0, 0.0), (-74.006, 40.7128), (139.65, -35.67), (179.0, 84.0)] {
            let meters = adapter.forward(lng, lat);
            let back = adapter.inverse(meters.x, meters.y);
            assert!((back.lat - lat).abs() < 1e-9);
            assert!((back.lng - lng).abs() < 1e-9);
        }
    }

    #[test]
    fn test_inverse_is_clamped() {
        let adapter = ProjectionAdapter::new(WebMercator);

        let top = adapter.inverse(0.0, -PROJECTED_EXTENT_MAX);
        assert_eq!(top.lat, -85.0);

        let beyond = adapter.inverse(3.0 * PROJECTED_EXTENT_MAX, 5.0 * PROJECTED_EXTENT_MAX);
        assert_eq!(beyond.lat, 85.0);
        assert_eq!(beyond.lng, 180.0);

        let infinite = adapter.inverse(f64::NEG_INFINITY, f64::INFINITY);
        assert_eq!(infinite.lat, 85.0);
        assert_eq!(infinite.lng, -180.0);
    }

    #[test]
    fn test_inverse_never_returns_nan() {
        let adapter = ProjectionAdapter::new(WebMercator);
        let result = adapter.inverse(f64::NAN, f64::NAN);
        assert_eq!(result, LatLng::new(0.0, 0.0));
    }
}
