use crate::core::constants::{MAX_LATITUDE, MAX_LONGITUDE, PROJECTED_EXTENT_MAX, PROJECTED_EXTENT_MIN};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when the coordinate lies inside the range the grid is drawn for
    pub fn is_drawable(&self) -> bool {
        self.lat.abs() <= MAX_LATITUDE && self.lng.abs() <= MAX_LONGITUDE
    }

    /// Clamps both components to the drawable range, keeping their sign.
    /// NaN collapses to zero.
    pub fn clamp_drawable(&self) -> Self {
        Self::new(
            clamp_magnitude(self.lat, MAX_LATITUDE),
            clamp_magnitude(self.lng, MAX_LONGITUDE),
        )
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

fn clamp_magnitude(value: f64, limit: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-limit, limit)
    }
}

/// Represents a point in screen, world-pixel or projected coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Valid range of a plane projection, identical on both axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedExtent {
    pub min: f64,
    pub max: f64,
}

impl ProjectedExtent {
    /// EPSG:3857 square
    pub const WEB_MERCATOR: ProjectedExtent = ProjectedExtent {
        min: PROJECTED_EXTENT_MIN,
        max: PROJECTED_EXTENT_MAX,
    };

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for ProjectedExtent {
    fn default() -> Self {
        Self::WEB_MERCATOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_keeps_sign() {
        let clamped = LatLng::new(-89.0, 200.0).clamp_drawable();
        assert_eq!(clamped.lat, -85.0);
        assert_eq!(clamped.lng, 180.0);
        assert!(clamped.is_drawable());
    }

    #[test]
    fn test_clamp_collapses_nan() {
        let clamped = LatLng::new(f64::NAN, f64::NEG_INFINITY).clamp_drawable();
        assert_eq!(clamped.lat, 0.0);
        assert_eq!(clamped.lng, -180.0);
    }

    #[test]
    fn test_extent() {
        let extent = ProjectedExtent::WEB_MERCATOR;
        assert_eq!(extent.span(), 2.0 * 20037508.3427892);
        assert!(extent.contains(0.0));
        assert!(!extent.contains(20037509.0));
    }

    #[test]
    fn test_point_math() {
        let a = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&Point::default()), 5.0);
        assert_eq!(a.add(&a).subtract(&a), a);
    }
}
